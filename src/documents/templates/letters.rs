//! Employment verification and offer letters.

use super::{company_header, validate_parties};
use crate::documents::aggregation::annual_salary;
use crate::documents::display::{DisplayTree, Section};
use crate::documents::format::{format_currency, format_long_date};
use crate::documents::models::{DocumentBundle, RenderOptions};
use crate::documents::traits::Template;
use crate::documents::validation::{validate_positive, validate_required, ValidationErrors};
use crate::documents::{DocumentError, DocumentType};

const SIGNATORY: &str = "HR Manager";

fn validate_letter(bundle: &DocumentBundle) -> Result<(), DocumentError> {
    let mut errors = ValidationErrors::new();
    validate_parties(bundle, &mut errors);
    validate_required(&bundle.employee.position, "employee.position", "Position", &mut errors);
    validate_positive(bundle.employee.pay_rate, "employee.payRate", "Pay rate", &mut errors);
    validate_required(
        &bundle.meta.pay_period_start,
        "meta.payPeriodStart",
        "Start date",
        &mut errors,
    );
    errors.into_result()
}

fn signature(company_name: &str) -> Section {
    Section::new("signature")
        .text("Sincerely,")
        .field("Signatory", SIGNATORY)
        .field("Organisation", company_name)
}

pub struct EmploymentLetterTemplate;

impl Template for EmploymentLetterTemplate {
    fn document_type(&self) -> DocumentType {
        DocumentType::EmploymentLetter
    }

    fn validate(&self, bundle: &DocumentBundle) -> Result<(), DocumentError> {
        validate_letter(bundle)
    }

    fn build(&self, bundle: &DocumentBundle, options: &RenderOptions) -> DisplayTree {
        let company = &bundle.company;
        let employee = &bundle.employee;

        let body = Section::new("body")
            .field("Date", format_long_date(options.issued_on))
            .text("To Whom It May Concern,")
            .text(format!(
                "This letter is to confirm that {} is employed at {} as a {}. Their employment commenced on {}.",
                employee.name, company.name, employee.position, bundle.meta.pay_period_start
            ));

        let details = Section::new("details")
            .heading("Employee Details")
            .field("Employee ID", employee.employee_id.as_str())
            .field("Position", employee.position.as_str())
            .field("Employment Type", "Full-time")
            .field(
                "Current Annual Salary",
                format_currency(annual_salary(employee.pay_rate)),
            );

        let closing = Section::new("closing")
            .text(format!(
                "{} is a valued member of our team and has demonstrated excellent performance throughout their tenure with our organization.",
                employee.name
            ))
            .text(format!(
                "If you require any additional information, please contact our Human Resources department at {} or {}.",
                company.phone, company.email
            ));

        DisplayTree::new(DocumentType::EmploymentLetter, "EMPLOYMENT VERIFICATION LETTER")
            .section(company_header(bundle, options))
            .section(body)
            .section(details)
            .section(closing)
            .section(signature(&company.name))
    }
}

pub struct OfferLetterTemplate;

impl Template for OfferLetterTemplate {
    fn document_type(&self) -> DocumentType {
        DocumentType::OfferLetter
    }

    fn validate(&self, bundle: &DocumentBundle) -> Result<(), DocumentError> {
        validate_letter(bundle)
    }

    fn build(&self, bundle: &DocumentBundle, options: &RenderOptions) -> DisplayTree {
        let company = &bundle.company;
        let employee = &bundle.employee;

        let recipient = Section::new("recipient")
            .field("Date", format_long_date(options.issued_on))
            .text(employee.name.as_str())
            .text(employee.address.as_str());

        let body = Section::new("body")
            .text(format!("Dear {},", employee.name))
            .text(format!(
                "We are pleased to offer you the position of {} at {}. We believe your skills and experience will be a valuable asset to our team.",
                employee.position, company.name
            ));

        let terms = Section::new("terms")
            .heading("Position Details")
            .field("Title", employee.position.as_str())
            .field("Start Date", bundle.meta.pay_period_start.as_str())
            .field(
                "Compensation",
                format!(
                    "{} per year ({}/hour)",
                    format_currency(annual_salary(employee.pay_rate)),
                    format_currency(employee.pay_rate)
                ),
            )
            .field("Employment Type", "Full-time")
            .field("Benefits", "Health insurance, 401(k), Paid time off");

        let closing = Section::new("closing")
            .text("This offer is contingent upon successful completion of a background check and reference verification.")
            .text("Please sign and return this letter within 7 business days to confirm your acceptance.")
            .text("We look forward to welcoming you to our team!");

        let acceptance = Section::new("acceptance")
            .heading("Acceptance Signature")
            .text(employee.name.as_str());

        DisplayTree::new(DocumentType::OfferLetter, "OFFER OF EMPLOYMENT")
            .section(company_header(bundle, options))
            .section(recipient)
            .section(body)
            .section(terms)
            .section(closing)
            .section(signature(&company.name))
            .section(acceptance)
    }
}
