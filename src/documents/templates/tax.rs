//! Tax withholding statement and W-2 style wage statement.
//!
//! Both project the period's earnings onto a year and apply the fixed
//! illustrative rates from [`Withholding`].

use chrono::Datelike;

use super::{validate_line_items, validate_parties};
use crate::documents::aggregation::{total_earnings, Withholding};
use crate::documents::display::{DisplayTree, Section, Table};
use crate::documents::format::{format_currency, format_long_date, last_four};
use crate::documents::models::{DocumentBundle, RenderOptions};
use crate::documents::traits::Template;
use crate::documents::validation::{validate_required, ValidationErrors};
use crate::documents::{DocumentError, DocumentType};

const MASKED_EIN: &str = "XX-XXXXXXX";
const SSN_FALLBACK_DIGITS: &str = "1234";

fn validate_tax_bundle(bundle: &DocumentBundle) -> Result<(), DocumentError> {
    let mut errors = ValidationErrors::new();
    validate_parties(bundle, &mut errors);
    validate_required(&bundle.company.address, "company.address", "Company address", &mut errors);
    validate_required(&bundle.employee.address, "employee.address", "Employee address", &mut errors);
    validate_line_items(bundle, &mut errors);
    errors.into_result()
}

pub struct TaxStatementTemplate;

impl Template for TaxStatementTemplate {
    fn document_type(&self) -> DocumentType {
        DocumentType::TaxStatement
    }

    fn validate(&self, bundle: &DocumentBundle) -> Result<(), DocumentError> {
        validate_tax_bundle(bundle)
    }

    fn build(&self, bundle: &DocumentBundle, options: &RenderOptions) -> DisplayTree {
        let company = &bundle.company;
        let employee = &bundle.employee;
        let w = Withholding::from_period_earnings(total_earnings(&bundle.earnings));

        let header = Section::new("header")
            .image_opt("logo", options.logo_ref.as_deref())
            .heading(company.name.to_uppercase())
            .field("Address", company.address.as_str());

        let employer = Section::new("employer")
            .heading("EMPLOYER INFORMATION")
            .field("Employer Name", company.name.as_str())
            .field("Employer ID (EIN)", MASKED_EIN)
            .field("Address", company.address.as_str());

        let employee_info = Section::new("employee")
            .heading("EMPLOYEE INFORMATION")
            .field("Employee Name", employee.name.as_str())
            .field("Employee ID", employee.employee_id.as_str())
            .field("Tax Code", employee.tax_code.as_str())
            .field("Address", employee.address.as_str());

        let summary = Table::new(["Description", "Amount"])
            .row(["Gross Wages".to_string(), format_currency(w.gross_wages)])
            .row(["Federal Income Tax Withheld".to_string(), format_currency(w.federal)])
            .row(["State Income Tax Withheld".to_string(), format_currency(w.state)])
            .row(["Social Security Tax".to_string(), format_currency(w.social_security)])
            .row(["Medicare Tax".to_string(), format_currency(w.medicare)])
            .footer(["Total Tax Withheld".to_string(), format_currency(w.total())]);

        let notes = Section::new("notes")
            .text("This statement is provided for informational purposes. Please consult a tax professional for advice.")
            .field("Generated on", format_long_date(options.issued_on));

        DisplayTree::new(DocumentType::TaxStatement, "TAX WITHHOLDING STATEMENT")
            .section(header)
            .section(employer)
            .section(employee_info)
            .section(
                Section::new("summary")
                    .heading("TAX SUMMARY - YEAR TO DATE")
                    .table(summary),
            )
            .section(notes)
    }
}

fn box_row(number: &str, description: &str, amount: f64) -> [String; 3] {
    [number.to_string(), description.to_string(), format_currency(amount)]
}

pub struct W2Template;

impl Template for W2Template {
    fn document_type(&self) -> DocumentType {
        DocumentType::W2
    }

    fn validate(&self, bundle: &DocumentBundle) -> Result<(), DocumentError> {
        validate_tax_bundle(bundle)
    }

    fn build(&self, bundle: &DocumentBundle, options: &RenderOptions) -> DisplayTree {
        let company = &bundle.company;
        let employee = &bundle.employee;
        let w = Withholding::from_period_earnings(total_earnings(&bundle.earnings));

        let header = Section::new("header")
            .image_opt("logo", options.logo_ref.as_deref())
            .text("Copy B - To Be Filed With Employee's FEDERAL Tax Return");

        let identifiers = Section::new("identifiers")
            .field(
                "a. Employee's social security number",
                format!("XXX-XX-{}", last_four(&employee.employee_id, SSN_FALLBACK_DIGITS)),
            )
            .field("b. Employer identification number (EIN)", MASKED_EIN);

        let employer = Section::new("employer")
            .heading("c. Employer's name, address, and ZIP code")
            .text(company.name.as_str())
            .text(company.address.as_str());

        let employee_info = Section::new("employee")
            .heading("e. Employee's name, address, and ZIP code")
            .text(employee.name.as_str())
            .text(employee.address.as_str());

        let boxes = Table::new(["Box", "Description", "Amount"])
            .row(box_row("1", "Wages, tips, other compensation", w.gross_wages))
            .row(box_row("2", "Federal income tax withheld", w.federal))
            .row(box_row("3", "Social security wages", w.gross_wages))
            .row(box_row("4", "Social security tax withheld", w.social_security))
            .row(box_row("5", "Medicare wages and tips", w.gross_wages))
            .row(box_row("6", "Medicare tax withheld", w.medicare));

        let notes = Section::new("notes")
            .field("Tax Year", options.issued_on.year().to_string());

        DisplayTree::new(DocumentType::W2, "Form W-2 Wage and Tax Statement")
            .section(header)
            .section(identifiers)
            .section(employer)
            .section(employee_info)
            .section(Section::new("boxes").table(boxes))
            .section(notes)
    }
}
