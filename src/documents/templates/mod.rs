//! One template per document type, plus the header/validation pieces they share.

pub mod faculty;
pub mod id_card;
pub mod letters;
pub mod payslip;
pub mod tax;

pub use faculty::FacultyListingTemplate;
pub use id_card::{CardStyle, IdCardTemplate};
pub use letters::{EmploymentLetterTemplate, OfferLetterTemplate};
pub use payslip::PayslipTemplate;
pub use tax::{TaxStatementTemplate, W2Template};

use super::display::Section;
use super::models::{DocumentBundle, RenderOptions};
use super::validation::{validate_amounts, validate_required, ValidationErrors};

/// Fields every template prints.
pub(crate) fn validate_parties(bundle: &DocumentBundle, errors: &mut ValidationErrors) {
    validate_required(&bundle.company.name, "company.name", "Company name", errors);
    validate_required(&bundle.employee.name, "employee.name", "Employee name", errors);
}

pub(crate) fn validate_line_items(bundle: &DocumentBundle, errors: &mut ValidationErrors) {
    validate_amounts(bundle.earnings.iter().map(|e| e.amount), "earnings", errors);
    validate_amounts(bundle.deductions.iter().map(|d| d.amount), "deductions", errors);
}

/// Letterhead: optional logo, upper-cased company name, address and contacts.
pub(crate) fn company_header(bundle: &DocumentBundle, options: &RenderOptions) -> Section {
    let company = &bundle.company;
    let mut header = Section::new("header")
        .image_opt("logo", options.logo_ref.as_deref())
        .heading(company.name.to_uppercase())
        .field("Address", company.address.as_str());

    if !company.phone.trim().is_empty() {
        header = header.field("Phone", company.phone.as_str());
    }
    if !company.email.trim().is_empty() {
        header = header.field("Email", company.email.as_str());
    }
    header
}

/// Websites are entered without a scheme as often as with one.
pub(crate) fn website_href(website: &str) -> String {
    let trimmed = website.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use crate::documents::models::*;

    pub fn bundle() -> DocumentBundle {
        DocumentBundle {
            company: Company {
                name: "Acme Widgets".to_string(),
                phone: "(555) 010-2000".to_string(),
                email: "payroll@acme.example".to_string(),
                address: "1 Test Plaza, Springfield".to_string(),
                website: "acme.example".to_string(),
            },
            employee: Employee {
                name: "Jane Doe".to_string(),
                position: "Lecturer".to_string(),
                pay_rate: 25.0,
                employee_id: "EMP-004821".to_string(),
                tax_code: "1257L".to_string(),
                address: "9 Elm St, Springfield".to_string(),
            },
            bank: Some(BankDetails {
                bank_name: "Test Savings".to_string(),
                account_number: "000-111222".to_string(),
            }),
            meta: PayMeta {
                pay_period_start: "2026-09-01".to_string(),
                pay_period_end: "2026-09-30".to_string(),
                pay_date: "2026-10-01".to_string(),
            },
            earnings: vec![
                EarningItem {
                    id: 1,
                    description: "Ordinary hours".to_string(),
                    quantity: 4.0,
                    rate: 25.0,
                    amount: 100.0,
                },
                EarningItem {
                    id: 2,
                    description: "Overtime".to_string(),
                    quantity: 1.0,
                    rate: 50.0,
                    amount: 50.0,
                },
            ],
            deductions: vec![DeductionItem {
                id: 1,
                description: "Income tax".to_string(),
                amount: 30.0,
            }],
        }
    }

    pub fn options() -> RenderOptions {
        RenderOptions::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }
}
