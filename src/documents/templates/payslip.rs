//! Payslip, or contractor invoice when rendered in contractor mode.

use super::{company_header, validate_line_items, validate_parties, website_href};
use crate::documents::aggregation::{annual_salary, net_pay, total_deductions, total_earnings};
use crate::documents::display::{DisplayTree, Section, Table};
use crate::documents::format::format_currency;
use crate::documents::models::{DocumentBundle, PayslipMode, RenderOptions};
use crate::documents::traits::Template;
use crate::documents::validation::{validate_positive, validate_required, ValidationErrors};
use crate::documents::{DocumentError, DocumentType};

/// Printed when the bundle carries no bank details.
pub const PLACEHOLDER_BANK_NAME: &str = "CHASE BANK";
pub const PLACEHOLDER_ACCOUNT_NUMBER: &str = "892-5647391";

const ANNUAL_LEAVE_BALANCE: &str = "48 hours";
const SICK_LEAVE_BALANCE: &str = "40 hours";

struct Labels {
    title: &'static str,
    person: &'static str,
    status_label: &'static str,
    status_value: &'static str,
    agreement_label: &'static str,
    agreement_value: &'static str,
    classification_label: &'static str,
}

impl Labels {
    fn for_mode(mode: PayslipMode) -> Self {
        match mode {
            PayslipMode::Employee => Self {
                title: "Payslip",
                person: "Employee",
                status_label: "Employment status",
                status_value: "Full time",
                agreement_label: "Award/Agreement",
                agreement_value: "2024-2025 Employment Contract",
                classification_label: "Classification",
            },
            PayslipMode::Contractor => Self {
                title: "INVOICE",
                person: "Contractor",
                status_label: "Contract type",
                status_value: "Independent Contractor",
                agreement_label: "Contract",
                agreement_value: "2024-2025 Service Agreement",
                classification_label: "Service type",
            },
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct PayslipTemplate;

impl Template for PayslipTemplate {
    fn document_type(&self) -> DocumentType {
        DocumentType::Payslip
    }

    fn validate(&self, bundle: &DocumentBundle) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        validate_parties(bundle, &mut errors);
        validate_required(&bundle.employee.position, "employee.position", "Position", &mut errors);
        validate_positive(bundle.employee.pay_rate, "employee.payRate", "Pay rate", &mut errors);
        validate_required(
            &bundle.meta.pay_period_start,
            "meta.payPeriodStart",
            "Pay period start",
            &mut errors,
        );
        validate_required(
            &bundle.meta.pay_period_end,
            "meta.payPeriodEnd",
            "Pay period end",
            &mut errors,
        );
        validate_required(&bundle.meta.pay_date, "meta.payDate", "Pay date", &mut errors);
        validate_line_items(bundle, &mut errors);
        errors.into_result()
    }

    fn build(&self, bundle: &DocumentBundle, options: &RenderOptions) -> DisplayTree {
        let labels = Labels::for_mode(options.mode);
        let employee = &bundle.employee;
        let meta = &bundle.meta;

        let mut header = company_header(bundle, options);
        if !bundle.company.website.trim().is_empty() {
            header = header.link(
                bundle.company.website.as_str(),
                website_href(&bundle.company.website),
            );
        }

        let details = Section::new("details")
            .field(format!("{} name", labels.person), employee.name.to_uppercase())
            .field(labels.status_label, labels.status_value)
            .field(labels.agreement_label, labels.agreement_value)
            .field(labels.classification_label, employee.position.as_str())
            .field("Hourly rate", format_currency(employee.pay_rate))
            .field("Annual salary", format_currency(annual_salary(employee.pay_rate)))
            .field(
                "Pay period",
                format!("{} to {}", meta.pay_period_start, meta.pay_period_end),
            )
            .field("Pay date", meta.pay_date.as_str())
            .field("Annual leave balance", ANNUAL_LEAVE_BALANCE)
            .field("Sick/carer's leave", SICK_LEAVE_BALANCE);

        let entitlements = bundle
            .earnings
            .iter()
            .fold(
                Table::new(["Description", "Hours/units", "Rate", "Total"]),
                |table, item| {
                    table.row([
                        item.description.clone(),
                        item.quantity.to_string(),
                        format_currency(item.rate),
                        format_currency(item.amount),
                    ])
                },
            )
            .footer([
                "Total".to_string(),
                String::new(),
                String::new(),
                format_currency(total_earnings(&bundle.earnings)),
            ]);

        let deductions = bundle
            .deductions
            .iter()
            .fold(Table::new(["Description", "Total"]), |table, item| {
                table.row([item.description.clone(), format_currency(item.amount)])
            })
            .footer(["Total".to_string(), format_currency(total_deductions(&bundle.deductions))]);

        let bank = bundle.bank.as_ref();
        let bank_name = non_blank(bank.map(|b| b.bank_name.as_str())).unwrap_or(PLACEHOLDER_BANK_NAME);
        let account = non_blank(bank.map(|b| b.account_number.as_str()))
            .unwrap_or(PLACEHOLDER_ACCOUNT_NUMBER);

        let net = Section::new("netPay")
            .heading("Net pay")
            .field("Bank details", bank_name)
            .field("Account number", account)
            .field(
                "Total net pay",
                format_currency(net_pay(&bundle.earnings, &bundle.deductions)),
            );

        DisplayTree::new(DocumentType::Payslip, labels.title)
            .section(header)
            .section(details)
            .section(Section::new("entitlements").heading("Entitlements").table(entitlements))
            .section(Section::new("deductions").heading("Deductions").table(deductions))
            .section(net)
    }
}
