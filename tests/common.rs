//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use specimen_docs_server::documents::models::{
    Company, DeductionItem, DocumentBundle, EarningItem, Employee, PayMeta,
};
use specimen_docs_server::documents::RenderOptions;

pub fn sample_bundle() -> DocumentBundle {
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
        bank: None,
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

pub fn fixed_options() -> RenderOptions {
    RenderOptions::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
}
