//! Derived payroll figures. Nothing here is stored on the bundle.
//!
//! The tax rates are illustrative constants, not a tax computation.

use super::models::{DeductionItem, EarningItem};

pub const HOURS_PER_WEEK: f64 = 38.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Months used to project one pay period of earnings onto a tax year.
pub const PERIODS_PER_YEAR: f64 = 12.0;

pub const FEDERAL_RATE: f64 = 0.22;
pub const STATE_RATE: f64 = 0.05;
pub const SOCIAL_SECURITY_RATE: f64 = 0.062;
pub const MEDICARE_RATE: f64 = 0.0145;

pub fn total_earnings(earnings: &[EarningItem]) -> f64 {
    earnings.iter().map(|e| e.amount).sum()
}

pub fn total_deductions(deductions: &[DeductionItem]) -> f64 {
    deductions.iter().map(|d| d.amount).sum()
}

pub fn net_pay(earnings: &[EarningItem], deductions: &[DeductionItem]) -> f64 {
    total_earnings(earnings) - total_deductions(deductions)
}

/// Hourly rate over a fixed 38-hour week and 52-week year.
pub fn annual_salary(pay_rate: f64) -> f64 {
    pay_rate * HOURS_PER_WEEK * WEEKS_PER_YEAR
}

/// Year-to-date withholding figures derived from one period's earnings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Withholding {
    pub gross_wages: f64,
    pub federal: f64,
    pub state: f64,
    pub social_security: f64,
    pub medicare: f64,
}

impl Withholding {
    pub fn from_period_earnings(total_earnings: f64) -> Self {
        let gross_wages = total_earnings * PERIODS_PER_YEAR;
        Self {
            gross_wages,
            federal: gross_wages * FEDERAL_RATE,
            state: gross_wages * STATE_RATE,
            social_security: gross_wages * SOCIAL_SECURITY_RATE,
            medicare: gross_wages * MEDICARE_RATE,
        }
    }

    pub fn total(&self) -> f64 {
        self.federal + self.state + self.social_security + self.medicare
    }
}
