use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Issuing organisation shown in document headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    pub name: String,
    pub position: String,
    /// Hourly rate.
    pub pay_rate: f64,
    pub employee_id: String,
    pub tax_code: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_number: String,
}

/// Pay period metadata. Dates are display strings supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PayMeta {
    pub pay_period_start: String,
    pub pay_period_end: String,
    pub pay_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EarningItem {
    pub id: u64,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DeductionItem {
    pub id: u64,
    pub description: String,
    pub amount: f64,
}

/// Everything a template may read. Built fresh per render request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentBundle {
    pub company: Company,
    pub employee: Employee,
    pub bank: Option<BankDetails>,
    pub meta: PayMeta,
    pub earnings: Vec<EarningItem>,
    pub deductions: Vec<DeductionItem>,
}

/// Whether a payslip is issued to an employee or invoiced by a contractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PayslipMode {
    #[default]
    Employee,
    Contractor,
}

/// Per-request rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default)]
    pub mode: PayslipMode,
    /// Card style name for `idCard`; unknown names render as `original`.
    #[serde(default)]
    pub card_style: Option<String>,
    /// Opaque logo reference passed through to the renderer.
    #[serde(default)]
    pub logo_ref: Option<String>,
    /// Opaque photo reference passed through to the renderer.
    #[serde(default)]
    pub photo_ref: Option<String>,
    /// The "today" printed on letters and cards.
    #[serde(default = "local_today")]
    pub issued_on: NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(local_today())
    }
}

impl RenderOptions {
    pub fn new(issued_on: NaiveDate) -> Self {
        Self {
            mode: PayslipMode::default(),
            card_style: None,
            logo_ref: None,
            photo_ref: None,
            issued_on,
        }
    }

    pub fn with_mode(mut self, mode: PayslipMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_card_style(mut self, style: impl Into<String>) -> Self {
        self.card_style = Some(style.into());
        self
    }

    pub fn with_logo(mut self, logo_ref: impl Into<String>) -> Self {
        self.logo_ref = Some(logo_ref.into());
        self
    }

    pub fn with_photo(mut self, photo_ref: impl Into<String>) -> Self {
        self.photo_ref = Some(photo_ref.into());
        self
    }
}

/// Body of `POST /api/documents/{doc_type}/render`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenderRequest {
    pub bundle: DocumentBundle,
    #[serde(default)]
    pub options: RenderOptions,
}
