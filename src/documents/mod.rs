//! Documents module - turns a payroll data bundle into a display tree.
//!
//! Supported document types:
//! - `payslip` - payslip or contractor invoice
//! - `taxStatement` - year-to-date tax withholding statement
//! - `w2` - wage and tax statement
//! - `employmentLetter` / `offerLetter` - HR letters
//! - `facultyListing` - staff directory page
//! - `idCard` - staff identity card, the only type that consults the catalog
//!
//! Every tree is a specimen: it carries [`display::SPECIMEN_WATERMARK`].

pub mod aggregation;
pub mod dispatcher;
pub mod display;
pub mod format;
pub mod handlers;
pub mod models;
pub mod templates;
pub mod traits;
pub mod validation;

pub use dispatcher::{render, render_tag};
pub use display::{DisplayTree, Node, Section};
pub use models::{DocumentBundle, RenderOptions};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Errors that can occur while rendering a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("unsupported document type: '{0}'")]
    UnsupportedDocumentType(String),
    #[error("invalid document bundle: {0}")]
    InvalidBundle(String),
}

/// The closed set of renderable documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    Payslip,
    TaxStatement,
    W2,
    EmploymentLetter,
    OfferLetter,
    FacultyListing,
    IdCard,
}

impl DocumentType {
    pub const ALL: [DocumentType; 7] = [
        Self::Payslip,
        Self::TaxStatement,
        Self::W2,
        Self::EmploymentLetter,
        Self::OfferLetter,
        Self::FacultyListing,
        Self::IdCard,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Payslip => "payslip",
            Self::TaxStatement => "taxStatement",
            Self::W2 => "w2",
            Self::EmploymentLetter => "employmentLetter",
            Self::OfferLetter => "offerLetter",
            Self::FacultyListing => "facultyListing",
            Self::IdCard => "idCard",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocumentType {
    type Err = DocumentError;

    /// Accepts the canonical tags plus the short tags used by the web form.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "payslip" => Ok(Self::Payslip),
            "taxStatement" | "tax" => Ok(Self::TaxStatement),
            "w2" => Ok(Self::W2),
            "employmentLetter" | "employment" => Ok(Self::EmploymentLetter),
            "offerLetter" | "offer" => Ok(Self::OfferLetter),
            "facultyListing" | "faculty" => Ok(Self::FacultyListing),
            "idCard" | "teacherCard" => Ok(Self::IdCard),
            other => Err(DocumentError::UnsupportedDocumentType(other.to_string())),
        }
    }
}
