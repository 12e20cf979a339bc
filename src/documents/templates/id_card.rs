//! Two-sided staff identity card.
//!
//! The institution comes from the catalog: a company name that matches an
//! entry wins, otherwise the employee name's hash picks one. The department
//! always comes from the employee name's hash.

use chrono::Months;

use crate::catalog::{resolve_institution, Catalog, InstitutionRecord};
use crate::documents::display::{DisplayTree, Section, StyleDescriptor};
use crate::documents::format::{email_local_part, format_long_date};
use crate::documents::models::{DocumentBundle, RenderOptions};
use crate::documents::traits::Template;
use crate::documents::validation::{validate_required, ValidationErrors};
use crate::documents::{DocumentError, DocumentType};

const VALIDITY_MONTHS: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Original,
    Modern,
    Simple,
}

impl CardStyle {
    /// Unknown or missing names fall back to [`CardStyle::Original`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("original") => Self::Original,
            Some("modern") => Self::Modern,
            Some("simple") => Self::Simple,
            Some(other) => {
                log::warn!("Unknown card style '{}', using original", other);
                Self::Original
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Modern => "modern",
            Self::Simple => "simple",
        }
    }

    /// Palette for this style, tinted with the institution's brand color.
    pub fn descriptor(self, color: &str) -> StyleDescriptor {
        let (front, back, radius, shadow, header_bg, accent, text, header_text) = match self {
            Self::Original => (
                format!("linear-gradient(135deg, {color} 0%, {color}dd 100%)"),
                "linear-gradient(135deg, #f5f5f5 0%, #e8e8e8 100%)".to_string(),
                "16px",
                "0 25px 70px rgba(0,0,0,0.6)",
                "#fff".to_string(),
                "#4fc3f7".to_string(),
                "#fff",
                color.to_string(),
            ),
            Self::Modern => (
                format!("linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, {color} 100%)"),
                "linear-gradient(135deg, #0f0f1a 0%, #1a1a2e 100%)".to_string(),
                "24px",
                "0 30px 80px rgba(0,0,0,0.8), 0 0 40px rgba(102,126,234,0.3)",
                "rgba(255,255,255,0.95)".to_string(),
                "#667eea".to_string(),
                "#fff",
                color.to_string(),
            ),
            Self::Simple => (
                "#ffffff".to_string(),
                "#fafafa".to_string(),
                "8px",
                "0 4px 20px rgba(0,0,0,0.15)",
                color.to_string(),
                color.to_string(),
                "#333",
                "#fff".to_string(),
            ),
        };

        StyleDescriptor {
            variant: self.name().to_string(),
            front_background: front,
            back_background: back,
            border_radius: radius.to_string(),
            shadow: shadow.to_string(),
            header_background: header_bg,
            accent_color: accent,
            text_color: text.to_string(),
            header_text_color: header_text,
        }
    }
}

pub struct IdCardTemplate<'a> {
    catalog: &'a Catalog,
}

impl<'a> IdCardTemplate<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    fn front(
        &self,
        institution: &InstitutionRecord,
        department: &str,
        bundle: &DocumentBundle,
        options: &RenderOptions,
    ) -> Section {
        let employee = &bundle.employee;
        let issued = options.issued_on;
        let valid_thru = issued
            .checked_add_months(Months::new(VALIDITY_MONTHS))
            .unwrap_or(issued);

        Section::new("front")
            .heading(institution.short_name.as_str())
            .image("institutionLogo", institution.logo_ref.as_str())
            .image_opt("photo", options.photo_ref.as_deref())
            .field("Institution", institution.name.as_str())
            .field("Card Type", "STAFF")
            .field("Full Name", employee.name.as_str())
            .field("Employee ID", employee.employee_id.as_str())
            .field("Department", department)
            .field("Issued", format_long_date(issued))
            .field("Valid Thru", format_long_date(valid_thru))
    }

    fn back(&self, institution: &InstitutionRecord, bundle: &DocumentBundle) -> Section {
        Section::new("back")
            .heading("CARDHOLDER ADDRESS")
            .field("Cardholder Address", institution.address.as_str())
            .field(
                "Email",
                format!("{}@{}", email_local_part(&bundle.employee.name), institution.domain),
            )
            .text(format!(
                "This card is the property of {}. If found, please return to any campus security office.",
                institution.name
            ))
            .field("Campus Security", "(555) 123-4567")
            .field("HR Department", "(555) 123-4568")
            .field("Cardholder Signature", "")
    }
}

impl Template for IdCardTemplate<'_> {
    fn document_type(&self) -> DocumentType {
        DocumentType::IdCard
    }

    /// Company name is optional: a blank one lets the name hash decide.
    fn validate(&self, bundle: &DocumentBundle) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        validate_required(&bundle.employee.name, "employee.name", "Employee name", &mut errors);
        validate_required(
            &bundle.employee.employee_id,
            "employee.employeeId",
            "Employee ID",
            &mut errors,
        );
        errors.into_result()
    }

    fn build(&self, bundle: &DocumentBundle, options: &RenderOptions) -> DisplayTree {
        let selection = resolve_institution(
            self.catalog,
            Some(bundle.company.name.as_str()),
            &bundle.employee.name,
        );
        let style = CardStyle::from_name(options.card_style.as_deref());
        let institution = &selection.institution;

        DisplayTree::new(DocumentType::IdCard, "Staff Identification Card")
            .with_style(style.descriptor(&institution.color))
            .section(self.front(institution, &selection.department, bundle, options))
            .section(self.back(institution, bundle))
    }
}
