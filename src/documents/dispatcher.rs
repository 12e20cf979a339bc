//! Single entry point mapping a document type to its template.

use super::display::DisplayTree;
use super::models::{DocumentBundle, RenderOptions};
use super::templates::{
    EmploymentLetterTemplate, FacultyListingTemplate, IdCardTemplate, OfferLetterTemplate,
    PayslipTemplate, TaxStatementTemplate, W2Template,
};
use super::traits::Template;
use super::{DocumentError, DocumentType};
use crate::catalog::Catalog;

/// Render against the embedded institution catalog.
pub fn render(
    doc_type: DocumentType,
    bundle: &DocumentBundle,
    options: &RenderOptions,
) -> Result<DisplayTree, DocumentError> {
    render_with_catalog(Catalog::embedded(), doc_type, bundle, options)
}

/// Parse a wire tag, then render. Unknown tags fail before any template runs.
pub fn render_tag(
    tag: &str,
    bundle: &DocumentBundle,
    options: &RenderOptions,
) -> Result<DisplayTree, DocumentError> {
    let doc_type: DocumentType = tag.parse()?;
    render(doc_type, bundle, options)
}

pub fn render_with_catalog(
    catalog: &Catalog,
    doc_type: DocumentType,
    bundle: &DocumentBundle,
    options: &RenderOptions,
) -> Result<DisplayTree, DocumentError> {
    let result = match doc_type {
        DocumentType::Payslip => PayslipTemplate.render(bundle, options),
        DocumentType::TaxStatement => TaxStatementTemplate.render(bundle, options),
        DocumentType::W2 => W2Template.render(bundle, options),
        DocumentType::EmploymentLetter => EmploymentLetterTemplate.render(bundle, options),
        DocumentType::OfferLetter => OfferLetterTemplate.render(bundle, options),
        DocumentType::FacultyListing => FacultyListingTemplate.render(bundle, options),
        DocumentType::IdCard => IdCardTemplate::new(catalog).render(bundle, options),
    };

    match &result {
        Ok(tree) => log::debug!("Rendered {} with {} sections", doc_type, tree.sections.len()),
        Err(e) => log::info!("Rejected {} render: {}", doc_type, e),
    }
    result
}
