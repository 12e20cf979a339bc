//! Template contract shared by every document type.

use super::display::DisplayTree;
use super::models::{DocumentBundle, RenderOptions};
use super::{DocumentError, DocumentType};

/// A pure function from bundle and options to a display tree.
pub trait Template {
    fn document_type(&self) -> DocumentType;

    /// Check that every field this template prints is present.
    fn validate(&self, bundle: &DocumentBundle) -> Result<(), DocumentError>;

    /// Build the tree. Only called on a bundle that passed [`Template::validate`].
    fn build(&self, bundle: &DocumentBundle, options: &RenderOptions) -> DisplayTree;

    fn render(
        &self,
        bundle: &DocumentBundle,
        options: &RenderOptions,
    ) -> Result<DisplayTree, DocumentError> {
        self.validate(bundle)?;
        Ok(self.build(bundle, options).finish())
    }
}
