//! Renderer-neutral display tree.
//!
//! Templates resolve every value (formatted currency, institution,
//! department, totals) before building the tree; an external renderer only
//! lays it out.

use serde::Serialize;
use utoipa::ToSchema;

use super::DocumentType;

pub const SPECIMEN_WATERMARK: &str = "SPECIMEN - NOT A VALID DOCUMENT";

/// Fully resolved output of one render call.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTree {
    pub document_type: DocumentType,
    pub title: String,
    /// Always [`SPECIMEN_WATERMARK`].
    pub watermark: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleDescriptor>,
    pub sections: Vec<Section>,
}

impl DisplayTree {
    pub fn new(document_type: DocumentType, title: impl Into<String>) -> Self {
        Self {
            document_type,
            title: title.into(),
            watermark: SPECIMEN_WATERMARK.to_string(),
            style: None,
            sections: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: StyleDescriptor) -> Self {
        self.style = Some(style);
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Appends the specimen footer and returns the finished tree.
    pub fn finish(self) -> Self {
        self.section(
            Section::new("footer")
                .text(SPECIMEN_WATERMARK)
                .text("Synthetic test data. Any resemblance to a real organisation is coincidental."),
        )
    }

    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Value of the first field with `label` anywhere in the tree.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.sections.iter().flat_map(|s| s.nodes.iter()).find_map(|n| match n {
            Node::Field { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }
}

/// A titled group of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub nodes: Vec<Node>,
}

impl Section {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: None,
            nodes: Vec::new(),
        }
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Text { text: text.into() });
        self
    }

    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.nodes.push(Node::Field {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn list<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.push(Node::List {
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn table(mut self, table: Table) -> Self {
        self.nodes.push(Node::Table { table });
        self
    }

    pub fn image(mut self, role: impl Into<String>, source: impl Into<String>) -> Self {
        self.nodes.push(Node::Image {
            role: role.into(),
            source: source.into(),
        });
        self
    }

    /// Adds an image only when a source was supplied.
    pub fn image_opt(self, role: &str, source: Option<&str>) -> Self {
        match source {
            Some(src) if !src.trim().is_empty() => self.image(role, src),
            _ => self,
        }
    }

    pub fn link(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.nodes.push(Node::Link {
            text: text.into(),
            href: href.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    Text { text: String },
    Field { label: String, value: String },
    List { items: Vec<String> },
    Table { table: Table },
    /// `source` is an opaque asset reference; never fetched here.
    Image { role: String, source: String },
    Link { text: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn footer<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footer = Some(cells.into_iter().map(Into::into).collect());
        self
    }
}

/// Palette and layout descriptor for styled documents (identity cards).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub variant: String,
    pub front_background: String,
    pub back_background: String,
    pub border_radius: String,
    pub shadow: String,
    pub header_background: String,
    pub accent_color: String,
    pub text_color: String,
    pub header_text_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_appends_specimen_footer() {
        let tree = DisplayTree::new(DocumentType::Payslip, "Payslip").finish();
        assert_eq!(tree.watermark, SPECIMEN_WATERMARK);
        let footer = tree.find_section("footer").expect("footer section");
        assert_eq!(
            footer.nodes[0],
            Node::Text {
                text: SPECIMEN_WATERMARK.to_string()
            }
        );
    }

    #[test]
    fn test_image_opt_skips_blank_sources() {
        let section = Section::new("header")
            .image_opt("logo", None)
            .image_opt("logo", Some("  "))
            .image_opt("logo", Some("asset://logo.png"));
        assert_eq!(section.nodes.len(), 1);
    }

    #[test]
    fn test_node_serialization_is_tagged() {
        let node = Node::Field {
            label: "Pay date".to_string(),
            value: "2026-10-15".to_string(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "field");
        assert_eq!(json["label"], "Pay date");
    }
}
