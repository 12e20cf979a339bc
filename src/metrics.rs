//! Render counters, exported in Prometheus text format.

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    static ref DOCUMENTS_RENDERED: IntCounterVec = register_int_counter_vec!(
        "specimen_documents_rendered_total",
        "Render requests by document type and outcome",
        &["document_type", "outcome"]
    )
    .expect("render counter registers once");
}

/// `document_type` must be a known tag; unknown tags are recorded as
/// `unsupported` to keep label cardinality bounded.
pub fn record_render(document_type: &str, outcome: &str) {
    DOCUMENTS_RENDERED
        .with_label_values(&[document_type, outcome])
        .inc();
}

pub fn rendered_count(document_type: &str, outcome: &str) -> u64 {
    DOCUMENTS_RENDERED
        .with_label_values(&[document_type, outcome])
        .get()
}

/// Everything in the default registry, in text exposition format.
pub fn export() -> Result<String, prometheus::Error> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_render_increments() {
        let before = rendered_count("w2", "ok");
        record_render("w2", "ok");
        assert_eq!(rendered_count("w2", "ok"), before + 1);
    }

    #[test]
    fn test_export_contains_counter() {
        record_render("payslip", "ok");
        let text = export().unwrap();
        assert!(text.contains("specimen_documents_rendered_total"));
    }
}
