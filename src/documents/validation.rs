//! Bundle validation for document templates.
//!
//! Collects every problem in a bundle before failing, so a caller sees the
//! full list of missing fields in one response.

use std::fmt;

use super::DocumentError;

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `employee.name`.
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} is required", label))
            .with_suggestion(format!("Provide a value for {}", label.to_lowercase()))
    }

    pub fn not_positive(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} must be greater than zero", label))
    }

    pub fn not_finite(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} must be a finite number", label))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// Numbered, one-problem-per-line summary.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!("{} problem(s) found", self.errors.len())];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }
        parts.join("\n")
    }

    pub fn into_result(self) -> Result<(), DocumentError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DocumentError::InvalidBundle(self.to_message()))
        }
    }
}

/// Require a non-blank string.
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Require a finite amount greater than zero.
pub fn validate_positive(value: f64, field: &str, label: &str, errors: &mut ValidationErrors) {
    if !value.is_finite() {
        errors.add(ValidationError::not_finite(field, label));
    } else if value <= 0.0 {
        errors.add(ValidationError::not_positive(field, label));
    }
}

/// Require every line item amount to be a finite number.
pub fn validate_amounts(
    amounts: impl IntoIterator<Item = f64>,
    field: &str,
    errors: &mut ValidationErrors,
) {
    for (i, amount) in amounts.into_iter().enumerate() {
        if !amount.is_finite() {
            errors.add(ValidationError::not_finite(
                &format!("{}[{}].amount", field, i),
                "Amount",
            ));
        }
    }
}
