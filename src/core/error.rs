use thiserror::Error;

/// Errors that can occur while submitting, storing or loading an invoice.
///
/// The totals calculator itself never fails; these only arise at the
/// submission gate and around persistence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more presentation validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The key-value backend could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// A stored snapshot could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An invoice identifier was out of range or not a decimal number.
    #[error("invalid invoice identifier: {0}")]
    InvalidIdentifier(String),
}

/// Which form rule a [`ValidationError`] broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    /// A required field was blank, or the invoice had no line items.
    Required,
    /// A quantity, price, rate or discount was below zero.
    NonNegative,
    /// The invoice exceeded [`MAX_LINES`](super::MAX_LINES) line items.
    Limit,
}

impl ValidationRule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::NonNegative => "non-negative",
            Self::Limit => "limit",
        }
    }
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form field that failed validation, shown as `[rule] field: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the field, e.g. `items.0.quantity`.
    pub field: String,
    pub rule: ValidationRule,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, rule: ValidationRule, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.field, self.message)
    }
}
