use rust_decimal::Decimal;

use super::draft::InvoiceDraft;
use super::error::{ValidationError, ValidationRule};
use super::parse::parse_lenient;

/// Upper bound on line items per invoice.
pub const MAX_LINES: usize = 10_000;

/// Validate a draft the way the form does before submission.
/// Returns all validation errors found (not just the first).
///
/// Numbers are checked for presence and sign only: non-numeric text is
/// accepted and counts as zero, matching the live totals display.
pub fn validate_draft(draft: &InvoiceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require(&draft.client_name, "client_name", "client name is required", &mut errors);
    require(
        &draft.client_address,
        "client_address",
        "client address is required",
        &mut errors,
    );
    require(&draft.gst_number, "gst_number", "GST number is required", &mut errors);

    non_negative(&draft.document_tax_rate, "document_tax_rate", "tax rate", &mut errors);
    non_negative(&draft.discount, "discount", "discount", &mut errors);

    if draft.lines.is_empty() {
        errors.push(ValidationError::new(
            "items",
            ValidationRule::Required,
            "at least one item is required",
        ));
    }
    if draft.lines.len() > MAX_LINES {
        errors.push(ValidationError::new(
            "items",
            ValidationRule::Limit,
            format!("invoice cannot have more than {MAX_LINES} line items"),
        ));
    }

    for (i, line) in draft.lines.iter().enumerate() {
        let path = |name: &str| format!("items.{i}.{name}");

        require(&line.description, &path("description"), "description is required", &mut errors);
        require(&line.quantity, &path("quantity"), "quantity is required", &mut errors);
        require(&line.unit_price, &path("unit_price"), "price is required", &mut errors);

        non_negative(&line.quantity, &path("quantity"), "quantity", &mut errors);
        non_negative(&line.unit_price, &path("unit_price"), "price", &mut errors);
        non_negative(&line.tax_rate, &path("tax_rate"), "tax rate", &mut errors);
    }

    errors
}

fn require(value: &str, field: &str, message: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, ValidationRule::Required, message));
    }
}

fn non_negative(value: &str, field: &str, label: &str, errors: &mut Vec<ValidationError>) {
    if parse_lenient(value) < Decimal::ZERO {
        errors.push(ValidationError::new(
            field,
            ValidationRule::NonNegative,
            format!("{label} must not be negative"),
        ));
    }
}
