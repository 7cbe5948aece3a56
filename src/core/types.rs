use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::parse::{parse_lenient, parse_optional};

/// One row of the invoice, with numeric fields already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text label.
    pub description: String,
    /// Invoiced quantity.
    pub quantity: Decimal,
    /// Net price per unit.
    pub unit_price: Decimal,
    /// Tax rate percentage for this line. `None` inherits the document rate.
    pub tax_rate: Option<Decimal>,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            tax_rate: None,
        }
    }

    pub fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = Some(rate);
        self
    }

    /// Build a line from raw form text. Unparsable numbers become zero and a
    /// blank tax rate inherits the document rate.
    pub fn from_text(description: &str, quantity: &str, unit_price: &str, tax_rate: &str) -> Self {
        Self {
            description: description.to_string(),
            quantity: parse_lenient(quantity),
            unit_price: parse_lenient(unit_price),
            tax_rate: parse_optional(tax_rate),
        }
    }
}

/// Per-row figures shown next to each line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBreakdown {
    /// quantity × unit price.
    pub base: Decimal,
    /// Effective rate after document-level fallback.
    pub tax_rate: Decimal,
    /// Tax on `base`.
    pub tax: Decimal,
    /// State half of `tax`.
    pub sgst: Decimal,
    /// Central half of `tax`.
    pub cgst: Decimal,
    /// base + tax.
    pub amount: Decimal,
}

/// Invoice-level totals, always derived from the current line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of all line bases.
    pub sub_total: Decimal,
    /// Sum of all line taxes.
    pub tax_amount: Decimal,
    /// State tax component, half of `tax_amount`.
    pub sgst: Decimal,
    /// Central tax component, half of `tax_amount`.
    pub cgst: Decimal,
    /// Discount percentage the figures were computed with.
    pub discount_percent: Decimal,
    /// Discount taken from the tax-inclusive amount.
    pub discount_amount: Decimal,
    /// sub_total + tax_amount - discount_amount.
    pub taxable_amount: Decimal,
    /// Row breakdown in input order.
    pub lines: Vec<LineBreakdown>,
}

impl InvoiceTotals {
    /// Amount payable. Same figure as `taxable_amount`.
    pub fn total_due(&self) -> Decimal {
        self.taxable_amount
    }
}
