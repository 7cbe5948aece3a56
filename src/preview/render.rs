use std::fmt::{self, Write as _};

use chrono::NaiveDate;

use super::{PreviewOptions, RenderTarget};
use crate::core::InvoiceSnapshot;
use crate::core::money::{format_currency, format_percent, format_quantity};

/// Shown while no snapshot is available.
pub const LOADING_PLACEHOLDER: &str = "Loading invoice data...\n";

/// On-screen print control, omitted from printed output.
pub const PRINT_CONTROL: &str = "[ Print Invoice ]";

/// Used when the configured date format cannot be applied to a date.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

const TABLE_HEADER: &str =
    "# | Description | Qty | Price | GST | Taxable Amt | SGST | CGST | Amount";

/// A snapshot laid out as a printable "TAX INVOICE" document.
pub struct InvoicePreview<'a> {
    snapshot: &'a InvoiceSnapshot,
    target: RenderTarget,
    options: &'a PreviewOptions,
}

impl<'a> InvoicePreview<'a> {
    pub fn new(
        snapshot: &'a InvoiceSnapshot,
        target: RenderTarget,
        options: &'a PreviewOptions,
    ) -> Self {
        Self {
            snapshot,
            target,
            options,
        }
    }

    /// Format `date` with the configured pattern. Patterns a plain date
    /// cannot satisfy (times, offsets, unknown specifiers) fall back to
    /// [`DEFAULT_DATE_FORMAT`].
    fn date_text(&self, date: NaiveDate) -> String {
        let mut text = String::new();
        if write!(text, "{}", date.format(&self.options.date_format)).is_err() {
            tracing::warn!(
                format = %self.options.date_format,
                "unusable preview date format, using default"
            );
            return date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        text
    }

    fn money(&self, value: rust_decimal::Decimal) -> String {
        format_currency(value, &self.options.currency_symbol)
    }
}

impl fmt::Display for InvoicePreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;
        let seller = &self.options.seller;
        let date = s.invoice_date.unwrap_or(self.options.fallback_date);

        writeln!(f, "TAX INVOICE")?;
        writeln!(f, "Invoice Number: #{}", s.invoice_id)?;
        writeln!(f, "Invoice Date: {}", self.date_text(date))?;
        writeln!(f)?;

        writeln!(f, "Bill To:")?;
        writeln!(f, "{}", s.client_name)?;
        writeln!(f, "{}", s.client_address)?;
        writeln!(f, "GST IN: {}", s.gst_number)?;
        writeln!(f)?;

        writeln!(f, "Sold By:")?;
        writeln!(f, "{}", seller.name)?;
        writeln!(f, "{}", seller.address)?;
        writeln!(f, "GSTIN: {}", seller.gstin)?;
        writeln!(f)?;

        writeln!(f, "{TABLE_HEADER}")?;
        for (i, line) in s.items.iter().enumerate() {
            writeln!(
                f,
                "{} | {} | {} | {} | {} | {} | {} | {} | {}",
                i + 1,
                line.description,
                format_quantity(line.quantity),
                self.money(line.unit_price),
                format_percent(line.tax_rate),
                self.money(line.base),
                self.money(line.sgst),
                self.money(line.cgst),
                self.money(line.amount),
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Subtotal: {}", self.money(s.sub_total))?;
        writeln!(f, "GST: {}", self.money(s.tax_amount))?;
        writeln!(f, "SGST: {}", self.money(s.sgst))?;
        writeln!(f, "CGST: {}", self.money(s.cgst))?;
        writeln!(
            f,
            "Discount ({}): - {}",
            format_percent(s.discount),
            self.money(s.discount_amount)
        )?;
        writeln!(f, "Grand Total: {}", self.money(s.total_due))?;
        writeln!(f)?;

        if self.target == RenderTarget::Screen {
            writeln!(f, "{PRINT_CONTROL}")?;
            writeln!(f)?;
        }

        writeln!(f, "Authorized Signatory")
    }
}
