use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::{InvoiceError, ValidationError};
use super::numbering::InvoiceId;
use super::parse::{parse_lenient, parse_optional};
use super::snapshot::{Client, InvoiceSnapshot};
use super::totals::compute_totals;
use super::types::{InvoiceTotals, LineItem};
use super::validation;

/// Session-wide defaults for a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSettings {
    /// Rate applied when neither the line nor the document gives one.
    pub fallback_tax_rate: Option<Decimal>,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            fallback_tax_rate: Some(dec!(7)),
        }
    }
}

/// One editable row of the form, holding the text exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftLine {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    /// Blank inherits the document rate.
    pub tax_rate: String,
}

impl DraftLine {
    pub fn new(
        description: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
            tax_rate: String::new(),
        }
    }

    pub fn tax_rate(mut self, rate: impl Into<String>) -> Self {
        self.tax_rate = rate.into();
        self
    }

    /// Parse this row leniently into a [`LineItem`].
    pub fn to_line_item(&self) -> LineItem {
        LineItem::from_text(
            &self.description,
            &self.quantity,
            &self.unit_price,
            &self.tax_rate,
        )
    }
}

/// An invoice being edited.
///
/// Owns the mutable form state for one session. Totals are recomputed from
/// the current text on every call to [`InvoiceDraft::totals`], and
/// [`InvoiceDraft::submit`] freezes the state into an [`InvoiceSnapshot`].
///
/// ```
/// use invoicegen::core::*;
/// use rust_decimal_macros::dec;
///
/// let mut draft = InvoiceDraft::new();
/// draft
///     .client_name("Acme Traders")
///     .client_address("12 MG Road, Pune")
///     .gst_number("27ABCDE1234F1Z5");
/// *draft.line_mut(0).unwrap() = DraftLine::new("Widget", "2", "100").tax_rate("18");
///
/// assert_eq!(draft.totals().taxable_amount, dec!(236));
/// let snapshot = draft.submit().unwrap();
/// assert_eq!(snapshot.total_due, dec!(236));
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    invoice_id: InvoiceId,
    settings: DraftSettings,
    pub(crate) client_name: String,
    pub(crate) client_address: String,
    pub(crate) gst_number: String,
    invoice_date: Option<NaiveDate>,
    pub(crate) document_tax_rate: String,
    pub(crate) discount: String,
    pub(crate) lines: Vec<DraftLine>,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceDraft {
    /// Start a session with a freshly drawn identifier and one blank line.
    pub fn new() -> Self {
        Self::with_id(InvoiceId::generate())
    }

    /// Start a session with a known identifier.
    pub fn with_id(invoice_id: InvoiceId) -> Self {
        Self {
            invoice_id,
            settings: DraftSettings::default(),
            client_name: String::new(),
            client_address: String::new(),
            gst_number: String::new(),
            invoice_date: None,
            document_tax_rate: String::new(),
            discount: String::new(),
            lines: vec![DraftLine::default()],
        }
    }

    pub fn with_settings(mut self, settings: DraftSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn client_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.client_name = name.into();
        self
    }

    pub fn client_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.client_address = address.into();
        self
    }

    pub fn gst_number(&mut self, gstin: impl Into<String>) -> &mut Self {
        self.gst_number = gstin.into();
        self
    }

    pub fn invoice_date(&mut self, date: NaiveDate) -> &mut Self {
        self.invoice_date = Some(date);
        self
    }

    pub fn document_tax_rate(&mut self, rate: impl Into<String>) -> &mut Self {
        self.document_tax_rate = rate.into();
        self
    }

    pub fn discount(&mut self, percent: impl Into<String>) -> &mut Self {
        self.discount = percent.into();
        self
    }

    /// Append a blank row.
    pub fn add_line(&mut self) -> &mut Self {
        self.lines.push(DraftLine::default());
        self
    }

    pub fn add_line_with(&mut self, line: DraftLine) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn remove_line(&mut self, index: usize) -> Option<DraftLine> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut DraftLine> {
        self.lines.get_mut(index)
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn client(&self) -> Client {
        Client {
            name: self.client_name.clone(),
            address: self.client_address.clone(),
            gst_number: self.gst_number.clone(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.invoice_date
    }

    /// Discount percentage; blank or unparsable text is zero.
    pub fn discount_percent(&self) -> Decimal {
        parse_lenient(&self.discount)
    }

    /// Document-level rate, or the session fallback when the field is blank.
    pub fn effective_document_tax_rate(&self) -> Option<Decimal> {
        parse_optional(&self.document_tax_rate).or(self.settings.fallback_tax_rate)
    }

    /// All rows, leniently parsed.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.lines.iter().map(DraftLine::to_line_item).collect()
    }

    /// Live totals for the current form contents.
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(
            &self.line_items(),
            self.discount_percent(),
            self.effective_document_tax_rate(),
        )
    }

    /// Presentation validation errors for the current contents.
    pub fn validate(&self) -> Vec<ValidationError> {
        validation::validate_draft(self)
    }

    /// Validate and freeze the draft.
    /// Returns all validation errors (not just the first) on failure.
    pub fn submit(&self) -> Result<InvoiceSnapshot, InvoiceError> {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::warn!(
                invoice_id = %self.invoice_id,
                errors = errors.len(),
                "invoice submission rejected"
            );
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(InvoiceError::Validation(msg));
        }

        let items = self.line_items();
        let document_tax_rate = self.effective_document_tax_rate();
        let totals = compute_totals(&items, self.discount_percent(), document_tax_rate);

        tracing::info!(
            invoice_id = %self.invoice_id,
            lines = items.len(),
            total_due = %totals.total_due(),
            "invoice submitted"
        );

        Ok(InvoiceSnapshot::new(
            self.invoice_id,
            self.invoice_date,
            self.client(),
            &items,
            &totals,
            document_tax_rate,
        ))
    }
}
