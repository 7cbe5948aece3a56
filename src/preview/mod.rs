//! Printable invoice preview.
//!
//! The preview only redisplays a stored [`InvoiceSnapshot`]; it does no
//! arithmetic of its own, so what was submitted is exactly what is shown.
//! A missing snapshot renders as an indefinite loading placeholder.
//!
//! # Example
//!
//! ```
//! use invoicegen::preview::*;
//!
//! let text = render(&PreviewState::from(None), RenderTarget::Screen, &PreviewOptions::default());
//! assert_eq!(text, "Loading invoice data...\n");
//! ```

mod render;

pub use render::{DEFAULT_DATE_FORMAT, InvoicePreview, LOADING_PLACEHOLDER, PRINT_CONTROL};

use chrono::NaiveDate;

use crate::core::InvoiceSnapshot;
use crate::core::money::RUPEE;

/// What the preview page has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// No snapshot has been stored yet.
    Loading,
    /// A submitted invoice.
    Ready(InvoiceSnapshot),
}

impl From<Option<InvoiceSnapshot>> for PreviewState {
    fn from(snapshot: Option<InvoiceSnapshot>) -> Self {
        match snapshot {
            Some(s) => Self::Ready(s),
            None => Self::Loading,
        }
    }
}

/// Where the rendered preview is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// On-screen view, including interactive controls.
    Screen,
    /// Printed/exported output; on-screen controls are left out.
    Print,
}

/// The "Sold By" party printed on every invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerDetails {
    pub name: String,
    pub address: String,
    pub gstin: String,
}

impl Default for SellerDetails {
    fn default() -> Self {
        Self {
            name: "CLOUDSTORE RETAIL PRIVATE LIMITED".into(),
            address: "Khasra No. 23//6/1, Village Bijwasan, New Delhi".into(),
            gstin: "07AAKCC0172C1Z3".into(),
        }
    }
}

/// Presentation settings for the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    pub seller: SellerDetails,
    pub currency_symbol: String,
    /// `chrono` format string for the invoice date. Falls back to
    /// [`DEFAULT_DATE_FORMAT`] when it needs more than a date.
    pub date_format: String,
    /// Date shown when the snapshot carries none.
    pub fallback_date: NaiveDate,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            seller: SellerDetails::default(),
            currency_symbol: RUPEE.into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
            fallback_date: chrono::Local::now().date_naive(),
        }
    }
}

/// Render `state` as printable text.
pub fn render(state: &PreviewState, target: RenderTarget, options: &PreviewOptions) -> String {
    match state {
        PreviewState::Loading => LOADING_PLACEHOLDER.to_string(),
        PreviewState::Ready(snapshot) => InvoicePreview::new(snapshot, target, options).to_string(),
    }
}
