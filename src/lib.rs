//! # invoicegen
//!
//! GST invoice generation: line-item totals with an even SGST/CGST split,
//! a lenient form-draft model, a single-record snapshot store, and a
//! printable invoice preview.
//!
//! All monetary values use [`rust_decimal::Decimal`]. Figures stay
//! unrounded through the calculation and are rounded to two places only
//! when displayed.
//!
//! ## Quick Start
//!
//! ```rust
//! use invoicegen::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = [
//!     LineItem::new("Pens", dec!(1), dec!(50)).with_tax_rate(dec!(10)),
//!     LineItem::new("Paper", dec!(3), dec!(20)).with_tax_rate(dec!(5)),
//! ];
//! let totals = compute_totals(&items, dec!(10), None);
//!
//! assert_eq!(totals.sub_total, dec!(110));
//! assert_eq!(totals.tax_amount, dec!(8));
//! assert_eq!(totals.discount_amount, dec!(11.8));
//! assert_eq!(totals.taxable_amount, dec!(106.2));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, totals, parsing, drafts, validation, identifiers |
//! | `storage` | Snapshot store over memory or file backends |
//! | `preview` | Printable text rendering of a stored snapshot |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "storage")]
pub mod storage;

#[cfg(feature = "preview")]
pub mod preview;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
