//! Core invoice types, totals calculation, form drafts and validation.
//!
//! Every surface that shows money goes through [`compute_totals`]; the
//! draft uses it for the live display and for submission, and the snapshot
//! it produces is what the preview renders.

mod draft;
mod error;
pub mod money;
mod numbering;
pub mod parse;
mod snapshot;
mod totals;
mod types;
mod validation;

pub use draft::*;
pub use error::*;
pub use numbering::*;
pub use parse::{parse_lenient, parse_optional};
pub use snapshot::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
