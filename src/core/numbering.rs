use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::InvoiceError;

/// Randomly drawn invoice identifier.
///
/// Identifiers are decimal numbers in `[0, 10_000_000_000)`, drawn once per
/// form session. They are not checked against any registry, so two sessions
/// may draw the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct InvoiceId(u64);

impl InvoiceId {
    /// Exclusive upper bound of the identifier range.
    pub const UPPER_BOUND: u64 = 10_000_000_000;

    /// Wrap a raw value, rejecting anything outside the identifier range.
    pub fn new(raw: u64) -> Option<Self> {
        (raw < Self::UPPER_BOUND).then_some(Self(raw))
    }

    /// Draw a fresh identifier from the thread-local generator.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Draw a fresh identifier from the given generator.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..Self::UPPER_BOUND))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InvoiceId {
    type Err = InvoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s
            .trim()
            .parse()
            .map_err(|_| InvoiceError::InvalidIdentifier(format!("'{s}' is not a decimal number")))?;
        Self::new(raw).ok_or_else(|| {
            InvoiceError::InvalidIdentifier(format!(
                "{raw} is not below {}",
                Self::UPPER_BOUND
            ))
        })
    }
}

impl From<InvoiceId> for String {
    fn from(id: InvoiceId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for InvoiceId {
    type Error = InvoiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_ids_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let id = InvoiceId::generate_with(&mut rng);
            assert!(id.value() < InvoiceId::UPPER_BOUND);
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = InvoiceId::generate_with(&mut StdRng::seed_from_u64(42));
        let b = InvoiceId::generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn range_bounds() {
        assert!(InvoiceId::new(0).is_some());
        assert!(InvoiceId::new(9_999_999_999).is_some());
        assert!(InvoiceId::new(10_000_000_000).is_none());
    }

    #[test]
    fn parse_and_display() {
        let id: InvoiceId = "1234567890".parse().unwrap();
        assert_eq!(id.value(), 1_234_567_890);
        assert_eq!(id.to_string(), "1234567890");

        assert!("abc".parse::<InvoiceId>().is_err());
        assert!("-1".parse::<InvoiceId>().is_err());
        assert!("10000000000".parse::<InvoiceId>().is_err());
    }
}
