//! Lenient parsing of numeric form input.
//!
//! Form fields are edited live, so half-typed input must never break the
//! totals display. Parsing takes the longest numeric prefix of the text
//! (`"12abc"` is 12, `"abc"` is 0) and anything unusable becomes zero.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a numeric prefix of `text`, returning zero when there is none.
pub fn parse_lenient(text: &str) -> Decimal {
    parse_prefix(text).unwrap_or(Decimal::ZERO)
}

/// Like [`parse_lenient`], but blank text yields `None`.
///
/// Used for fields where "not given" differs from zero, such as a line's
/// own tax rate which otherwise inherits the document rate.
pub fn parse_optional(text: &str) -> Option<Decimal> {
    if text.trim().is_empty() {
        None
    } else {
        Some(parse_lenient(text))
    }
}

fn parse_prefix(text: &str) -> Option<Decimal> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    let mut exponent: i64 = 0;
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        let exp_negative = match bytes.get(end) {
            Some(b'-') => {
                end += 1;
                true
            }
            Some(b'+') => {
                end += 1;
                false
            }
            _ => false,
        };
        let exp_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_start {
            exponent = s[exp_start..end].parse::<i64>().ok()?;
            if exp_negative {
                exponent = -exponent;
            }
        }
    }

    let value = place_digits(int_digits, frac_digits, exponent)?;
    Some(if negative { -value } else { value })
}

/// Largest number of integer digits a `Decimal` can hold.
const MAX_INT_DIGITS: i64 = 29;
/// Largest number of fractional digits a `Decimal` can hold.
const MAX_SCALE: usize = 28;

/// Build `int.frac × 10^exponent` by moving the decimal point in the digit
/// string, so only the final value has to fit in a `Decimal`.
///
/// Values too large to represent give `None`; digits below the smallest
/// representable fraction are dropped.
fn place_digits(int_digits: &str, frac_digits: &str, exponent: i64) -> Option<Decimal> {
    let joined = format!("{int_digits}{frac_digits}");
    let leading = joined.len() - joined.trim_start_matches('0').len();
    let digits = joined.trim_matches('0');
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }

    // Position of the decimal point relative to the first significant digit.
    let point = (int_digits.len() as i64)
        .saturating_add(exponent)
        .saturating_sub(leading as i64);

    let text = if point <= 0 {
        let zeros = point.unsigned_abs() as usize;
        if zeros >= MAX_SCALE {
            return Some(Decimal::ZERO);
        }
        let mut frac = "0".repeat(zeros);
        frac.push_str(digits);
        frac.truncate(MAX_SCALE);
        format!("0.{frac}")
    } else if point > MAX_INT_DIGITS {
        return None;
    } else if point as usize >= digits.len() {
        format!("{digits}{}", "0".repeat(point as usize - digits.len()))
    } else {
        let (int, frac) = digits.split_at(point as usize);
        let frac = &frac[..frac.len().min(MAX_SCALE.saturating_sub(int.len()))];
        if frac.is_empty() {
            int.to_string()
        } else {
            format!("{int}.{frac}")
        }
    };

    Decimal::from_str(&text).ok()
}
