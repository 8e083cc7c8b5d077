//! Lenient integer parsing for attribute and control strings.

use autolot_core::{DomainError, DomainResult};

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and a single sign are accepted, and anything after the
/// first run of digits is ignored (`"20000 USD"` parses as `20000`). A string
/// with no leading digits is `MalformedInput` for `field`.
pub fn parse_int(field: &'static str, raw: &str) -> DomainResult<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(DomainError::malformed(field, raw));
    }

    let magnitude: i64 = digits[..end]
        .parse()
        .map_err(|_| DomainError::malformed(field, raw))?;
    Ok(if negative { -magnitude } else { magnitude })
}
