//! Tolerant numeric parsing for raw property values.

use crate::model::PropertyValue;

/// Conventional field names carrying the payload of a wrapped value,
/// probed in this order.
pub(crate) const WRAPPER_FIELDS: [&str; 5] = ["value", "Value", "val", "Val", "NominalValue"];

/// Extract a floating-point magnitude from a value of unknown shape.
///
/// Finite numbers pass through unchanged. Text gets a single comma
/// replaced by a period, then the first signed decimal or scientific
/// token is parsed. Wrapped values recurse on the first conventional
/// payload field present. Everything else is `None`; this function never
/// panics, and `None` means "not determinable", not zero.
#[must_use]
pub fn parse_magnitude(value: &PropertyValue) -> Option<f64> {
    match value {
        PropertyValue::Number(n) if n.is_finite() => Some(*n),
        PropertyValue::Number(_) | PropertyValue::Null => None,
        PropertyValue::Text(s) => parse_text(s),
        PropertyValue::Wrapped(fields) => WRAPPER_FIELDS
            .iter()
            .find_map(|name| fields.get(*name))
            .and_then(parse_magnitude),
    }
}

fn parse_text(s: &str) -> Option<f64> {
    let normalized = s.replacen(',', ".", 1);
    let token = number_token(&normalized)?;
    token.parse::<f64>().ok()
}

/// First substring forming a signed decimal or scientific-notation
/// number. Hand-scanned; digit and sign bytes are ASCII so byte indices
/// are always char boundaries.
fn number_token(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();

    let first_digit = bytes.iter().position(u8::is_ascii_digit)?;
    let mut begin = first_digit;
    if begin > 0 && bytes[begin - 1] == b'.' {
        begin -= 1;
    }
    if begin > 0 && (bytes[begin - 1] == b'+' || bytes[begin - 1] == b'-') {
        begin -= 1;
    }

    let mut end = begin;
    if bytes[end] == b'+' || bytes[end] == b'-' {
        end += 1;
    }
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    // exponent only counts when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            end = exp;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }
    }

    Some(&s[begin..end])
}
