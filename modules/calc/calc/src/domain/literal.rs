//! Numeric literal recognition.
//!
//! Grammar after trimming ASCII whitespace:
//!
//! ```text
//! literal  := sign? mantissa exponent?
//! sign     := "+" | "-"
//! mantissa := digits ("." digits?)? | "." digits
//! exponent := ("e" | "E") sign? digits
//! ```
//!
//! Anything else is a constant name, kept exactly as given. Spellings such
//! as `inf`, `NaN` or `0x10` are names, not numbers.

use super::error::DomainError;

/// Outcome of classifying a text operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified<'a> {
    Number(f64),
    Name(&'a str),
}

/// Returns true when `text` matches the literal grammar.
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    matches_grammar(text.trim_ascii().as_bytes())
}

/// Classifies a text operand as a finite number or a constant name.
///
/// # Errors
///
/// Returns `Validation` when the text is empty after trimming, or when it is
/// a well-formed literal whose value does not fit a finite `f64`.
pub fn classify(raw: &str) -> Result<Classified<'_>, DomainError> {
    let text = raw.trim_ascii();
    if text.is_empty() {
        return Err(DomainError::validation("operand must not be empty"));
    }
    if !matches_grammar(text.as_bytes()) {
        return Ok(Classified::Name(raw));
    }
    let value: f64 = text
        .parse()
        .map_err(|_| DomainError::validation(format!("numeric literal '{raw}' is malformed")))?;
    if !value.is_finite() {
        return Err(DomainError::validation(format!(
            "numeric literal '{raw}' is out of range"
        )));
    }
    Ok(Classified::Number(value))
}

fn matches_grammar(bytes: &[u8]) -> bool {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
