//! Parsing complex numbers from their rendered form.
//!
//! Accepts what the renderer emits (`"3+4i"`, `"-1-i"`, `"i"`, `"-2.5i"`,
//! `"7"`, `"1e+21-3i"`, `"Infinity"`, `"NaN"`) with either `i` or `j` as the
//! imaginary unit and surrounding whitespace ignored.

use std::str::FromStr;

use thiserror::Error;

use crate::Complex;

/// Error returned when a string is not a complex number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseComplexError {
    #[error("cannot parse complex number from empty string")]
    Empty,
    #[error("invalid number {0:?} in complex literal")]
    InvalidNumber(String),
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complex(s)
            .inspect_err(|err| log::debug!("rejected complex literal {:?}: {}", s, err))
    }
}

fn parse_complex(s: &str) -> Result<Complex, ParseComplexError> {
    let text = s.trim();
    if text.is_empty() {
        return Err(ParseComplexError::Empty);
    }

    let Some(body) = text.strip_suffix(['i', 'j']) else {
        return Ok(Complex::new(parse_real(text)?, 0.0));
    };

    match split_terms(body) {
        Some(at) => {
            let (real, imag) = body.split_at(at);
            Ok(Complex::new(parse_real(real)?, parse_coefficient(imag)?))
        }
        None => Ok(Complex::new(0.0, parse_coefficient(body)?)),
    }
}

/// Byte offset where the imaginary term starts.
///
/// Normally the sign joining the two terms; a leading sign or one following
/// an exponent marker does not split. A NaN imaginary part is rendered with
/// no joining sign (`"3NaNi"`), so a trailing `NaN` after a real term splits
/// too.
fn split_terms(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let signed = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));
    signed.or_else(|| {
        let at = body.strip_suffix("NaN")?.len();
        (!matches!(&body[..at], "" | "+" | "-")).then_some(at)
    })
}

/// Coefficient of the imaginary unit; a bare sign means ±1.
fn parse_coefficient(text: &str) -> Result<f64, ParseComplexError> {
    match text {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_real(text),
    }
}

fn parse_real(text: &str) -> Result<f64, ParseComplexError> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    // Rejects forms the renderer never produces, such as "inf" or "--1".
    let numeric = unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    let value = match unsigned {
        "Infinity" => f64::INFINITY,
        "NaN" => f64::NAN,
        _ if !numeric => return Err(ParseComplexError::InvalidNumber(text.to_string())),
        _ => unsigned
            .parse::<f64>()
            .map_err(|_| ParseComplexError::InvalidNumber(text.to_string()))?,
    };
    Ok(if negative { -value } else { value })
}
