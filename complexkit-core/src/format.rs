//! Text rendering of complex numbers.
//!
//! Rules, for components `(a, b)`:
//! - `b == 0`: the real part alone (`"3"`, `"0"`).
//! - otherwise the imaginary term is `"i"` for `b == 1`, `"-i"` for
//!   `b == -1`, else `"{b}i"`.
//! - `a == 0`: the imaginary term alone.
//! - otherwise `a`, then `+` only when `b > 0`, then the imaginary term
//!   (`"3+4i"`, `"-1-i"`).
//!
//! Components use the shortest decimal that round-trips, switching to
//! exponent form (`"1e+21"`, `"1.5e-7"`) outside the configured range.

use std::fmt::{self, Alignment, Write};

use crate::{Complex, FormatConfig, CANONICAL_FORMAT};

impl Complex {
    /// Render using the given configuration.
    pub fn format_with(&self, config: &FormatConfig) -> String {
        render(self, config, None)
    }
}

/// Renders with [`CANONICAL_FORMAT`]. A precision (`{:.3}`) fixes the number
/// of fractional digits in each component; width, fill and alignment apply
/// to the whole rendering (left-aligned by default).
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = render(self, &CANONICAL_FORMAT, f.precision());
        // `Formatter::pad` would also truncate to the precision.
        let padding = f.width().unwrap_or(0).saturating_sub(text.chars().count());
        let (before, after) = match f.align() {
            Some(Alignment::Right) => (padding, 0),
            Some(Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(Alignment::Left) | None => (0, padding),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

fn render(z: &Complex, config: &FormatConfig, precision: Option<usize>) -> String {
    // Real.
    if z.imag == 0.0 {
        return format_component(z.real, config, precision);
    }

    let unit = config.imaginary_unit;
    let imaginary = if z.imag == 1.0 {
        unit.to_string()
    } else if z.imag == -1.0 {
        format!("-{}", unit)
    } else {
        format!("{}{}", format_component(z.imag, config, precision), unit)
    };

    // Purely imaginary.
    if z.real == 0.0 {
        return imaginary;
    }

    // Negative imaginary terms already carry their sign.
    let sign = if z.imag > 0.0 { "+" } else { "" };
    format!(
        "{}{}{}",
        format_component(z.real, config, precision),
        sign,
        imaginary
    )
}

/// Render one real component.
fn format_component(value: f64, config: &FormatConfig, precision: Option<usize>) -> String {
    if value.is_nan() {
        return config.nan.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            config.infinity.to_string()
        } else {
            format!("-{}", config.infinity)
        };
    }
    // Folds -0 into 0
    let value = if value == 0.0 { 0.0 } else { value };

    if let Some(digits) = precision {
        return format!("{:.*}", digits, value);
    }

    let magnitude = value.abs();
    let outside = magnitude >= config.exponent_upper || magnitude < config.exponent_lower;
    if value != 0.0 && outside {
        format_exponent(value)
    } else {
        format!("{}", value)
    }
}

/// Shortest exponent form with an explicit exponent sign.
fn format_exponent(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(value: f64) -> String {
        format_component(value, &CANONICAL_FORMAT, None)
    }

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(canonical(3.0), "3");
        assert_eq!(canonical(-10.0), "-10");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(canonical(-0.0), "0");
    }

    #[test]
    fn shortest_round_trip_digits() {
        assert_eq!(canonical(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(canonical(0.000001), "0.000001");
        assert_eq!(canonical(1e20), "100000000000000000000");
    }

    #[test]
    fn exponent_form_outside_range() {
        assert_eq!(canonical(1e21), "1e+21");
        assert_eq!(canonical(-2.5e30), "-2.5e+30");
        assert_eq!(canonical(1.5e-7), "1.5e-7");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(canonical(f64::INFINITY), "Infinity");
        assert_eq!(canonical(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(canonical(f64::NAN), "NaN");
    }

    #[test]
    fn display_precision_keeps_every_digit() {
        assert_eq!(format!("{:.1}", Complex::new(12345.0, 0.0)), "12345.0");
        assert_eq!(format!("{:.2}", Complex::new(3.0, 4.0)), "3.00+4.00i");
    }

    #[test]
    fn display_precision_with_padding() {
        assert_eq!(format!("{:*^12.1}", Complex::new(-1.5, 2.0)), "*-1.5+2.0i**");
        assert_eq!(format!("{:>8.2}", Complex::new(0.0, 0.5)), "   0.50i");
    }

    #[test]
    fn fixed_precision() {
        assert_eq!(format_component(0.5, &CANONICAL_FORMAT, Some(3)), "0.500");
        assert_eq!(format_component(-0.0, &CANONICAL_FORMAT, Some(1)), "0.0");
    }
}
