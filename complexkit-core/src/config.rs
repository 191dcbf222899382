//! Rendering configuration for complex numbers.
//!
//! Presets are static so callers can pass them around by reference and
//! look them up by ID.

/// Configuration for rendering complex numbers as text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormatConfig {
    /// Unique identifier used by [`get_format_config`]
    pub id: &'static str,
    /// Suffix marking the imaginary term
    pub imaginary_unit: char,
    /// Magnitudes at or above this render in exponent form.
    pub exponent_upper: f64,
    /// Non-zero magnitudes below this render in exponent form.
    pub exponent_lower: f64,
    /// Text for positive infinity (negative infinity gets a leading `-`)
    pub infinity: &'static str,
    pub nan: &'static str,
}

/// Canonical rendering: `3+4i`, `-1-i`, `1e+21`, `Infinity`.
/// This is the format used by `Display` and accepted by `FromStr`.
pub static CANONICAL_FORMAT: FormatConfig = FormatConfig {
    id: "canonical",
    imaginary_unit: 'i',
    exponent_upper: 1e21,
    exponent_lower: 1e-6,
    infinity: "Infinity",
    nan: "NaN",
};

/// Canonical rendering with the electrical-engineering unit `j`.
pub static ENGINEERING_FORMAT: FormatConfig = FormatConfig {
    id: "engineering",
    imaginary_unit: 'j',
    exponent_upper: 1e21,
    exponent_lower: 1e-6,
    infinity: "Infinity",
    nan: "NaN",
};

/// Look up a format configuration by ID.
pub fn get_format_config(id: &str) -> Option<&'static FormatConfig> {
    match id {
        "canonical" => Some(&CANONICAL_FORMAT),
        "engineering" => Some(&ENGINEERING_FORMAT),
        _ => None,
    }
}
