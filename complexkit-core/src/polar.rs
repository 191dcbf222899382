//! Polar view of a complex number.

use serde::{Deserialize, Serialize};

use crate::Complex;

/// Magnitude and angle (radians) of a complex number.
///
/// Values are stored in Cartesian form; `Polar` only carries the
/// conversion in either direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub magnitude: f64,
    pub angle: f64,
}

impl Polar {
    pub const fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    /// Convert to Cartesian form.
    pub fn to_complex(&self) -> Complex {
        Complex::from_polar(self.magnitude, self.angle)
    }
}

impl From<Polar> for Complex {
    fn from(polar: Polar) -> Self {
        polar.to_complex()
    }
}

impl From<Complex> for Polar {
    fn from(z: Complex) -> Self {
        z.to_polar()
    }
}
