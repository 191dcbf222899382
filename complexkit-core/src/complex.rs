//! Complex number stored in Cartesian form.
//!
//! Polar inputs are converted to `(real, imag)` at construction time, so a
//! value is fully determined by its two components. Arithmetic follows
//! IEEE-754: dividing by zero yields NaN/infinite components instead of an
//! error.

use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::Polar;

/// Complex number `real + imag·i` with f64 components.
///
/// Equality is exact component-wise comparison (no tolerance).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    /// The imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const TWO: Self = Self::new(2.0, 0.0);

    /// Create from Cartesian components.
    #[inline]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Create from magnitude and angle (radians).
    ///
    /// A negative magnitude flips the direction; the angle is not normalized.
    #[inline]
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self::new(magnitude * libm::cos(angle), magnitude * libm::sin(angle))
    }

    /// Magnitude `sqrt(real² + imag²)`.
    #[inline]
    pub fn abs(&self) -> f64 {
        libm::sqrt(self.norm_sq())
    }

    /// Angle `atan2(imag, real)` in `(-π, π]`. `arg(0)` is `0`.
    #[inline]
    pub fn arg(&self) -> f64 {
        libm::atan2(self.imag, self.real)
    }

    /// Squared magnitude: |z|² = real² + imag²
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Magnitude and angle as a [`Polar`] view.
    pub fn to_polar(&self) -> Polar {
        Polar::new(self.abs(), self.arg())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imag == 0.0
    }

    /// True when the imaginary part is zero (zero itself included).
    #[inline]
    pub fn is_real(&self) -> bool {
        self.imag == 0.0
    }

    /// True when the real part is zero (zero itself included).
    #[inline]
    pub fn is_imaginary(&self) -> bool {
        self.real == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imag.is_nan()
    }

    /// Add: (a + bi) + (c + di) = (a + c) + (b + d)i
    #[inline]
    pub fn add(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::new(self.real + other.real, self.imag + other.imag)
    }

    /// Subtract other from self.
    #[inline]
    pub fn sub(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::new(self.real - other.real, self.imag - other.imag)
    }

    /// Multiply: (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    #[inline]
    pub fn mul(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::new(
            self.real * other.real - self.imag * other.imag,
            self.real * other.imag + self.imag * other.real,
        )
    }

    /// Divide: (a + bi)/(c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)
    ///
    /// A zero divisor is not guarded; the components become NaN or infinite.
    #[inline]
    pub fn div(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        let denominator = other.norm_sq();
        Self::new(
            (self.real * other.real + self.imag * other.imag) / denominator,
            (self.imag * other.real - self.real * other.imag) / denominator,
        )
    }

    /// Multiply by multiplying magnitudes and adding angles.
    ///
    /// Agrees with [`Complex::mul`] up to rounding.
    pub fn mul_polar(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::from_polar(self.abs() * other.abs(), self.arg() + other.arg())
    }

    /// Divide by dividing magnitudes and subtracting angles.
    ///
    /// Agrees with [`Complex::div`] up to rounding.
    pub fn div_polar(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::from_polar(self.abs() / other.abs(), self.arg() - other.arg())
    }

    #[inline]
    pub fn neg(self) -> Self {
        Self::new(-self.real, -self.imag)
    }

    /// Complex conjugate: a + bi -> a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.real, -self.imag)
    }

    /// Exact component-wise equality. A real scalar compares as `(x, 0)`.
    #[inline]
    pub fn equals(&self, other: impl Into<Self>) -> bool {
        *self == other.into()
    }

    /// Left fold of [`Complex::add`] over `others`.
    pub fn add_all<T: Into<Self>>(self, others: impl IntoIterator<Item = T>) -> Self {
        others.into_iter().fold(self, |acc, z| acc.add(z))
    }

    /// Left fold of [`Complex::sub`]: `self - z1 - z2 - ...`
    pub fn sub_all<T: Into<Self>>(self, others: impl IntoIterator<Item = T>) -> Self {
        others.into_iter().fold(self, |acc, z| acc.sub(z))
    }

    /// Left fold of [`Complex::mul`] over `others`.
    pub fn mul_all<T: Into<Self>>(self, others: impl IntoIterator<Item = T>) -> Self {
        others.into_iter().fold(self, |acc, z| acc.mul(z))
    }

    /// Left fold of [`Complex::div`]: `self / z1 / z2 / ...`
    pub fn div_all<T: Into<Self>>(self, others: impl IntoIterator<Item = T>) -> Self {
        others.into_iter().fold(self, |acc, z| acc.div(z))
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imag): (f64, f64)) -> Self {
        Self::new(real, imag)
    }
}

impl From<Complex> for (f64, f64) {
    fn from(z: Complex) -> Self {
        (z.real, z.imag)
    }
}

impl PartialEq<f64> for Complex {
    fn eq(&self, other: &f64) -> bool {
        self.real == *other && self.imag == 0.0
    }
}

impl PartialEq<Complex> for f64 {
    fn eq(&self, other: &Complex) -> bool {
        other == self
    }
}

// Operators forward to the named methods so both spellings share one formula.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl $trait for Complex {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                Complex::$method(self, rhs)
            }
        }

        impl $trait<f64> for Complex {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: f64) -> Complex {
                Complex::$method(self, rhs)
            }
        }

        impl $trait<Complex> for f64 {
            type Output = Complex;
            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                Complex::$method(Complex::from(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex::neg(self)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Complex::ZERO.add_all(iter)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Complex::ONE.mul_all(iter)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.copied().product()
    }
}
