//! Elementary functions of a complex variable.
//!
//! All multi-valued functions return the principal branch. Poles and
//! singularities (`log(0)`, `tan` on the real-axis poles) propagate
//! NaN/infinite components rather than failing.
//!
//! The inverse trigonometric functions are composed from [`Complex`]
//! arithmetic and constants so they round the same way as the operators.

use crate::Complex;

/// Magnitude of `z`.
#[inline]
pub fn abs(z: Complex) -> f64 {
    z.abs()
}

/// Angle of `z` in `(-π, π]`.
#[inline]
pub fn arg(z: Complex) -> f64 {
    z.arg()
}

/// Principal square root: halve the angle, take the root of the magnitude.
pub fn sqrt(z: Complex) -> Complex {
    Complex::from_polar(libm::sqrt(z.abs()), z.arg() / 2.0)
}

/// e^(a + bi) = e^a (cos b + i sin b)
pub fn exp(z: Complex) -> Complex {
    Complex::from_polar(libm::exp(z.real), z.imag)
}

/// Principal natural logarithm: ln|z| + i arg(z).
pub fn log(z: Complex) -> Complex {
    Complex::new(libm::log(z.abs()), z.arg())
}

/// z^w = exp(w log z)
pub fn pow(z: Complex, w: impl Into<Complex>) -> Complex {
    exp(w.into().mul(log(z)))
}

/// sin(a + bi) = sin a cosh b + i cos a sinh b
pub fn sin(z: Complex) -> Complex {
    Complex::new(
        libm::sin(z.real) * libm::cosh(z.imag),
        libm::cos(z.real) * libm::sinh(z.imag),
    )
}

/// cos(a + bi) = cos a cosh b - i sin a sinh b
pub fn cos(z: Complex) -> Complex {
    Complex::new(
        libm::cos(z.real) * libm::cosh(z.imag),
        -libm::sin(z.real) * libm::sinh(z.imag),
    )
}

/// tan(a + bi) = (sin 2a + i sinh 2b) / (cos 2a + cosh 2b)
pub fn tan(z: Complex) -> Complex {
    let two_real = 2.0 * z.real;
    let two_imag = 2.0 * z.imag;
    let denominator = libm::cos(two_real) + libm::cosh(two_imag);
    Complex::new(
        libm::sin(two_real) / denominator,
        libm::sinh(two_imag) / denominator,
    )
}

/// asin z = -i log(sqrt(1 - z²) + iz)
pub fn asin(z: Complex) -> Complex {
    let root = sqrt(Complex::ONE.sub(z.mul(z)));
    Complex::I.neg().mul(log(root.add(Complex::I.mul(z))))
}

/// acos z = -i log(i sqrt(1 - z²) + z)
pub fn acos(z: Complex) -> Complex {
    let root = sqrt(Complex::ONE.sub(z.mul(z)));
    Complex::I.neg().mul(log(Complex::I.mul(root).add(z)))
}

/// atan z = (-i/2) log((i - z)/(i + z))
pub fn atan(z: Complex) -> Complex {
    let ratio = Complex::I.sub(z).div(Complex::I.add(z));
    Complex::I.neg().div(Complex::TWO).mul(log(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    fn assert_close(actual: Complex, real: f64, imag: f64) {
        assert!(
            (actual.real - real).abs() < EPS && (actual.imag - imag).abs() < EPS,
            "expected ({}, {}), got {:?}",
            real,
            imag,
            actual
        );
    }

    #[test]
    fn sqrt_of_negative_one_is_i() {
        assert_close(sqrt(Complex::new(-1.0, 0.0)), 0.0, 1.0);
    }

    #[test]
    fn sqrt_of_i() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(sqrt(Complex::I), h, h);
    }

    #[test]
    fn exp_of_i_is_on_unit_circle() {
        assert_close(exp(Complex::I), 1f64.cos(), 1f64.sin());
    }

    #[test]
    fn log_of_i() {
        assert_close(log(Complex::I), 0.0, FRAC_PI_2);
    }

    #[test]
    fn log_of_zero_has_negative_infinite_real_part() {
        let l = log(Complex::ZERO);
        assert_eq!(l.real, f64::NEG_INFINITY);
        assert_eq!(l.imag, 0.0);
    }

    #[test]
    fn i_to_the_i_is_real() {
        assert_close(pow(Complex::I, Complex::I), (-FRAC_PI_2).exp(), 0.0);
    }

    #[test]
    fn pow_accepts_real_exponent() {
        assert_close(pow(Complex::new(0.0, 2.0), 2.0), -4.0, 0.0);
    }

    #[test]
    fn sin_and_cos_of_i() {
        assert_close(sin(Complex::I), 0.0, 1f64.sinh());
        assert_close(cos(Complex::I), 1f64.cosh(), 0.0);
    }

    #[test]
    fn tan_of_i() {
        assert_close(tan(Complex::I), 0.0, 1f64.tanh());
    }

    #[test]
    fn tan_matches_real_tangent_on_real_axis() {
        assert_close(tan(Complex::new(0.5, 0.0)), 0.5f64.tan(), 0.0);
    }

    #[test]
    fn inverse_trig_of_i() {
        assert_close(asin(Complex::I), 0.0, 1f64.asinh());
        assert_close(acos(Complex::I), FRAC_PI_2, -1f64.asinh());
        assert_close(atan(Complex::I.div(Complex::TWO)), 0.0, 0.5f64.atanh());
    }

    #[test]
    fn inverse_trig_of_real_values() {
        assert_close(asin(Complex::new(0.5, 0.0)), 0.5f64.asin(), 0.0);
        assert_close(acos(Complex::new(0.5, 0.0)), 0.5f64.acos(), 0.0);
        assert_close(atan(Complex::ONE), PI / 4.0, 0.0);
    }
}
