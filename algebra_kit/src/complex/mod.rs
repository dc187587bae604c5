//! Complex numbers of the form `real + imaginary * i^exp`.
//!
//! A [`ComplexValue`] is an immutable value. Every constructor and every
//! arithmetic result passes through [`canonicalize`], so a value observed by
//! a caller always has `exp` in `{0, 1}`:
//!
//! - `exp == 0`: a real number, the imaginary coefficient is zero
//! - `exp == 1`: `real + imaginary * i`
//!
//! Equality is defined on the canonical string form (see the `Display`
//! impl), not on a numeric tolerance. Two values that print alike are equal,
//! and `Hash` hashes the same text.

mod canonical;
mod ops;

pub use canonical::canonicalize;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, AlgebraResult};
use crate::formatting::format_float;

/// Complex number with a symbolic power of the imaginary unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "ComplexParts")]
pub struct ComplexValue {
    real: f64,
    imaginary: f64,
    exp: i32,
}

/// Raw, possibly non-canonical fields accepted on deserialization
#[derive(Debug, Deserialize)]
struct ComplexParts {
    #[serde(default)]
    real: f64,
    imaginary: f64,
    #[serde(default = "default_exp")]
    exp: i32,
}

fn default_exp() -> i32 {
    1
}

impl From<ComplexParts> for ComplexValue {
    fn from(parts: ComplexParts) -> Self {
        ComplexValue::new(parts.real, parts.imaginary, parts.exp)
    }
}

impl ComplexValue {
    /// Canonical zero
    pub const ZERO: ComplexValue = ComplexValue {
        real: 0.0,
        imaginary: 0.0,
        exp: 0,
    };

    /// Canonical real unit
    pub const ONE: ComplexValue = ComplexValue {
        real: 1.0,
        imaginary: 0.0,
        exp: 0,
    };

    /// Canonical imaginary unit
    pub const I: ComplexValue = ComplexValue {
        real: 0.0,
        imaginary: 1.0,
        exp: 1,
    };

    /// Build `real + imaginary * i^exp` and reduce it.
    pub fn new(real: f64, imaginary: f64, exp: i32) -> Self {
        let (real, imaginary, exp) = canonicalize(real, imaginary, exp);
        ComplexValue {
            real,
            imaginary,
            exp,
        }
    }

    /// Build `real + imaginary * i`.
    pub fn rectangular(real: f64, imaginary: f64) -> Self {
        Self::new(real, imaginary, 1)
    }

    /// Build `imaginary * i^exp` with no real part.
    pub fn imaginary_power(imaginary: f64, exp: i32) -> Self {
        Self::new(0.0, imaginary, exp)
    }

    /// Build `imaginary * i`.
    pub fn pure_imaginary(imaginary: f64) -> Self {
        Self::imaginary_power(imaginary, 1)
    }

    /// Cast a real number; the result has no imaginary term.
    pub fn from_real(real: f64) -> Self {
        Self::rectangular(real, 0.0)
    }

    /// Real part, including any folded `i^0` or `i^2` contribution.
    pub fn real(&self) -> f64 {
        self.real
    }

    /// Coefficient of `i`; zero whenever `exp() == 0`.
    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// Exponent of the imaginary unit, always 0 or 1.
    pub fn exp(&self) -> i32 {
        self.exp
    }

    /// Componentwise sum.
    // Inherent method; the `Add` impl forwards here.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: ComplexValue) -> ComplexValue {
        ComplexValue::new(
            self.real + other.real,
            self.imaginary + other.imaginary,
            self.exp.max(other.exp),
        )
    }

    /// Componentwise difference.
    pub fn subtract(self, other: ComplexValue) -> ComplexValue {
        ComplexValue::new(
            self.real - other.real,
            self.imaginary - other.imaginary,
            self.exp.max(other.exp),
        )
    }

    /// Product, expanded as `(a + b i^p)(c + d i^q) = ac + ad i^q + bc i^p + bd i^(p+q)`.
    pub fn multiply(self, other: ComplexValue) -> ComplexValue {
        let outer = ComplexValue::new(
            self.real * other.real,
            self.real * other.imaginary,
            other.exp,
        );
        let inner = ComplexValue::imaginary_power(self.imaginary * other.real, self.exp);
        let last = ComplexValue::imaginary_power(
            self.imaginary * other.imaginary,
            self.exp + other.exp,
        );
        outer.add(inner.add(last))
    }

    /// Quotient.
    ///
    /// A non-real divisor is first rationalized by multiplying numerator and
    /// denominator with its conjugate, leaving a real denominator.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] if that real denominator is exactly zero.
    pub fn divide(self, divisor: ComplexValue) -> AlgebraResult<ComplexValue> {
        let (numerator, denominator) = if divisor.is_real() {
            (self, divisor)
        } else {
            let conjugate = divisor.conjugate();
            (self.multiply(conjugate), divisor.multiply(conjugate))
        };

        let scalar = denominator.real;
        if scalar == 0.0 {
            log::debug!("division of {} by {} has a zero denominator", self, divisor);
            return Err(AlgebraError::DivisionByZero);
        }

        Ok(ComplexValue::new(
            numerator.real / scalar,
            numerator.imaginary / scalar,
            numerator.exp,
        ))
    }

    /// Same value with the imaginary coefficient negated.
    pub fn conjugate(self) -> ComplexValue {
        ComplexValue::new(self.real, -self.imaginary, self.exp)
    }

    /// Additive inverse: both parts negated.
    pub fn negate(self) -> ComplexValue {
        ComplexValue::new(-self.real, -self.imaginary, self.exp)
    }

    /// Distance from the origin, `sqrt(real^2 + imaginary^2)`.
    pub fn modulus(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Squared modulus, `real^2 + imaginary^2`.
    pub fn norm_squared(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// Alias of [`norm_squared`](Self::norm_squared).
    pub fn norm(&self) -> f64 {
        self.norm_squared()
    }

    /// True when there is no imaginary term left.
    pub fn is_real(&self) -> bool {
        self.imaginary == 0.0
    }
}

/// Canonical string form: `2.0` for reals, `2.0 +3.0 i` / `2.0 -1.0 i` otherwise.
impl fmt::Display for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let real = format_float(self.real);
        if self.exp == 0 {
            return f.write_str(&real);
        }
        let sign = if self.imaginary < 0.0 { "" } else { "+" };
        write!(f, "{} {}{} i", real, sign, format_float(self.imaginary))
    }
}

impl PartialEq for ComplexValue {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for ComplexValue {}

impl Hash for ComplexValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Default for ComplexValue {
    fn default() -> Self {
        ComplexValue::ZERO
    }
}

impl From<f64> for ComplexValue {
    fn from(real: f64) -> Self {
        ComplexValue::from_real(real)
    }
}

impl From<nalgebra::Complex<f64>> for ComplexValue {
    fn from(value: nalgebra::Complex<f64>) -> Self {
        ComplexValue::rectangular(value.re, value.im)
    }
}

impl From<ComplexValue> for nalgebra::Complex<f64> {
    fn from(value: ComplexValue) -> Self {
        nalgebra::Complex::new(value.real, value.imaginary)
    }
}
