//! Operator and numeric-trait impls for [`ComplexValue`].
//!
//! Division has no operator impl: it can fail, so callers go through
//! [`ComplexValue::divide`].

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use super::ComplexValue;

impl Add for ComplexValue {
    type Output = ComplexValue;

    fn add(self, rhs: ComplexValue) -> ComplexValue {
        ComplexValue::add(self, rhs)
    }
}

impl Sub for ComplexValue {
    type Output = ComplexValue;

    fn sub(self, rhs: ComplexValue) -> ComplexValue {
        self.subtract(rhs)
    }
}

impl Mul for ComplexValue {
    type Output = ComplexValue;

    fn mul(self, rhs: ComplexValue) -> ComplexValue {
        self.multiply(rhs)
    }
}

impl Neg for ComplexValue {
    type Output = ComplexValue;

    fn neg(self) -> ComplexValue {
        self.negate()
    }
}

impl Zero for ComplexValue {
    fn zero() -> Self {
        ComplexValue::ZERO
    }

    fn is_zero(&self) -> bool {
        self.real() == 0.0 && self.imaginary() == 0.0
    }
}

impl One for ComplexValue {
    fn one() -> Self {
        ComplexValue::ONE
    }
}
