//! The field of rational numbers Q.
//!
//! This module wraps `dashu::rational::RBig` so polynomial division and
//! GCD computations stay exact at any coefficient size.

use dashu::base::{Abs, Inverse, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::{Field, OrderedRing, Ring};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive
/// denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let mut num = IBig::from(numerator);
        if denominator < 0 {
            num = -num;
        }
        Self(RBig::from_parts(num, UBig::from(denominator.unsigned_abs())))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == UBig::ONE
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    fn signum(&self) -> i8 {
        if self.0 == RBig::ZERO {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if Ring::is_zero(self) {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl num_traits::Zero for Q {
    fn zero() -> Self {
        Ring::zero()
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(self)
    }
}

impl num_traits::One for Q {
    fn one() -> Self {
        Ring::one()
    }

    fn is_one(&self) -> bool {
        Ring::is_one(self)
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Q {
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self.0)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}
