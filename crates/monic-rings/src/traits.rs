//! Algebraic structure traits.
//!
//! This module declares, once, the operation set a polynomial carrier
//! must supply. The polynomial engine consumes nothing beyond these
//! traits and the `std::ops` bounds they carry.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Comparison with zero is exact. Float carriers inherit this, so a
/// near-zero coefficient is a nonzero coefficient.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;
}

/// A ring whose elements carry a total sign.
///
/// Rendering uses this to split a coefficient into a sign and a
/// magnitude.
pub trait OrderedRing: Ring + PartialOrd {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}

/// A field is a ring where every non-zero element has a multiplicative
/// inverse.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}
