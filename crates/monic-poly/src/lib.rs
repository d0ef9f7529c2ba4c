//! # monic-poly
//!
//! Sparse univariate polynomial arithmetic for the Monic library.
//!
//! This crate provides:
//! - `Polynomial<R>`, a sparse polynomial over any `Ring` carrier
//! - Ring arithmetic, point evaluation, and functional composition
//! - Euclidean long division and monic GCD
//! - A canonical text rendering
//!
//! Only the nonzero terms are stored, keyed by exponent in an ordered
//! map, so polynomials like x^1000 + 1 cost two entries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod division;
pub mod gcd;
pub mod ops;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use division::DivideByZero;
pub use sparse::Polynomial;
