//! # Monic
//!
//! Sparse univariate polynomial algebra over generic carriers.
//!
//! Monic represents a polynomial as its nonzero (exponent, coefficient)
//! terms and provides the full ring tool set over any carrier
//! implementing the `Ring` trait:
//!
//! - **Arithmetic**: addition, subtraction, multiplication, scalar
//!   multiples, with operator overloads and compound assignment
//! - **Euclidean division**: quotient and remainder via long division
//! - **Monic GCD**: the Euclidean algorithm over field carriers
//! - **Evaluation and composition**: `p.eval(&x)` and `p.compose(&q)`
//! - **Rendering**: a compact canonical text form
//!
//! ## Quick Start
//!
//! ```rust
//! use monic::prelude::*;
//!
//! let p: Polynomial<i64> = Polynomial::new(vec![-1, 0, 1]); // x^2 - 1
//! let q = Polynomial::new(vec![-1, 1]); // x - 1
//!
//! let (quot, rem) = p.div_rem(&q);
//! assert_eq!(quot.to_string(), "x+1");
//! assert!(rem.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use monic_poly as poly;
pub use monic_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use monic_poly::{DivideByZero, Polynomial};
    pub use monic_rings::{Field, OrderedRing, Ring, Q};
}
