//! Euclidean long division.
//!
//! Schoolbook division of the dividend's leading term by the divisor's,
//! one quotient monomial per round. Over a field carrier the usual
//! quotient/remainder identity holds; over other carriers see
//! [`Polynomial::div_rem`].

use std::ops::Div;

use monic_rings::traits::Ring;
use thiserror::Error;

use crate::sparse::Polynomial;

/// Error returned by [`Polynomial::try_div_rem`] when the divisor is
/// the zero polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("division by zero polynomial")]
pub struct DivideByZero;

impl<R: Ring + Div<Output = R>> Polynomial<R> {
    /// Divides by `divisor`, returning (quotient, remainder).
    ///
    /// Division by the zero polynomial yields a zero quotient and
    /// leaves the dividend as the remainder; no error is raised. Use
    /// [`try_div_rem`](Self::try_div_rem) to observe that case instead.
    ///
    /// Over a field carrier the result satisfies
    /// `self = quotient * divisor + remainder` with the remainder zero
    /// or of degree below the divisor's. Over a carrier with inexact
    /// division (machine integers), a round can fail to lower the
    /// remainder's degree; the remainder's leading term is then dropped
    /// outright so the loop terminates, and the pair returned is not a
    /// Euclidean quotient and remainder.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let Some((divisor_deg, divisor_lead)) = divisor.leading_term() else {
            return (Self::zero(), self.clone());
        };
        let divisor_lead = divisor_lead.clone();

        let mut quotient = Self::zero();
        let mut remainder = self.clone();

        while let Some((deg, lead)) = remainder.leading_term() {
            if deg < divisor_deg {
                break;
            }

            let c = lead.clone() / divisor_lead.clone();
            let t = Self::monomial(c, deg - divisor_deg);
            quotient = quotient.add(&t);
            remainder = remainder.sub(&divisor.mul(&t));

            if remainder.degree() == Some(deg) {
                remainder.drop_leading_term();
            }
        }

        (quotient, remainder)
    }

    /// Fallible form of [`div_rem`](Self::div_rem).
    ///
    /// # Errors
    ///
    /// Returns [`DivideByZero`] if `divisor` is the zero polynomial.
    pub fn try_div_rem(&self, divisor: &Self) -> Result<(Self, Self), DivideByZero> {
        if divisor.is_zero() {
            return Err(DivideByZero);
        }
        Ok(self.div_rem(divisor))
    }
}
