//! Operator overloads for polynomials.
//!
//! Binary `+`, `-`, `*` and unary `-` delegate to the named methods.
//! `/` and `%` take the quotient and remainder of long division, and
//! the compound forms mutate their target in place. `a /= &zero` sets
//! `a` to zero while `a %= &zero` leaves `a` unchanged, matching
//! [`Polynomial::div_rem`](crate::Polynomial::div_rem).

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use monic_rings::traits::Ring;

use crate::sparse::Polynomial;

impl<R: Ring> Add for Polynomial<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl<R: Ring> Add for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<R: Ring> Sub for Polynomial<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl<R: Ring> Sub for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<R: Ring> Mul for Polynomial<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl<R: Ring> Mul for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<R: Ring> Neg for Polynomial<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl<R: Ring> Neg for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl<R: Ring> AddAssign<&Polynomial<R>> for Polynomial<R> {
    fn add_assign(&mut self, rhs: &Polynomial<R>) {
        for (exp, c) in &rhs.coef {
            let entry = self.coef.entry(*exp).or_insert_with(R::zero);
            *entry = entry.clone() + c.clone();
        }
        self.normalize();
    }
}

impl<R: Ring> AddAssign for Polynomial<R> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<R: Ring> SubAssign<&Polynomial<R>> for Polynomial<R> {
    fn sub_assign(&mut self, rhs: &Polynomial<R>) {
        for (exp, c) in &rhs.coef {
            let entry = self.coef.entry(*exp).or_insert_with(R::zero);
            *entry = entry.clone() - c.clone();
        }
        self.normalize();
    }
}

impl<R: Ring> SubAssign for Polynomial<R> {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl<R: Ring> MulAssign<&Polynomial<R>> for Polynomial<R> {
    fn mul_assign(&mut self, rhs: &Polynomial<R>) {
        *self = Polynomial::mul(self, rhs);
    }
}

impl<R: Ring> MulAssign for Polynomial<R> {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl<R: Ring + Div<Output = R>> Div for Polynomial<R> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).0
    }
}

impl<R: Ring + Div<Output = R>> Div for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_rem(rhs).0
    }
}

impl<R: Ring + Div<Output = R>> Rem for Polynomial<R> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).1
    }
}

impl<R: Ring + Div<Output = R>> Rem for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn rem(self, rhs: Self) -> Self::Output {
        self.div_rem(rhs).1
    }
}

impl<R: Ring + Div<Output = R>> DivAssign<&Polynomial<R>> for Polynomial<R> {
    fn div_assign(&mut self, rhs: &Polynomial<R>) {
        let (quotient, _) = self.div_rem(rhs);
        *self = quotient;
    }
}

impl<R: Ring + Div<Output = R>> DivAssign for Polynomial<R> {
    fn div_assign(&mut self, rhs: Self) {
        *self /= &rhs;
    }
}

impl<R: Ring + Div<Output = R>> RemAssign<&Polynomial<R>> for Polynomial<R> {
    fn rem_assign(&mut self, rhs: &Polynomial<R>) {
        let (_, remainder) = self.div_rem(rhs);
        *self = remainder;
    }
}

impl<R: Ring + Div<Output = R>> RemAssign for Polynomial<R> {
    fn rem_assign(&mut self, rhs: Self) {
        *self %= &rhs;
    }
}
