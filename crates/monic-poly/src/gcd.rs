//! Monic greatest common divisors.
//!
//! The Euclidean remainder sequence over a field carrier, with the
//! result scaled so its leading coefficient is one.

use monic_rings::traits::Field;

use crate::sparse::Polynomial;

impl<F: Field> Polynomial<F> {
    /// Scales the polynomial so its leading coefficient is one.
    ///
    /// The zero polynomial is returned unchanged.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().and_then(F::inv) {
            Some(lead_inv) => self.scale(&lead_inv),
            None => self.clone(),
        }
    }

    /// Computes the monic greatest common divisor.
    ///
    /// `gcd(0, 0)` is the zero polynomial.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut u = self.clone();
        let mut v = other.clone();

        while !v.is_zero() {
            let (_, r) = u.div_rem(&v);
            u = v;
            v = r;
        }

        u.monic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monic_rings::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_gcd_shared_root() {
        // gcd(x^2 - 1, x^2 - 2x + 1) = x - 1
        // x^2 - 1 = (x - 1)(x + 1), x^2 - 2x + 1 = (x - 1)^2
        let a = Polynomial::new(vec![q(-1), q(0), q(1)]);
        let b = Polynomial::new(vec![q(1), q(-2), q(1)]);

        let g = a.gcd(&b);

        assert_eq!(g, Polynomial::new(vec![q(-1), q(1)]));
        assert_eq!(g.to_string(), "x-1");
    }

    #[test]
    fn test_gcd_is_monic() {
        // Both arguments share the factor 2x + 2; the gcd is its monic
        // form x + 1.
        let common = Polynomial::new(vec![q(2), q(2)]);
        let a = common.mul(&Polynomial::new(vec![q(3), q(1)]));
        let b = common.mul(&Polynomial::new(vec![q(-5), q(1)]));

        let g = a.gcd(&b);

        assert_eq!(g, Polynomial::new(vec![q(1), q(1)]));
        assert_eq!(g.leading_coeff(), Some(&q(1)));
    }

    #[test]
    fn test_gcd_coprime() {
        // gcd(x^2 + 1, x - 1) = 1 over Q
        let a = Polynomial::new(vec![q(1), q(0), q(1)]);
        let b = Polynomial::new(vec![q(-1), q(1)]);

        assert_eq!(a.gcd(&b), Polynomial::one());
    }

    #[test]
    fn test_gcd_with_zero() {
        let a = Polynomial::new(vec![q(2), q(4)]);
        let zero = Polynomial::zero();

        // gcd(a, 0) is the monic form of a
        assert_eq!(a.gcd(&zero), Polynomial::new(vec![Q::new(1, 2), q(1)]));
        assert_eq!(zero.gcd(&a), a.gcd(&zero));
        assert!(zero.gcd(&zero).is_zero());
    }

    #[test]
    fn test_gcd_divides_both() {
        let a = Polynomial::new(vec![q(-2), q(1)]).mul(&Polynomial::new(vec![q(1), q(1), q(1)]));
        let b = Polynomial::new(vec![q(-2), q(1)]).mul(&Polynomial::new(vec![q(5), q(3)]));

        let g = a.gcd(&b);
        let (_, ra) = a.div_rem(&g);
        let (_, rb) = b.div_rem(&g);

        assert!(ra.is_zero());
        assert!(rb.is_zero());
    }

    #[test]
    fn test_monic() {
        let p = Polynomial::new(vec![q(2), q(0), q(4)]);

        assert_eq!(p.monic(), Polynomial::new(vec![Q::new(1, 2), q(0), q(1)]));
        assert!(Polynomial::<Q>::zero().monic().is_zero());
    }
}
