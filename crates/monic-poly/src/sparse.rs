//! Sparse univariate polynomials.
//!
//! Coefficients are stored in an ordered map keyed by exponent, so only
//! the nonzero terms occupy memory and both ends of the exponent range
//! are reachable in O(log n).

use std::collections::BTreeMap;
use std::fmt;

use monic_rings::traits::{OrderedRing, Ring};

/// A sparse univariate polynomial with coefficients in a ring R.
///
/// No stored coefficient is ever zero: every constructor and mutating
/// operation removes exact-zero entries before returning. Two
/// mathematically equal polynomials therefore always hold identical
/// term maps, and equality is structural.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<R: Ring> {
    /// Nonzero coefficients indexed by exponent.
    pub(crate) coef: BTreeMap<usize, R>,
}

impl<R: Ring> Polynomial<R> {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// Zero coefficients are skipped, so `new(vec![0, 0, 3])` holds a
    /// single term.
    #[must_use]
    pub fn new(coeffs: Vec<R>) -> Self {
        coeffs.into_iter().collect()
    }

    /// Creates a polynomial from (exponent, coefficient) pairs.
    ///
    /// Duplicate exponents are summed.
    #[must_use]
    pub fn from_terms(terms: Vec<(usize, R)>) -> Self {
        let mut coef = BTreeMap::new();
        for (exp, c) in terms {
            let entry = coef.entry(exp).or_insert_with(R::zero);
            *entry = entry.clone() + c;
        }
        let mut poly = Self { coef };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coef: BTreeMap::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    ///
    /// A zero constant yields the zero polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(R::one(), 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coef = BTreeMap::new();
        if !c.is_zero() {
            coef.insert(n, c);
        }
        Self { coef }
    }

    /// Returns the coefficient of x^i, or zero when the term is absent.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coef.get(&i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coef.keys().next_back().copied()
    }

    /// Returns the leading coefficient, or `None` for the zero
    /// polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.coef.values().next_back()
    }

    /// Returns the leading (exponent, coefficient) pair.
    #[must_use]
    pub fn leading_term(&self) -> Option<(usize, &R)> {
        self.coef.iter().next_back().map(|(&e, c)| (e, c))
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coef.is_empty()
    }

    /// Returns the number of nonzero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coef.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coef.is_empty()
    }

    /// Returns the nonzero terms in ascending exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &R)> {
        self.coef.iter().map(|(&e, c)| (e, c))
    }

    /// Removes exact-zero entries.
    pub(crate) fn normalize(&mut self) {
        self.coef.retain(|_, c| !c.is_zero());
    }

    /// Removes the highest-degree term.
    pub(crate) fn drop_leading_term(&mut self) {
        self.coef.pop_last();
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (exp, c) in &other.coef {
            let entry = result.coef.entry(*exp).or_insert_with(R::zero);
            *entry = entry.clone() + c.clone();
        }
        result.normalize();
        result
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (exp, c) in &other.coef {
            let entry = result.coef.entry(*exp).or_insert_with(R::zero);
            *entry = entry.clone() - c.clone();
        }
        result.normalize();
        result
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coef: self.coef.iter().map(|(&e, c)| (e, -c.clone())).collect(),
        }
    }

    /// Multiplies two polynomials (schoolbook, term by term).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut coef = BTreeMap::new();
        for (&i, a) in &self.coef {
            for (&j, b) in &other.coef {
                let prod = a.clone() * b.clone();
                let entry = coef.entry(i + j).or_insert_with(R::zero);
                *entry = entry.clone() + prod;
            }
        }

        let mut result = Self { coef };
        result.normalize();
        result
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }

        let coef = self
            .coef
            .iter()
            .map(|(&e, x)| (e, x.clone() * c.clone()))
            .filter(|(_, x)| !x.is_zero())
            .collect();

        Self { coef }
    }

    /// Evaluates the polynomial at a point.
    ///
    /// Walks the exponents in ascending order with a running power of
    /// x, so evaluation costs one carrier multiplication per exponent
    /// up to the degree.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut acc = R::zero();
        let mut power = R::one();
        let mut k = 0;

        for (exp, c) in self.terms() {
            while k < exp {
                power = power * x.clone();
                k += 1;
            }
            acc = acc + c.clone() * power.clone();
        }

        acc
    }

    /// Computes the composition self(other(x)).
    ///
    /// Walks the nonzero terms of self in ascending exponent order,
    /// raising a running power of `other` by one multiplication each
    /// time the exponent advances.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        let mut power = Self::one();
        let mut k = 0;

        for (exp, c) in self.terms() {
            while k < exp {
                power = power.mul(other);
                k += 1;
            }
            result = result.add(&power.scale(c));
        }

        result
    }
}

impl<R: Ring> Default for Polynomial<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Ring> From<R> for Polynomial<R> {
    fn from(c: R) -> Self {
        Self::constant(c)
    }
}

impl<R: Ring> FromIterator<R> for Polynomial<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let coef = iter
            .into_iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .collect();
        Self { coef }
    }
}

impl<'a, R: Ring> IntoIterator for &'a Polynomial<R> {
    type Item = (usize, &'a R);
    type IntoIter = std::iter::Map<
        std::collections::btree_map::Iter<'a, usize, R>,
        fn((&'a usize, &'a R)) -> (usize, &'a R),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let unpack: fn((&'a usize, &'a R)) -> (usize, &'a R) = |(e, c)| (*e, c);
        self.coef.iter().map(unpack)
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for Polynomial<R> {
    /// Renders the polynomial with the highest-degree term first.
    ///
    /// Terms are joined by `+`; a negative coefficient contributes its
    /// own `-` instead. Unit coefficients and the x^0 and x^1 markers
    /// are suppressed, so x^2 - 1 renders as `x^2-1` and the zero
    /// polynomial as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (&exp, c) in self.coef.iter().rev() {
            if c.signum() < 0 {
                write!(f, "-")?;
            } else if !first {
                write!(f, "+")?;
            }
            first = false;

            let magnitude = c.abs();
            if !magnitude.is_one() {
                write!(f, "{magnitude}")?;
                if exp > 0 {
                    write!(f, "*")?;
                }
            } else if exp == 0 {
                write!(f, "1")?;
            }

            if exp > 0 {
                write!(f, "x")?;
                if exp > 1 {
                    write!(f, "^{exp}")?;
                }
            }
        }

        Ok(())
    }
}
