//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::sparse::Polynomial;
    use monic_rings::traits::Ring;
    use monic_rings::Q;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::one();
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        // Representation invariants

        #[test]
        fn poly_no_stored_zeros(a in small_poly(), b in small_poly()) {
            for p in [a.add(&b), a.sub(&b), a.mul(&b)] {
                prop_assert!(p.terms().all(|(_, c)| !c.is_zero()));
            }
        }

        #[test]
        fn poly_degree_none_iff_zero(a in small_poly(), b in small_poly()) {
            let diff = a.sub(&b);
            prop_assert_eq!(diff.degree().is_none(), diff.is_zero());
        }

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) over a field
            let product = a.mul(&b);
            prop_assert_eq!(
                product.degree(),
                Some(a.degree().unwrap() + b.degree().unwrap())
            );
        }

        // Evaluation properties

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a + b)(x) = a(x) + b(x)
            let sum = a.add(&b);
            prop_assert_eq!(sum.eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a * b)(x) = a(x) * b(x)
            let product = a.mul(&b);
            prop_assert_eq!(product.eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_compose_eval(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a o b)(x) = a(b(x))
            let composed = a.compose(&b);
            prop_assert_eq!(composed.eval(&x), a.eval(&b.eval(&x)));
        }

        // Division and GCD over the field Q

        #[test]
        fn poly_division_identity(a in small_poly(), b in nonzero_poly()) {
            let (quot, rem) = a.div_rem(&b);
            prop_assert_eq!(quot.mul(&b).add(&rem), a);
            prop_assert!(rem.is_zero() || rem.degree() < b.degree());
        }

        #[test]
        fn poly_gcd_divides_both(a in small_poly(), b in nonzero_poly()) {
            let g = a.gcd(&b);
            prop_assert!(!g.is_zero());
            let (_, ra) = a.div_rem(&g);
            let (_, rb) = b.div_rem(&g);
            prop_assert!(ra.is_zero());
            prop_assert!(rb.is_zero());
        }

        #[test]
        fn poly_gcd_monic_or_zero(a in small_poly(), b in small_poly()) {
            let g = a.gcd(&b);
            if let Some(lead) = g.leading_coeff() {
                prop_assert!(lead.is_one());
            } else {
                prop_assert!(a.is_zero() && b.is_zero());
            }
        }
    }
}
