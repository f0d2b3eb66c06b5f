//! Approximate-equality assertions for the test suites.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use num_complex::Complex;
use std::fmt::Debug;

pub trait NearlyEq<Rhs: ?Sized = Self, Diff = Self> {
    fn eps() -> Diff;

    fn eq(&self, other: &Rhs, eps: &Diff) -> bool;
}

impl NearlyEq for f32 {
    fn eps() -> f32 {
        1e-2
    }

    fn eq(&self, other: &f32, eps: &f32) -> bool {
        *self == *other || (*self - *other).abs() < *eps
    }
}

impl NearlyEq for f64 {
    fn eps() -> f64 {
        1e-8
    }

    fn eq(&self, other: &f64, eps: &f64) -> bool {
        *self == *other || (*self - *other).abs() < *eps
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Complex<A>, B> for Complex<C> {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &Complex<A>, eps: &B) -> bool {
        self.re.eq(&other.re, eps) && self.im.eq(&other.im, eps)
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<[A], B> for [C] {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &[A], eps: &B) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(lhs, rhs)| lhs.eq(rhs, eps))
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Vec<A>, B> for Vec<C> {
    fn eps() -> B {
        C::eps()
    }

    fn eq(&self, other: &Vec<A>, eps: &B) -> bool {
        self.as_slice().eq(other.as_slice(), eps)
    }
}

pub fn assert_nearly_eq<A: Debug + ?Sized, B, C: NearlyEq<A, B> + Debug + ?Sized>(
    expected: &C,
    actual: &A,
) {
    let eps = C::eps();
    assert!(
        expected.eq(actual, &eps),
        "assertion failed: `(left == right)` (left: `{:?}` , right: `{:?}`)",
        expected,
        actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_within_eps() {
        assert_nearly_eq(&1.0_f64, &(1.0 + 1e-12));
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn scalar_outside_eps() {
        assert_nearly_eq(&1.0_f64, &1.1);
    }

    #[test]
    fn complex_and_vec_forwarding() {
        let lhs = vec![Complex::new(1.0_f64, -2.0), Complex::new(0.5, 0.0)];
        let rhs = vec![Complex::new(1.0 + 1e-12, -2.0), Complex::new(0.5, 1e-13)];
        assert_nearly_eq(&lhs, &rhs);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn length_mismatch_fails() {
        assert_nearly_eq(&[1.0_f64, 2.0][..], &[1.0_f64][..]);
    }
}
