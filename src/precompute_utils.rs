//! Twiddle-factor precomputation shared by the transform kernels.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use num_complex::Complex;
use num_traits::cast;
use num_traits::float::{Float, FloatConst};
use num_traits::identities::one;
use std::cmp;

#[inline]
pub fn calc_omega_item<T: Float + FloatConst>(len: usize, position: usize) -> Complex<T> {
    Complex::from_polar(
        one(),
        cast::<_, T>(-2.0).unwrap() * T::PI() / cast(len).unwrap() * cast(position).unwrap(),
    )
}

/// Precompute one full cycle of \\(\omega^k = e^{-2 \pi i k / len}\\),
/// with `len + 1` entries so that `omega[len]` closes the cycle at 1.
/// The reversed table therefore holds the conjugate twiddles used by the
/// backward transforms.
pub fn calc_omega<T: Float + FloatConst>(len: usize) -> Vec<Complex<T>> {
    let mut omega = Vec::with_capacity(len + 1);
    omega.push(one());
    if len.trailing_zeros() >= 2 {
        let q = len >> 2;
        let h = len >> 1;
        // first quarter turn
        for i in 1..q {
            omega.push(calc_omega_item(len, i));
        }

        // quarter to half turn, first quarter rotated by -i
        for i in q..h {
            let tmp: Complex<T> = omega[i - q];
            omega.push(Complex::new(tmp.im, -tmp.re));
        }

        // second half turn, negated first half
        for i in h..len {
            let tmp = omega[i - h];
            omega.push(Complex::new(-tmp.re, -tmp.im));
        }
    } else if len & 1 == 0 {
        let h = cmp::max(len >> 1, 1);
        for i in 1..h {
            omega.push(calc_omega_item(len, i));
        }

        for i in h..len {
            let tmp = omega[i - h];
            omega.push(Complex::new(-tmp.re, -tmp.im));
        }
    } else {
        for i in 1..len {
            omega.push(calc_omega_item(len, i));
        }
    }
    omega.push(one());
    omega
}

/// Bit-reversal permutation for a power-of-two length.
#[inline]
pub fn calc_bitreverse_pow2(len: usize) -> Vec<usize> {
    let level = len.trailing_zeros() as usize;
    let mut ids = Vec::with_capacity(len);
    ids.push(0);
    let mut llen = 1_usize;
    for _ in 0..level {
        for id in ids.iter_mut().take(llen) {
            *id <<= 1;
        }
        for j in 0..llen {
            let id = ids[j] + 1;
            ids.push(id);
        }
        llen <<= 1;
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nearly_eq::assert_nearly_eq;

    #[test]
    fn omega_table_closes_the_cycle() {
        for &len in &[1, 2, 3, 4, 6, 8, 12, 16, 30] {
            let omega = calc_omega::<f64>(len);
            assert_eq!(omega.len(), len + 1);
            assert_nearly_eq(&omega[0], &Complex::new(1.0, 0.0));
            assert_nearly_eq(&omega[len], &Complex::new(1.0, 0.0));
        }
    }

    #[test]
    fn omega_matches_direct_evaluation() {
        for &len in &[2, 3, 4, 5, 8, 9, 16, 24] {
            let omega = calc_omega::<f64>(len);
            for i in 0..len {
                let angle = -2.0 * std::f64::consts::PI * (i as f64) / (len as f64);
                assert_nearly_eq(&omega[i], &Complex::new(angle.cos(), angle.sin()));
            }
        }
    }

    #[test]
    fn bitreverse_pow2_is_a_self_inverse_permutation() {
        for &len in &[1_usize, 2, 4, 8, 16, 64] {
            let ids = calc_bitreverse_pow2(len);
            assert_eq!(ids.len(), len);
            for (i, &id) in ids.iter().enumerate() {
                assert_eq!(ids[id], i);
            }
        }
    }

    #[test]
    fn bitreverse_pow2_of_eight() {
        assert_eq!(calc_bitreverse_pow2(8), vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }
}
