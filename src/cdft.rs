//! Unnormalized complex discrete Fourier transform kernel.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::precompute_utils;
use num_complex::Complex;
use num_traits::float::{Float, FloatConst};
use num_traits::identities::{one, zero};
use num_traits::NumAssign;

/// Precomputed state for a fixed-length complex-to-complex DFT.
///
/// When X is the input array and Y the output array, the forward transform is
///
/// \\[ \Large Y_k = \sum_{j=0}^{n-1} X_j e^{- \frac {2 \pi i j k}{n}} \\]
///
/// and the backward transform uses the conjugate kernel. Neither direction
/// scales the result; an explicit scaler is applied while converting.
#[derive(Debug)]
pub(crate) struct Cdft<T> {
    len: usize,
    // radix-2 bit-reversal ids, empty unless the length is a power of two
    ids: Vec<usize>,
    omega: Vec<Complex<T>>,
    omega_back: Vec<Complex<T>>,
}

impl<T: Float + FloatConst + NumAssign> Cdft<T> {
    pub fn new(len: usize) -> Self {
        let omega = precompute_utils::calc_omega(len);
        let omega_back = omega.iter().rev().copied().collect::<Vec<_>>();
        let ids = if len.is_power_of_two() && len > 1 {
            precompute_utils::calc_bitreverse_pow2(len)
        } else {
            Vec::new()
        };
        Self {
            len,
            ids,
            omega,
            omega_back,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Unnormalized transform with an explicit output scaler.
    pub fn convert(&self, source: &[Complex<T>], is_back: bool, scaler: T) -> Vec<Complex<T>> {
        if source.len() != self.len {
            panic!(
                "invalid length (source: {}, dft.len: {})",
                source.len(),
                self.len
            )
        }

        if self.len <= 1 {
            return source.iter().map(|&x| x.scale(scaler)).collect();
        }

        let omega = if is_back {
            &self.omega_back
        } else {
            &self.omega
        };

        if self.ids.is_empty() {
            self.convert_naive(source, omega, scaler)
        } else {
            self.convert_rad2(source, omega, scaler)
        }
    }

    // definition-sum DFT over the precomputed cycle, any length
    fn convert_naive(
        &self,
        source: &[Complex<T>],
        omega: &[Complex<T>],
        scaler: T,
    ) -> Vec<Complex<T>> {
        (0..self.len)
            .map(|k| {
                (0..self.len)
                    .fold(Complex::new(zero(), zero()), |acc, j| {
                        acc + source[j] * omega[(j * k) % self.len]
                    })
                    .scale(scaler)
            })
            .collect()
    }

    // iterative radix-2 butterflies over bit-reversed input
    fn convert_rad2(
        &self,
        source: &[Complex<T>],
        omega: &[Complex<T>],
        scaler: T,
    ) -> Vec<Complex<T>> {
        let len = self.len;
        let mut ret = self
            .ids
            .iter()
            .map(|&i| {
                if scaler != one() {
                    source[i].scale(scaler)
                } else {
                    source[i]
                }
            })
            .collect::<Vec<_>>();

        let mut po2 = 1;
        let mut rad = len;
        while po2 < len {
            let po2m = po2;
            po2 <<= 1;
            rad >>= 1;
            for mut j in 0..po2m {
                let w1 = omega[rad * j];
                while j < len {
                    let pos1 = j + po2m;
                    let z1 = ret[pos1] * w1;
                    ret[pos1] = ret[j] - z1;
                    ret[j] += z1;
                    j += po2;
                }
            }
        }
        ret
    }
}
