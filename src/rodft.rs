//! Unnormalized discrete sine transforms, types 1 to 4.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::precompute_utils;
use num_complex::Complex;
use num_traits::cast;
use num_traits::float::{Float, FloatConst};
use num_traits::identities::zero;
use num_traits::NumAssign;

/// Which sine-transform boundary convention to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RodftKind {
    Rodft00,
    Rodft10,
    Rodft01,
    Rodft11,
}

/// Fixed-size state for one unnormalized DST, sharing the cyclic-table
/// layout of the cosine kernels (the sine of an \\(\omega\\) entry is the
/// negated imaginary part):
///
/// * type 1: \\( Y_k = 2 \sum_{j=0}^{n-1} X_j \sin(\pi (j+1)(k+1) / (n+1)) \\), `m = 2(n+1)`
/// * type 2: \\( Y_k = 2 \sum_{j=0}^{n-1} X_j \sin(\pi (2j+1)(k+1) / 2n) \\), `m = 4n`
/// * type 3: \\( Y_k = (-1)^k X_{n-1}
///   + 2 \sum_{j=0}^{n-2} X_j \sin(\pi (j+1)(2k+1) / 2n) \\), `m = 4n`
/// * type 4: \\( Y_k = 2 \sum_{j=0}^{n-1} X_j \sin(\pi (2j+1)(2k+1) / 4n) \\), `m = 8n`
#[derive(Debug)]
pub(crate) struct Rodft<T> {
    kind: RodftKind,
    len: usize,
    cycle: usize,
    omega: Vec<Complex<T>>,
}

impl<T: Float + FloatConst + NumAssign> Rodft<T> {
    pub fn new(kind: RodftKind, len: usize) -> Self {
        if len == 0 {
            panic!("invalid length (len: {})", len)
        }
        let cycle = match kind {
            RodftKind::Rodft00 => (len + 1) << 1,
            RodftKind::Rodft10 | RodftKind::Rodft01 => len << 2,
            RodftKind::Rodft11 => len << 3,
        };
        Self {
            kind,
            len,
            cycle,
            omega: precompute_utils::calc_omega(cycle),
        }
    }

    #[inline]
    fn sin(&self, index: usize) -> T {
        -self.omega[index % self.cycle].im
    }

    pub fn convert(&self, source: &[T], scaler: T) -> Vec<T> {
        if source.len() != self.len {
            panic!(
                "invalid length (source: {}, dst.len: {})",
                source.len(),
                self.len
            )
        }

        let n = self.len;
        let two: T = cast(2.0).unwrap();
        (0..n)
            .map(|k| {
                let acc = match self.kind {
                    RodftKind::Rodft00 => (0..n).fold(zero(), |x, j| {
                        x + two * source[j] * self.sin((j + 1) * (k + 1))
                    }),
                    RodftKind::Rodft10 => (0..n).fold(zero(), |x, j| {
                        x + two * source[j] * self.sin((2 * j + 1) * (k + 1))
                    }),
                    RodftKind::Rodft01 => {
                        let tail = if k & 1 == 0 {
                            source[n - 1]
                        } else {
                            -source[n - 1]
                        };
                        (0..n - 1).fold(tail, |x, j| {
                            x + two * source[j] * self.sin((j + 1) * (2 * k + 1))
                        })
                    }
                    RodftKind::Rodft11 => (0..n).fold(zero(), |x, j| {
                        x + two * source[j] * self.sin((2 * j + 1) * (2 * k + 1))
                    }),
                };
                acc * scaler
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nearly_eq::assert_nearly_eq;
    use rand::distributions::{Distribution, Standard};
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;
    use std::fmt::Debug;

    // reference sums straight from the analytic definitions
    fn reference(kind: RodftKind, source: &[f64]) -> Vec<f64> {
        use std::f64::consts::PI;
        let n = source.len();
        (0..n)
            .map(|k| match kind {
                RodftKind::Rodft00 => {
                    2.0 * (0..n)
                        .map(|j| {
                            source[j] * (PI * ((j + 1) * (k + 1)) as f64 / (n + 1) as f64).sin()
                        })
                        .sum::<f64>()
                }
                RodftKind::Rodft10 => {
                    2.0 * (0..n)
                        .map(|j| {
                            source[j]
                                * (PI * ((2 * j + 1) * (k + 1)) as f64 / (2 * n) as f64).sin()
                        })
                        .sum::<f64>()
                }
                RodftKind::Rodft01 => {
                    let sign = if k & 1 == 0 { 1.0 } else { -1.0 };
                    sign * source[n - 1]
                        + 2.0
                            * (0..n - 1)
                                .map(|j| {
                                    source[j]
                                        * (PI * ((j + 1) * (2 * k + 1)) as f64 / (2 * n) as f64)
                                            .sin()
                                })
                                .sum::<f64>()
                }
                RodftKind::Rodft11 => {
                    2.0 * (0..n)
                        .map(|j| {
                            source[j]
                                * (PI * ((2 * j + 1) * (2 * k + 1)) as f64 / (4 * n) as f64).sin()
                        })
                        .sum::<f64>()
                }
            })
            .collect()
    }

    fn random_source<T>(len: usize) -> Vec<T>
    where
        Standard: Distribution<T>,
    {
        let mut rng = XorShiftRng::from_seed([
            0xDA, 0xE1, 0x4B, 0x0B, 0xFF, 0xC2, 0xFE, 0x64, 0x23, 0xFE, 0x3F, 0x51, 0x6D, 0x3E,
            0xA2, 0xF3,
        ]);
        (0..len).map(|_| rng.gen::<T>()).collect()
    }

    #[test]
    fn matches_reference_definitions() {
        for &kind in &[
            RodftKind::Rodft00,
            RodftKind::Rodft10,
            RodftKind::Rodft01,
            RodftKind::Rodft11,
        ] {
            for len in 1..24 {
                let source = random_source::<f64>(len);
                let dst = Rodft::<f64>::new(kind, len);
                assert_nearly_eq(&reference(kind, &source), &dst.convert(&source, 1.0));
            }
        }
    }

    fn roundtrip<T: Float + FloatConst + NumAssign + Debug + crate::nearly_eq::NearlyEq>(
        forward: RodftKind,
        backward: RodftKind,
        len: usize,
        denominator: usize,
    ) where
        Standard: Distribution<T>,
    {
        let source = random_source::<T>(len);
        let spectrum = Rodft::<T>::new(forward, len).convert(&source, num_traits::one());
        let scaler = T::one() / cast(denominator).unwrap();
        let actual = Rodft::<T>::new(backward, len).convert(&spectrum, scaler);
        assert_nearly_eq(&source, &actual);
    }

    #[test]
    fn f64_type1_self_inverse() {
        for len in 1..32 {
            roundtrip::<f64>(RodftKind::Rodft00, RodftKind::Rodft00, len, 2 * (len + 1));
        }
    }

    #[test]
    fn f64_type2_type3_duality() {
        for len in 1..32 {
            roundtrip::<f64>(RodftKind::Rodft10, RodftKind::Rodft01, len, 2 * len);
            roundtrip::<f64>(RodftKind::Rodft01, RodftKind::Rodft10, len, 2 * len);
        }
    }

    #[test]
    fn f64_type4_self_inverse() {
        for len in 1..32 {
            roundtrip::<f64>(RodftKind::Rodft11, RodftKind::Rodft11, len, 2 * len);
        }
    }

    #[test]
    fn f32_roundtrips() {
        for len in 1..16 {
            roundtrip::<f32>(RodftKind::Rodft00, RodftKind::Rodft00, len, 2 * (len + 1));
            roundtrip::<f32>(RodftKind::Rodft10, RodftKind::Rodft01, len, 2 * len);
            roundtrip::<f32>(RodftKind::Rodft11, RodftKind::Rodft11, len, 2 * len);
        }
    }

    #[test]
    #[should_panic(expected = "invalid length")]
    fn zero_length_rejected() {
        Rodft::<f64>::new(RodftKind::Rodft10, 0);
    }
}
