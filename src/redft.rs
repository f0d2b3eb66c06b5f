//! Unnormalized discrete cosine transforms, types 1 to 4.
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

/// Which cosine-transform boundary convention to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RedftKind {
    Redft00,
    Redft10,
    Redft01,
    Redft11,
}

/// Fixed-size state for one unnormalized DCT. The cosine arguments of all
/// four types live on a common cycle of period `m`, so a single precomputed
/// \\(\omega\\) table indexed modulo `m` serves every output element:
///
/// * type 1: \\( Y_k = X_0 + (-1)^k X_{n-1}
///   + 2 \sum_{j=1}^{n-2} X_j \cos(\pi j k / (n-1)) \\), `m = 2(n-1)`
/// * type 2: \\( Y_k = 2 \sum_{j=0}^{n-1} X_j \cos(\pi (2j+1) k / 2n) \\), `m = 4n`
/// * type 3: \\( Y_k = X_0 + 2 \sum_{j=1}^{n-1} X_j \cos(\pi j (2k+1) / 2n) \\), `m = 4n`
/// * type 4: \\( Y_k = 2 \sum_{j=0}^{n-1} X_j \cos(\pi (2j+1)(2k+1) / 4n) \\), `m = 8n`
#[derive(Debug)]
pub(crate) struct Redft<T> {
    kind: RedftKind,
    len: usize,
    cycle: usize,
    omega: Vec<Complex<T>>,
}

impl<T: Float + FloatConst + NumAssign> Redft<T> {
    pub fn new(kind: RedftKind, len: usize) -> Self {
        if len == 0 || (kind == RedftKind::Redft00 && len < 2) {
            panic!("invalid length (len: {})", len)
        }
        let cycle = match kind {
            RedftKind::Redft00 => (len - 1) << 1,
            RedftKind::Redft10 | RedftKind::Redft01 => len << 2,
            RedftKind::Redft11 => len << 3,
        };
        Self {
            kind,
            len,
            cycle,
            omega: precompute_utils::calc_omega(cycle),
        }
    }

    #[inline]
    fn cos(&self, index: usize) -> T {
        self.omega[index % self.cycle].re
    }

    pub fn convert(&self, source: &[T], scaler: T) -> Vec<T> {
        if source.len() != self.len {
            panic!(
                "invalid length (source: {}, dct.len: {})",
                source.len(),
                self.len
            )
        }

        let n = self.len;
        let two: T = cast(2.0).unwrap();
        (0..n)
            .map(|k| {
                let acc = match self.kind {
                    RedftKind::Redft00 => {
                        let tail = if k & 1 == 0 {
                            source[n - 1]
                        } else {
                            -source[n - 1]
                        };
                        (1..n - 1).fold(source[0] + tail, |x, j| {
                            x + two * source[j] * self.cos(j * k)
                        })
                    }
                    RedftKind::Redft10 => (0..n).fold(zero(), |x, j| {
                        x + two * source[j] * self.cos((2 * j + 1) * k)
                    }),
                    RedftKind::Redft01 => (1..n).fold(source[0], |x, j| {
                        x + two * source[j] * self.cos(j * (2 * k + 1))
                    }),
                    RedftKind::Redft11 => (0..n).fold(zero(), |x, j| {
                        x + two * source[j] * self.cos((2 * j + 1) * (2 * k + 1))
                    }),
                };
                acc * scaler
            })
            .collect()
    }
}
