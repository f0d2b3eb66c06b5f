//! Real-to-complex and complex-to-real DFT packing over the complex kernel.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::cdft::Cdft;
use num_complex::Complex;
use num_traits::float::{Float, FloatConst};
use num_traits::identities::zero;
use num_traits::NumAssign;

/// Fixed-size state for the real-input forward DFT and its complex-input
/// backward counterpart. The logical size `n` is the real-domain length;
/// the spectrum holds the `n/2 + 1` non-redundant bins.
#[derive(Debug)]
pub(crate) struct Rdft<T> {
    cdft: Cdft<T>,
}

impl<T: Float + FloatConst + NumAssign> Rdft<T> {
    pub fn new(len: usize) -> Self {
        Self {
            cdft: Cdft::new(len),
        }
    }

    fn len(&self) -> usize {
        self.cdft.len()
    }

    /// Real input of length `n`, unnormalized spectrum of length `n/2 + 1`.
    pub fn forward(&self, source: &[T], scaler: T) -> Vec<Complex<T>> {
        if source.len() != self.len() {
            panic!(
                "invalid length (source: {}, rdft.len: {})",
                source.len(),
                self.len()
            )
        }

        let buffer = source
            .iter()
            .map(|&x| Complex::new(x, zero()))
            .collect::<Vec<_>>();
        let mut spectrum = self.cdft.convert(&buffer, false, scaler);
        spectrum.truncate(self.len() / 2 + 1);
        spectrum
    }

    /// Half-spectrum input of length `n/2 + 1`, unnormalized real signal of
    /// length `n`. The redundant bins are rebuilt by Hermitian symmetry.
    pub fn backward(&self, source: &[Complex<T>], scaler: T) -> Vec<T> {
        let len = self.len();
        let expected = len / 2 + 1;
        if source.len() != expected {
            panic!(
                "invalid length (source: {}, rdft spectrum len: {})",
                source.len(),
                expected
            )
        }

        let full = rebuild_hermitian(source, len);
        self.cdft
            .convert(&full, true, scaler)
            .into_iter()
            .map(|x| x.re)
            .collect()
    }
}

fn rebuild_hermitian<T: Float>(half: &[Complex<T>], len: usize) -> Vec<Complex<T>> {
    let mut full = vec![Complex::new(zero(), zero()); len];
    for (k, &value) in half.iter().enumerate().take(len) {
        full[k] = value;
    }
    for k in half.len()..len {
        full[k] = full[len - k].conj();
    }
    // real signals carry no imaginary Nyquist component
    if len & 1 == 0 && len > 0 {
        full[len / 2].im = zero();
    }
    full
}
