//! Transform descriptors: immutable specifications of a transform kind plus
//! an optional output normalization.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::plan::Plan;
use num_complex::Complex;
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;
use std::marker::PhantomData;

/// The engine-level transform selected by a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Forward complex DFT, kernel \\(e^{-2 \pi i j k / n}\\).
    Dft,
    /// Backward complex DFT, conjugate kernel, unscaled.
    Idft,
    /// Real input to the non-redundant half spectrum.
    DftR2C,
    /// Half spectrum back to the real signal.
    DftC2R,
    /// DCT-I (REDFT00).
    Dct1,
    /// DCT-II (REDFT10).
    Dct2,
    /// DCT-III (REDFT01).
    Dct3,
    /// DCT-IV (REDFT11).
    Dct4,
    /// DST-I (RODFT00).
    Dst1,
    /// DST-II (RODFT10).
    Dst2,
    /// DST-III (RODFT01).
    Dst3,
    /// DST-IV (RODFT11).
    Dst4,
}

/// A descriptor of a discrete transform from `I` elements to `O` elements
/// over the scalar type `T`.
///
/// Descriptors are plain values: constructing one performs no computation,
/// and they may be shared and copied freely. The `normalization` field maps
/// the logical transform size to a scalar multiplied into every output
/// element; replacing it (never mutating in place) is how the invertible
/// variants are derived from the unnormalized ones.
///
/// # Example
///
/// ```rust
/// use invfft::invertible;
/// use num_complex::Complex;
///
/// let input = [Complex::new(2.0, 0.0), Complex::new(1.0, 1.0),
///              Complex::new(0.0, 3.0), Complex::new(2.0, 4.0)];
///
/// let spectrum = invertible::dft::<f64>().run(&input);
/// let recovered = invertible::idft::<f64>().run(&spectrum);
/// assert!((input[2] - recovered[2]).norm() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transform<T, I, O> {
    kind: TransformKind,
    normalization: Option<fn(usize) -> T>,
    marker: PhantomData<fn(&[I]) -> Vec<O>>,
}

/// Complex-to-complex descriptor.
pub type ComplexToComplex<T> = Transform<T, Complex<T>, Complex<T>>;
/// Real-to-complex descriptor.
pub type RealToComplex<T> = Transform<T, T, Complex<T>>;
/// Complex-to-real descriptor.
pub type ComplexToReal<T> = Transform<T, Complex<T>, T>;
/// Real-to-real descriptor.
pub type RealToReal<T> = Transform<T, T, T>;

impl<T: Float + FloatConst + NumAssign, I, O> Transform<T, I, O> {
    pub(crate) fn new(kind: TransformKind) -> Self {
        Self {
            kind,
            normalization: None,
            marker: PhantomData,
        }
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// The size-to-scalar multiplier formula, if any.
    pub fn normalization(&self) -> Option<fn(usize) -> T> {
        self.normalization
    }

    /// Returns a copy of this descriptor with only the normalization
    /// replaced. The original is left untouched.
    #[must_use]
    pub fn with_normalization(self, normalization: fn(usize) -> T) -> Self {
        Self {
            normalization: Some(normalization),
            ..self
        }
    }

    /// Physical input length for logical size `n`.
    pub fn input_len(&self, n: usize) -> usize {
        match self.kind {
            TransformKind::DftC2R => n / 2 + 1,
            _ => n,
        }
    }

    /// Physical output length for logical size `n`.
    pub fn output_len(&self, n: usize) -> usize {
        match self.kind {
            TransformKind::DftR2C => n / 2 + 1,
            _ => n,
        }
    }

    fn logical_len(&self, source_len: usize) -> usize {
        match self.kind {
            TransformKind::DftC2R => (source_len.max(1) - 1) << 1,
            _ => source_len,
        }
    }

    /// Build a size-specialized, reusable plan for logical size `n`.
    pub fn plan(&self, n: usize) -> Plan<T, I, O> {
        Plan::new(self.kind, n, self.normalization)
    }
}

impl<T: Float + FloatConst + NumAssign> ComplexToComplex<T> {
    /// Plan for the input's logical size and execute in one call.
    pub fn run(&self, source: &[Complex<T>]) -> Vec<Complex<T>> {
        self.plan(self.logical_len(source.len())).execute(source)
    }
}

impl<T: Float + FloatConst + NumAssign> RealToComplex<T> {
    /// Plan for the input's logical size and execute in one call.
    pub fn run(&self, source: &[T]) -> Vec<Complex<T>> {
        self.plan(self.logical_len(source.len())).execute(source)
    }
}

impl<T: Float + FloatConst + NumAssign> ComplexToReal<T> {
    /// Plan for the input's logical size and execute in one call. The
    /// logical size is taken as `2 * (len - 1)`, the even-length convention
    /// of the half-spectrum layout.
    pub fn run(&self, source: &[Complex<T>]) -> Vec<T> {
        self.plan(self.logical_len(source.len())).execute(source)
    }
}

impl<T: Float + FloatConst + NumAssign> RealToReal<T> {
    /// Plan for the input's logical size and execute in one call.
    pub fn run(&self, source: &[T]) -> Vec<T> {
        self.plan(self.logical_len(source.len())).execute(source)
    }
}
