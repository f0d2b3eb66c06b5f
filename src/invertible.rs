//! Normalized transform descriptors whose forward/backward pairs are exact
//! inverses up to floating-point error.
//!
//! Each inverse here is the matching [`unnormalized`](crate::unnormalized)
//! descriptor with the missing scalar attached by
//! [`with_normalization`](crate::Transform::with_normalization):
//!
//! | inverse | engine call | multiplier |
//! |---|---|---|
//! | [`idft`] | backward DFT | 1/n |
//! | [`dft_c2r`] | complex-to-real DFT | 1/n (n = output length) |
//! | [`idct1`] | DCT-I | 1/(2(n-1)) |
//! | [`idct2`] | DCT-III | 1/(2n) |
//! | [`idct3`] | DCT-II | 1/(2n) |
//! | [`idct4`] | DCT-IV | 1/(2n) |
//! | [`idst1`] | DST-I | 1/(2(n+1)) |
//! | [`idst2`] | DST-III | 1/(2n) |
//! | [`idst3`] | DST-II | 1/(2n) |
//! | [`idst4`] | DST-IV | 1/(2n) |
//!
//! The type-2/type-3 cross-wiring is the classic duality: REDFT10/REDFT01
//! (and RODFT10/RODFT01) already invert each other at the engine level, so
//! only the scalar is added here.
//!
//! # Example
//!
//! ```rust
//! use invfft::invertible;
//!
//! let signal = vec![2.0f64, 0.0, 1.0, 1.0, 0.0, 3.0, 2.0, 4.0];
//! let spectrum = invertible::dct2::<f64>().run(&signal);
//! let recovered = invertible::idct2::<f64>().run(&spectrum);
//! for (x, y) in signal.iter().zip(&recovered) {
//!     assert!((x - y).abs() < 1e-10);
//! }
//! ```
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::transform::{ComplexToComplex, ComplexToReal, RealToComplex, RealToReal};
use crate::unnormalized;
use num_traits::cast;
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;

fn recip<T: Float>(n: usize) -> T {
    T::one() / cast(n).unwrap()
}

fn recip_double<T: Float>(n: usize) -> T {
    recip(n << 1)
}

fn recip_double_pred<T: Float>(n: usize) -> T {
    recip((n - 1) << 1)
}

fn recip_double_succ<T: Float>(n: usize) -> T {
    recip((n + 1) << 1)
}

/// Forward complex DFT.
pub fn dft<T: Float + FloatConst + NumAssign>() -> ComplexToComplex<T> {
    unnormalized::dft()
}

/// Inverse complex DFT.
pub fn idft<T: Float + FloatConst + NumAssign>() -> ComplexToComplex<T> {
    unnormalized::idft().with_normalization(recip)
}

/// Forward real-to-complex DFT.
pub fn dft_r2c<T: Float + FloatConst + NumAssign>() -> RealToComplex<T> {
    unnormalized::dft_r2c()
}

/// Inverse of [`dft_r2c`]: half spectrum back to the real signal. The
/// normalization uses the output length.
pub fn dft_c2r<T: Float + FloatConst + NumAssign>() -> ComplexToReal<T> {
    unnormalized::dft_c2r().with_normalization(recip)
}

/// Forward DCT-I.
pub fn dct1<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dct1()
}

/// Inverse DCT-I.
pub fn idct1<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dct1().with_normalization(recip_double_pred)
}

/// Forward DCT-II.
pub fn dct2<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dct2()
}

/// Inverse DCT-II, an engine-level DCT-III call.
pub fn idct2<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dct3().with_normalization(recip_double)
}

/// Forward DCT-III.
pub fn dct3<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dct3()
}

/// Inverse DCT-III, an engine-level DCT-II call.
pub fn idct3<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dct2().with_normalization(recip_double)
}

/// Forward DCT-IV.
pub fn dct4<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dct4()
}

/// Inverse DCT-IV.
pub fn idct4<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dct4().with_normalization(recip_double)
}

/// Forward DST-I.
pub fn dst1<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dst1()
}

/// Inverse DST-I.
pub fn idst1<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dst1().with_normalization(recip_double_succ)
}

/// Forward DST-II.
pub fn dst2<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dst2()
}

/// Inverse DST-II, an engine-level DST-III call.
pub fn idst2<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dst3().with_normalization(recip_double)
}

/// Forward DST-III.
pub fn dst3<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dst3()
}

/// Inverse DST-III, an engine-level DST-II call.
pub fn idst3<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dst2().with_normalization(recip_double)
}

/// Forward DST-IV.
pub fn dst4<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dst4()
}

/// Inverse DST-IV.
pub fn idst4<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    unnormalized::dst4().with_normalization(recip_double)
}
