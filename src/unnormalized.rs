//! The twelve engine-level transform descriptors, with no output scaling
//! attached.
//!
//! Forward/backward pairs built from this module invert each other only up
//! to a size-dependent factor; the [`invertible`](crate::invertible) module
//! attaches the missing scalars.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::transform::{
    ComplexToComplex, ComplexToReal, RealToComplex, RealToReal, Transform, TransformKind,
};
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;

/// Forward complex DFT.
pub fn dft<T: Float + FloatConst + NumAssign>() -> ComplexToComplex<T> {
    Transform::new(TransformKind::Dft)
}

/// Backward complex DFT (conjugate kernel, unscaled).
pub fn idft<T: Float + FloatConst + NumAssign>() -> ComplexToComplex<T> {
    Transform::new(TransformKind::Idft)
}

/// Real signal of length `n` to its `n/2 + 1` non-redundant spectrum bins.
pub fn dft_r2c<T: Float + FloatConst + NumAssign>() -> RealToComplex<T> {
    Transform::new(TransformKind::DftR2C)
}

/// Half spectrum of length `n/2 + 1` back to the real signal of length `n`.
pub fn dft_c2r<T: Float + FloatConst + NumAssign>() -> ComplexToReal<T> {
    Transform::new(TransformKind::DftC2R)
}

/// DCT-I. Requires a logical size of at least 2.
pub fn dct1<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    Transform::new(TransformKind::Dct1)
}

/// DCT-II.
pub fn dct2<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    Transform::new(TransformKind::Dct2)
}

/// DCT-III.
pub fn dct3<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    Transform::new(TransformKind::Dct3)
}

/// DCT-IV.
pub fn dct4<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    Transform::new(TransformKind::Dct4)
}

/// DST-I.
pub fn dst1<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    Transform::new(TransformKind::Dst1)
}

/// DST-II.
pub fn dst2<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    Transform::new(TransformKind::Dst2)
}

/// DST-III.
pub fn dst3<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    Transform::new(TransformKind::Dst3)
}

/// DST-IV.
pub fn dst4<T: Float + FloatConst + NumAssign>() -> RealToReal<T> {
    Transform::new(TransformKind::Dst4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nearly_eq::assert_nearly_eq;
    use num_complex::Complex;

    #[test]
    fn constructors_select_their_engine_kind() {
        assert_eq!(dft::<f64>().kind(), TransformKind::Dft);
        assert_eq!(idft::<f64>().kind(), TransformKind::Idft);
        assert_eq!(dft_r2c::<f64>().kind(), TransformKind::DftR2C);
        assert_eq!(dft_c2r::<f64>().kind(), TransformKind::DftC2R);
        assert_eq!(dct1::<f64>().kind(), TransformKind::Dct1);
        assert_eq!(dct4::<f64>().kind(), TransformKind::Dct4);
        assert_eq!(dst1::<f64>().kind(), TransformKind::Dst1);
        assert_eq!(dst4::<f64>().kind(), TransformKind::Dst4);
    }

    #[test]
    fn no_normalization_is_attached() {
        assert!(dft::<f64>().normalization().is_none());
        assert!(idft::<f64>().normalization().is_none());
        assert!(dct2::<f64>().normalization().is_none());
        assert!(dst3::<f64>().normalization().is_none());
    }

    #[test]
    fn backward_after_forward_scales_by_n() {
        let input = [
            Complex::new(2.0, 0.0),
            Complex::new(1.0, 1.0),
            Complex::new(0.0, 3.0),
            Complex::new(2.0, 4.0),
        ];
        let roundtrip = idft::<f64>().run(&dft::<f64>().run(&input));
        let expected = input.iter().map(|&x| x * 4.0).collect::<Vec<_>>();
        assert_nearly_eq(&expected, &roundtrip);
    }
}
