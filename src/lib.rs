//! Normalized, invertible discrete transforms in pure Rust.
//!
//! The crate exposes transform descriptors — immutable values pairing an
//! engine-level transform (complex DFT, real-to-complex DFT, or one of the
//! DCT/DST types 1-4) with an optional size-dependent output scalar. The
//! [`unnormalized`] module holds the raw engine descriptors; [`invertible`]
//! derives from them the forward/backward pairs whose composition is the
//! identity up to floating-point error.
//!
//! Descriptors are planned for a fixed size and executed any number of
//! times, or run in one shot:
//!
//! ```rust
//! use invfft::invertible;
//!
//! let signal = vec![1.0f64, 2.0, 0.5, -3.0];
//! let spectrum = invertible::dft_r2c::<f64>().run(&signal);
//! let recovered = invertible::dft_c2r::<f64>().run(&spectrum);
//! for (x, y) in signal.iter().zip(&recovered) {
//!     assert!((x - y).abs() < 1e-10);
//! }
//! ```
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

mod cdft;
mod plan;
mod precompute_utils;
mod rdft;
mod redft;
mod rodft;
mod transform;

pub mod invertible;
pub mod unnormalized;

#[cfg(test)]
pub(crate) mod nearly_eq;

pub use crate::plan::Plan;
pub use crate::transform::{
    ComplexToComplex, ComplexToReal, RealToComplex, RealToReal, Transform, TransformKind,
};
