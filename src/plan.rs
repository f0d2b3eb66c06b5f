//! Size-specialized, executable instances of transform descriptors.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::cdft::Cdft;
use crate::rdft::Rdft;
use crate::redft::{Redft, RedftKind};
use crate::rodft::{Rodft, RodftKind};
use crate::transform::TransformKind;
use num_complex::Complex;
use num_traits::float::{Float, FloatConst};
use num_traits::identities::one;
use num_traits::NumAssign;
use std::marker::PhantomData;

#[derive(Debug)]
enum PlanWork<T> {
    Cdft { engine: Cdft<T>, is_back: bool },
    R2c(Rdft<T>),
    C2r(Rdft<T>),
    Redft(Redft<T>),
    Rodft(Rodft<T>),
}

impl<T: Float + FloatConst + NumAssign> PlanWork<T> {
    fn new(kind: TransformKind, n: usize) -> Self {
        if n == 0 {
            panic!("invalid length (len: 0)")
        }
        match kind {
            TransformKind::Dft => PlanWork::Cdft {
                engine: Cdft::new(n),
                is_back: false,
            },
            TransformKind::Idft => PlanWork::Cdft {
                engine: Cdft::new(n),
                is_back: true,
            },
            TransformKind::DftR2C => PlanWork::R2c(Rdft::new(n)),
            TransformKind::DftC2R => PlanWork::C2r(Rdft::new(n)),
            TransformKind::Dct1 => PlanWork::Redft(Redft::new(RedftKind::Redft00, n)),
            TransformKind::Dct2 => PlanWork::Redft(Redft::new(RedftKind::Redft10, n)),
            TransformKind::Dct3 => PlanWork::Redft(Redft::new(RedftKind::Redft01, n)),
            TransformKind::Dct4 => PlanWork::Redft(Redft::new(RedftKind::Redft11, n)),
            TransformKind::Dst1 => PlanWork::Rodft(Rodft::new(RodftKind::Rodft00, n)),
            TransformKind::Dst2 => PlanWork::Rodft(Rodft::new(RodftKind::Rodft10, n)),
            TransformKind::Dst3 => PlanWork::Rodft(Rodft::new(RodftKind::Rodft01, n)),
            TransformKind::Dst4 => PlanWork::Rodft(Rodft::new(RodftKind::Rodft11, n)),
        }
    }
}

/// A plan fixes a descriptor to one logical size: the twiddle tables are
/// precomputed and the normalization formula is already resolved to its
/// scalar. Executing a plan never mutates it, so one plan can serve any
/// number of calls at that size.
#[derive(Debug)]
pub struct Plan<T, I, O> {
    kind: TransformKind,
    n: usize,
    scaler: T,
    work: PlanWork<T>,
    marker: PhantomData<fn(&[I]) -> Vec<O>>,
}

impl<T: Float + FloatConst + NumAssign, I, O> Plan<T, I, O> {
    pub(crate) fn new(
        kind: TransformKind,
        n: usize,
        normalization: Option<fn(usize) -> T>,
    ) -> Self {
        // engine state first: invalid sizes must fail before the
        // normalization formula is evaluated
        let work = PlanWork::new(kind, n);
        let scaler = normalization.map_or_else(one, |f| f(n));
        Self {
            kind,
            n,
            scaler,
            work,
            marker: PhantomData,
        }
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// The logical size this plan was built for.
    pub fn logical_len(&self) -> usize {
        self.n
    }

    /// The resolved output multiplier (1 for unnormalized descriptors).
    pub fn scaler(&self) -> T {
        self.scaler
    }
}

impl<T: Float + FloatConst + NumAssign> Plan<T, Complex<T>, Complex<T>> {
    /// Execute the planned transform; the input length must equal the
    /// logical size.
    pub fn execute(&self, source: &[Complex<T>]) -> Vec<Complex<T>> {
        match self.work {
            PlanWork::Cdft {
                ref engine,
                is_back,
            } => engine.convert(source, is_back, self.scaler),
            _ => unreachable!(),
        }
    }
}

impl<T: Float + FloatConst + NumAssign> Plan<T, T, Complex<T>> {
    /// Execute the planned transform; the input length must equal the
    /// logical size, the output holds the `n/2 + 1` non-redundant bins.
    pub fn execute(&self, source: &[T]) -> Vec<Complex<T>> {
        match self.work {
            PlanWork::R2c(ref engine) => engine.forward(source, self.scaler),
            _ => unreachable!(),
        }
    }
}

impl<T: Float + FloatConst + NumAssign> Plan<T, Complex<T>, T> {
    /// Execute the planned transform; the input length must equal
    /// `n/2 + 1` for logical size `n`.
    pub fn execute(&self, source: &[Complex<T>]) -> Vec<T> {
        match self.work {
            PlanWork::C2r(ref engine) => engine.backward(source, self.scaler),
            _ => unreachable!(),
        }
    }
}

impl<T: Float + FloatConst + NumAssign> Plan<T, T, T> {
    /// Execute the planned transform; the input length must equal the
    /// logical size.
    pub fn execute(&self, source: &[T]) -> Vec<T> {
        match self.work {
            PlanWork::Redft(ref engine) => engine.convert(source, self.scaler),
            PlanWork::Rodft(ref engine) => engine.convert(source, self.scaler),
            _ => unreachable!(),
        }
    }
}
