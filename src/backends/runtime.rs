//! Platform math backend
//!
//! Delegates to the `num_traits::Float` implementations, which lower to
//! hardware square-root instructions and the platform libm.

use super::Numerics;
use crate::scalar::FloatScalar;

/// Runtime-optimized strategy (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Runtime;

impl Numerics for Runtime {
    const NAME: &'static str = "runtime";

    #[inline]
    fn sqrt<F: FloatScalar>(x: F) -> F {
        x.sqrt()
    }

    #[inline]
    fn acos<F: FloatScalar>(x: F) -> F {
        x.acos()
    }
}
