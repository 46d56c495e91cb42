//! Numeric strategies for the continuous vector-math algorithms
//!
//! Magnitude, normalization, angles and distances all need a square root, and
//! angles need an arccosine. Both come from a [`Numerics`] implementation
//! selected by type parameter, so one formula serves every strategy.
//!
//! # Backends
//!
//! - [`Runtime`]: platform math through `num_traits::Float` (default)
//! - [`Portable`]: deterministic Newton–Raphson square root and a series
//!   arccosine built only from `+ - * /`, bit-reproducible across targets
//!
//! Both strategies agree to within a few ulps on finite input and return NaN
//! for negative square-root arguments and arccosine arguments outside `[-1, 1]`.

use crate::scalar::FloatScalar;

pub mod portable;
pub mod runtime;

pub use portable::Portable;
pub use runtime::Runtime;

/// Square root and arccosine provider
///
/// Implementations must be interchangeable: for the same input they compute
/// the same mathematical function and may differ only in rounding.
pub trait Numerics {
    /// Human-readable strategy name
    const NAME: &'static str;

    /// Square root; NaN for negative input
    fn sqrt<F: FloatScalar>(x: F) -> F;

    /// Arccosine in radians; NaN outside `[-1, 1]`
    fn acos<F: FloatScalar>(x: F) -> F;

    /// Reciprocal square root
    #[inline]
    fn rsqrt<F: FloatScalar>(x: F) -> F {
        F::one() / Self::sqrt(x)
    }
}
