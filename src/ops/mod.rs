//! Arithmetic, bitwise and rounding operation set
//!
//! Each operation is the broadcast dispatcher instantiated with one element
//! functor. Four call shapes exist for every binary operation:
//!
//! | Shape | Spelling |
//! |---|---|
//! | compute-and-return, default output | `a.add(&b)` / `a + b` |
//! | compute-and-return, chosen `<O, M>` and span | `a.broadcast(&b).span(s).add::<O, M>()` |
//! | write into a caller-supplied vector | `a.broadcast(&b).add_into(&mut out)` |
//! | in place | `a.broadcast_mut(&b).add()` / `a += b` |
//!
//! Binary operands are converted into the output element type before the
//! functor runs. Unary operations run in the source value type (its preferred
//! float for rounding) and convert the result.
//!
//! Integer division or remainder by zero panics, exactly like the scalar
//! operators they wrap.

use core::ops::{BitAnd, BitOr, BitXor, Neg, Not, Shl, Shr};

use crate::scalar::Scalar;

pub mod arithmetic;
pub mod operators;
pub mod reduce;
pub mod ternary;
pub mod unary;

/// Scalars supporting the bitwise operations
pub trait Bitwise:
    Scalar
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<Output = Self>
    + Shr<Output = Self>
{
}

impl<T> Bitwise for T where
    T: Scalar
        + BitAnd<Output = T>
        + BitOr<Output = T>
        + BitXor<Output = T>
        + Not<Output = T>
        + Shl<Output = T>
        + Shr<Output = T>
{
}

/// Scalars supporting negation
pub trait Negatable: Scalar + Neg<Output = Self> {}

impl<T> Negatable for T where T: Scalar + Neg<Output = T> {}

#[inline(always)]
pub(crate) fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline(always)]
pub(crate) fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

#[inline(always)]
pub(crate) fn clamp_of<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

#[inline(always)]
pub(crate) fn lerp_of<T: Scalar>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_bitwise<T: Bitwise>() {}
    fn is_negatable<T: Negatable>() {}

    #[test]
    fn test_capabilities() {
        is_bitwise::<u8>();
        is_bitwise::<i64>();
        is_negatable::<i32>();
        is_negatable::<f32>();
    }

    #[test]
    fn test_helpers() {
        assert_eq!(min_of(3, 2), 2);
        assert_eq!(max_of(3.0, 4.0), 4.0);
        assert_eq!(clamp_of(5, 0, 3), 3);
        assert_eq!(clamp_of(-1, 0, 3), 0);
        assert_eq!(clamp_of(2, 0, 3), 2);
        assert_eq!(lerp_of(2.0f32, 4.0, 0.25), 2.5);
    }
}
