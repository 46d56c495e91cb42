//! Binary elementwise operations
//!
//! Every operation is generated for three receivers: the [`Broadcast`]
//! builder (`name::<O, M>()` and `name_into(&mut out)`), the
//! [`BroadcastAssign`] builder (`name()` in place), and [`Vector`] itself with
//! default output `<Canonical, N>` (`<PreferredFloat, N>` for division and
//! remainder).

use num_traits::AsPrimitive;

use crate::dispatch::{Broadcast, BroadcastAssign, Operand};
use crate::ops::{max_of, min_of, Bitwise};
use crate::scalar::{Element, ElementMut, PreferredFloat, Scalar};
use crate::vector::Vector;

macro_rules! binary_operations {
    ($(
        $(#[$meta:meta])*
        $name:ident, $into:ident: $bound:ident => |$a:ident, $b:ident| $body:expr;
    )*) => {
        impl<'a, E: Element, R: Operand + ?Sized, const N: usize> Broadcast<'a, E, R, N> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $name<O, const M: usize>(self) -> Vector<O, M>
                where
                    O: $bound,
                    E::Value: AsPrimitive<O>,
                    R::Value: AsPrimitive<O>,
                {
                    self.combine(|$a: O, $b: O| $body)
                }

                #[doc = concat!("Like [`", stringify!($name), "`](Self::", stringify!($name), "), writing into `out`")]
                #[inline]
                pub fn $into<OE, const M: usize>(self, out: &mut Vector<OE, M>)
                where
                    OE: ElementMut,
                    OE::Value: $bound,
                    E::Value: AsPrimitive<OE::Value>,
                    R::Value: AsPrimitive<OE::Value>,
                {
                    self.combine_into(out, |$a: OE::Value, $b: OE::Value| $body)
                }
            )*
        }

        impl<'a, E: ElementMut, R: Operand + ?Sized, const N: usize> BroadcastAssign<'a, E, R, N> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $name(self)
                where
                    E::Value: $bound,
                    R::Value: AsPrimitive<E::Value>,
                {
                    self.combine(|$a: E::Value, $b: E::Value| $body)
                }
            )*
        }
    };
}

binary_operations! {
    /// Elementwise `a + b`
    add, add_into: Scalar => |a, b| a + b;
    /// Elementwise `a - b`
    sub, sub_into: Scalar => |a, b| a - b;
    /// Elementwise `a * b`
    mul, mul_into: Scalar => |a, b| a * b;
    /// Elementwise `a / b`
    ///
    /// Integer outputs panic on a zero divisor.
    div, div_into: Scalar => |a, b| a / b;
    /// Elementwise `a % b`
    ///
    /// Integer outputs panic on a zero divisor.
    rem, rem_into: Scalar => |a, b| a % b;
    /// Elementwise `a & b`
    bitand, bitand_into: Bitwise => |a, b| a & b;
    /// Elementwise `a | b`
    bitor, bitor_into: Bitwise => |a, b| a | b;
    /// Elementwise `a ^ b`
    bitxor, bitxor_into: Bitwise => |a, b| a ^ b;
    /// Elementwise `a << b`
    shl, shl_into: Bitwise => |a, b| a << b;
    /// Elementwise `a >> b`
    shr, shr_into: Bitwise => |a, b| a >> b;
    /// Elementwise minimum
    min, min_into: Scalar => |a, b| min_of(a, b);
    /// Elementwise maximum
    max, max_into: Scalar => |a, b| max_of(a, b);
    /// Raises every element to at least `b`
    clamp_min, clamp_min_into: Scalar => |a, b| max_of(a, b);
    /// Lowers every element to at most `b`
    clamp_max, clamp_max_into: Scalar => |a, b| min_of(a, b);
}

macro_rules! default_binary {
    ($($(#[$meta:meta])* $name:ident: $bound:ident;)*) => {
        impl<E: Element, const N: usize> Vector<E, N> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $name<R: Operand + ?Sized>(&self, rhs: &R) -> Vector<E::Value, N>
                where
                    E::Value: $bound,
                    R::Value: AsPrimitive<E::Value>,
                {
                    self.broadcast(rhs).$name()
                }
            )*
        }
    };
}

default_binary! {
    /// Elementwise sum
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let a = Vector::new([1, 2, 3]);
    /// assert_eq!(a.add(&Vector::new([1, 1])), Vector::new([2, 3, 3]));
    /// assert_eq!(a.add(&10), Vector::new([11, 12, 13]));
    /// ```
    add: Scalar;
    /// Elementwise difference
    sub: Scalar;
    /// Elementwise product
    mul: Scalar;
    /// Elementwise bitwise and
    bitand: Bitwise;
    /// Elementwise bitwise or
    bitor: Bitwise;
    /// Elementwise bitwise xor
    bitxor: Bitwise;
    /// Elementwise left shift
    shl: Bitwise;
    /// Elementwise right shift
    shr: Bitwise;
    /// Elementwise minimum
    min: Scalar;
    /// Elementwise maximum
    max: Scalar;
    /// Raises every element to at least the partner's
    clamp_min: Scalar;
    /// Lowers every element to at most the partner's
    clamp_max: Scalar;
}

impl<E: Element, const N: usize> Vector<E, N> {
    /// Elementwise quotient in the preferred float
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([1, 3]);
    /// assert_eq!(v.div(&2), Vector::new([0.5f64, 1.5]));
    /// ```
    #[inline]
    pub fn div<R: Operand + ?Sized>(&self, rhs: &R) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.broadcast(rhs).div()
    }

    /// Elementwise remainder in the preferred float
    #[inline]
    pub fn rem<R: Operand + ?Sized>(&self, rhs: &R) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.broadcast(rhs).rem()
    }
}
