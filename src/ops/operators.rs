//! `core::ops` operator overloads
//!
//! Operators are thin spellings of the default-output operations: the result
//! keeps the left-hand size, `+ - * & | ^ << >>` produce the canonical value
//! type and `/ %` produce the preferred float. The compound assignment forms
//! compute in the left-hand value type and write through reference-form
//! vectors.
//!
//! ```
//! use trueno_fixed::Vector;
//!
//! let a = Vector::new([1.0f32, 2.0, 3.0]);
//! let b = Vector::new([0.5f32, 0.5]);
//! assert_eq!(a * b, Vector::new([0.5, 1.0, 0.0]));
//! assert_eq!(&a - 1.0f32, Vector::new([0.0, 1.0, 2.0]));
//! assert_eq!(-a, Vector::new([-1.0, -2.0, -3.0]));
//!
//! let mut c = Vector::new([4u8, 8]);
//! c >>= 2u8;
//! assert_eq!(c, Vector::new([1, 2]));
//! ```
//!
//! A scalar right-hand side can be any primitive, so a bare literal such as
//! `2.0` leaves the operator impl ambiguous once a method is chained onto the
//! result. Give the literal a suffix:
//!
//! ```
//! use trueno_fixed::Vector;
//!
//! let v = Vector::new([7i32, -9]);
//! assert_eq!((v * 2i32).into_inner(), [14, -18]);
//! assert_eq!((v / 2i32).into_inner(), [3.5, -4.5]);
//! assert_eq!((&v - 1i32).into_inner(), [6, -10]);
//! ```

use num_traits::AsPrimitive;

use crate::ops::{Bitwise, Negatable};
use crate::scalar::{Element, ElementMut, PreferredFloat, Scalar};
use crate::vector::Vector;

macro_rules! scalar_operator {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $bound:ident, $Out:ty; $($t:ty),*) => {$(
        impl<E: Element, const N: usize> core::ops::$Op<$t> for Vector<E, N>
        where
            $Out: $bound,
            E::Value: AsPrimitive<$Out>,
            $t: AsPrimitive<$Out>,
        {
            type Output = Vector<$Out, N>;

            #[inline]
            fn $op(self, rhs: $t) -> Self::Output {
                self.broadcast(&rhs).$op()
            }
        }

        impl<'a, E: Element, const N: usize> core::ops::$Op<$t> for &'a Vector<E, N>
        where
            $Out: $bound,
            E::Value: AsPrimitive<$Out>,
            $t: AsPrimitive<$Out>,
        {
            type Output = Vector<$Out, N>;

            #[inline]
            fn $op(self, rhs: $t) -> Self::Output {
                self.broadcast(&rhs).$op()
            }
        }

        impl<E: ElementMut, const N: usize> core::ops::$OpAssign<$t> for Vector<E, N>
        where
            E::Value: $bound,
            $t: AsPrimitive<E::Value>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $t) {
                self.broadcast_mut(&rhs).$op()
            }
        }
    )*};
}

macro_rules! vector_operator {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $bound:ident, $Out:ty) => {
        impl<E, F, const N: usize, const M: usize> core::ops::$Op<Vector<F, M>> for Vector<E, N>
        where
            E: Element,
            F: Element,
            $Out: $bound,
            E::Value: AsPrimitive<$Out>,
            F::Value: AsPrimitive<$Out>,
        {
            type Output = Vector<$Out, N>;

            #[inline]
            fn $op(self, rhs: Vector<F, M>) -> Self::Output {
                self.broadcast(&rhs).$op()
            }
        }

        impl<'b, E, F, const N: usize, const M: usize> core::ops::$Op<&'b Vector<F, M>>
            for Vector<E, N>
        where
            E: Element,
            F: Element,
            $Out: $bound,
            E::Value: AsPrimitive<$Out>,
            F::Value: AsPrimitive<$Out>,
        {
            type Output = Vector<$Out, N>;

            #[inline]
            fn $op(self, rhs: &'b Vector<F, M>) -> Self::Output {
                self.broadcast(rhs).$op()
            }
        }

        impl<'a, E, F, const N: usize, const M: usize> core::ops::$Op<Vector<F, M>>
            for &'a Vector<E, N>
        where
            E: Element,
            F: Element,
            $Out: $bound,
            E::Value: AsPrimitive<$Out>,
            F::Value: AsPrimitive<$Out>,
        {
            type Output = Vector<$Out, N>;

            #[inline]
            fn $op(self, rhs: Vector<F, M>) -> Self::Output {
                self.broadcast(&rhs).$op()
            }
        }

        impl<'a, 'b, E, F, const N: usize, const M: usize> core::ops::$Op<&'b Vector<F, M>>
            for &'a Vector<E, N>
        where
            E: Element,
            F: Element,
            $Out: $bound,
            E::Value: AsPrimitive<$Out>,
            F::Value: AsPrimitive<$Out>,
        {
            type Output = Vector<$Out, N>;

            #[inline]
            fn $op(self, rhs: &'b Vector<F, M>) -> Self::Output {
                self.broadcast(rhs).$op()
            }
        }

        impl<E, F, const N: usize, const M: usize> core::ops::$OpAssign<Vector<F, M>>
            for Vector<E, N>
        where
            E: ElementMut,
            F: Element,
            E::Value: $bound,
            F::Value: AsPrimitive<E::Value>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector<F, M>) {
                self.broadcast_mut(&rhs).$op()
            }
        }

        impl<'b, E, F, const N: usize, const M: usize> core::ops::$OpAssign<&'b Vector<F, M>>
            for Vector<E, N>
        where
            E: ElementMut,
            F: Element,
            E::Value: $bound,
            F::Value: AsPrimitive<E::Value>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: &'b Vector<F, M>) {
                self.broadcast_mut(rhs).$op()
            }
        }

        scalar_operator!(
            $Op::$op, $OpAssign::$op_assign, $bound, $Out;
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
        );
    };
}

vector_operator!(Add::add, AddAssign::add_assign, Scalar, E::Value);
vector_operator!(Sub::sub, SubAssign::sub_assign, Scalar, E::Value);
vector_operator!(Mul::mul, MulAssign::mul_assign, Scalar, E::Value);
vector_operator!(Div::div, DivAssign::div_assign, Scalar, PreferredFloat<E>);
vector_operator!(Rem::rem, RemAssign::rem_assign, Scalar, PreferredFloat<E>);
vector_operator!(BitAnd::bitand, BitAndAssign::bitand_assign, Bitwise, E::Value);
vector_operator!(BitOr::bitor, BitOrAssign::bitor_assign, Bitwise, E::Value);
vector_operator!(BitXor::bitxor, BitXorAssign::bitxor_assign, Bitwise, E::Value);
vector_operator!(Shl::shl, ShlAssign::shl_assign, Bitwise, E::Value);
vector_operator!(Shr::shr, ShrAssign::shr_assign, Bitwise, E::Value);

impl<E: Element, const N: usize> core::ops::Neg for Vector<E, N>
where
    E::Value: Negatable,
{
    type Output = Vector<E::Value, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.unary().neg()
    }
}

impl<'a, E: Element, const N: usize> core::ops::Neg for &'a Vector<E, N>
where
    E::Value: Negatable,
{
    type Output = Vector<E::Value, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.unary().neg()
    }
}

impl<E: Element, const N: usize> core::ops::Not for Vector<E, N>
where
    E::Value: Bitwise,
{
    type Output = Vector<E::Value, N>;

    #[inline]
    fn not(self) -> Self::Output {
        self.unary().not()
    }
}

impl<'a, E: Element, const N: usize> core::ops::Not for &'a Vector<E, N>
where
    E::Value: Bitwise,
{
    type Output = Vector<E::Value, N>;

    #[inline]
    fn not(self) -> Self::Output {
        self.unary().not()
    }
}
