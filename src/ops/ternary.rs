//! Three-operand operations: clamp and linear interpolation

use num_traits::AsPrimitive;

use crate::dispatch::{Broadcast3, BroadcastAssign3, Operand};
use crate::ops::{clamp_of, lerp_of};
use crate::scalar::{Element, ElementMut, PreferredFloat, Scalar};
use crate::vector::Vector;

impl<'a, E, R, S, const N: usize> Broadcast3<'a, E, R, S, N>
where
    E: Element,
    R: Operand + ?Sized,
    S: Operand + ?Sized,
{
    /// Clamps the first operand between the second (low) and third (high)
    pub fn clamp<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
        R::Value: AsPrimitive<O>,
        S::Value: AsPrimitive<O>,
    {
        self.combine3(clamp_of)
    }

    /// Interpolates from the first operand toward the second by the third
    pub fn lerp<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
        R::Value: AsPrimitive<O>,
        S::Value: AsPrimitive<O>,
    {
        self.combine3(lerp_of)
    }

    /// Clamp into `out`
    pub fn clamp_into<OE: ElementMut, const M: usize>(self, out: &mut Vector<OE, M>)
    where
        E::Value: AsPrimitive<OE::Value>,
        R::Value: AsPrimitive<OE::Value>,
        S::Value: AsPrimitive<OE::Value>,
    {
        self.combine3_into(out, clamp_of)
    }

    /// Interpolation into `out`
    pub fn lerp_into<OE: ElementMut, const M: usize>(self, out: &mut Vector<OE, M>)
    where
        E::Value: AsPrimitive<OE::Value>,
        R::Value: AsPrimitive<OE::Value>,
        S::Value: AsPrimitive<OE::Value>,
    {
        self.combine3_into(out, lerp_of)
    }
}

impl<'a, E, R, S, const N: usize> BroadcastAssign3<'a, E, R, S, N>
where
    E: ElementMut,
    R: Operand + ?Sized,
    S: Operand + ?Sized,
{
    /// Clamps in place
    pub fn clamp(self)
    where
        R::Value: AsPrimitive<E::Value>,
        S::Value: AsPrimitive<E::Value>,
    {
        self.combine3(clamp_of)
    }

    /// Interpolates in place, computing in the value type
    pub fn lerp(self)
    where
        R::Value: AsPrimitive<E::Value>,
        S::Value: AsPrimitive<E::Value>,
    {
        self.combine3(lerp_of)
    }
}

impl<E: Element, const N: usize> Vector<E, N> {
    /// Elementwise clamp between `lo` and `hi`
    ///
    /// Bounds may be vectors or scalars:
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([-5, 0, 5]);
    /// assert_eq!(v.clamp(&-1, &Vector::new([1, 1, 3])), Vector::new([-1, 0, 3]));
    /// ```
    pub fn clamp<L, H>(&self, lo: &L, hi: &H) -> Vector<E::Value, N>
    where
        L: Operand + ?Sized,
        H: Operand + ?Sized,
        L::Value: AsPrimitive<E::Value>,
        H::Value: AsPrimitive<E::Value>,
    {
        self.broadcast(lo).and(hi).clamp()
    }

    /// Linear interpolation `self + (target - self) * t` in the preferred float
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let a = Vector::new([0, 10]);
    /// let b = Vector::new([10, 20]);
    /// assert_eq!(a.lerp(&b, &0.25), Vector::new([2.5f64, 12.5]));
    /// ```
    pub fn lerp<T, P>(&self, target: &T, t: &P) -> Vector<PreferredFloat<E>, N>
    where
        T: Operand + ?Sized,
        P: Operand + ?Sized,
        E::Value: AsPrimitive<PreferredFloat<E>>,
        T::Value: AsPrimitive<PreferredFloat<E>>,
        P::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.broadcast(target).and(t).lerp()
    }
}
