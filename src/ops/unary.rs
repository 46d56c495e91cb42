//! Partner-less elementwise operations
//!
//! Functors run in the source value type and convert the result into the
//! output element type. Rounding runs in the source's preferred float, which
//! is also the default output of the rounding family.

use num_traits::{AsPrimitive, Float};

use crate::dispatch::{cast, Span, Unary, UnaryAssign};
use crate::ops::{Bitwise, Negatable};
use crate::scalar::{Element, ElementMut, PreferredFloat, Scalar};
use crate::vector::Vector;

impl<'a, E: Element, const N: usize> Unary<'a, E, N> {
    /// Elementwise absolute value
    pub fn abs<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
    {
        self.map(|x| cast(x.absolute()))
    }

    /// Elementwise negation
    pub fn neg<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: Negatable + AsPrimitive<O>,
    {
        self.map(|x| cast(-x))
    }

    /// Elementwise bitwise complement
    pub fn not<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: Bitwise + AsPrimitive<O>,
    {
        self.map(|x| cast(!x))
    }

    /// Elementwise floor
    pub fn floor<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
        PreferredFloat<E>: AsPrimitive<O>,
    {
        self.map(|x| cast(x.to_float().floor()))
    }

    /// Elementwise ceiling
    pub fn ceil<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
        PreferredFloat<E>: AsPrimitive<O>,
    {
        self.map(|x| cast(x.to_float().ceil()))
    }

    /// Elementwise truncation toward zero
    pub fn trunc<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
        PreferredFloat<E>: AsPrimitive<O>,
    {
        self.map(|x| cast(x.to_float().trunc()))
    }

    /// Elementwise rounding, half away from zero
    pub fn round<O, const M: usize>(self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
        PreferredFloat<E>: AsPrimitive<O>,
    {
        self.map(|x| cast(x.to_float().round()))
    }

    /// Absolute value into `out`
    pub fn abs_into<OE: ElementMut, const M: usize>(self, out: &mut Vector<OE, M>)
    where
        E::Value: AsPrimitive<OE::Value>,
    {
        self.map_into(out, |x| cast(x.absolute()))
    }

    /// Negation into `out`
    pub fn neg_into<OE: ElementMut, const M: usize>(self, out: &mut Vector<OE, M>)
    where
        E::Value: Negatable + AsPrimitive<OE::Value>,
    {
        self.map_into(out, |x| cast(-x))
    }

    /// Floor into `out`
    pub fn floor_into<OE: ElementMut, const M: usize>(self, out: &mut Vector<OE, M>)
    where
        E::Value: AsPrimitive<OE::Value>,
        PreferredFloat<E>: AsPrimitive<OE::Value>,
    {
        self.map_into(out, |x| cast(x.to_float().floor()))
    }

    /// Ceiling into `out`
    pub fn ceil_into<OE: ElementMut, const M: usize>(self, out: &mut Vector<OE, M>)
    where
        E::Value: AsPrimitive<OE::Value>,
        PreferredFloat<E>: AsPrimitive<OE::Value>,
    {
        self.map_into(out, |x| cast(x.to_float().ceil()))
    }
}

impl<'a, E: ElementMut, const N: usize> UnaryAssign<'a, E, N> {
    /// Absolute value in place
    pub fn abs(self) {
        self.apply(Scalar::absolute)
    }

    /// Negation in place
    pub fn neg(self)
    where
        E::Value: Negatable,
    {
        self.apply(|x| -x)
    }

    /// Bitwise complement in place
    pub fn not(self)
    where
        E::Value: Bitwise,
    {
        self.apply(|x| !x)
    }

    /// Floor in place
    pub fn floor(self)
    where
        PreferredFloat<E>: AsPrimitive<E::Value>,
    {
        self.apply(|x| cast(x.to_float().floor()))
    }

    /// Ceiling in place
    pub fn ceil(self)
    where
        PreferredFloat<E>: AsPrimitive<E::Value>,
    {
        self.apply(|x| cast(x.to_float().ceil()))
    }

    /// Truncation in place
    pub fn trunc(self)
    where
        PreferredFloat<E>: AsPrimitive<E::Value>,
    {
        self.apply(|x| cast(x.to_float().trunc()))
    }

    /// Rounding in place
    pub fn round(self)
    where
        PreferredFloat<E>: AsPrimitive<E::Value>,
    {
        self.apply(|x| cast(x.to_float().round()))
    }

    /// Adds one to every active element
    pub fn increment(self) {
        self.apply(|x| x + num_traits::one())
    }

    /// Subtracts one from every active element
    pub fn decrement(self) {
        self.apply(|x| x - num_traits::one())
    }
}

impl<E: Element, const N: usize> Vector<E, N> {
    /// Elementwise absolute value
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// assert_eq!(Vector::new([-1, 2, -3]).abs(), Vector::new([1, 2, 3]));
    /// ```
    #[inline]
    pub fn abs(&self) -> Vector<E::Value, N> {
        self.unary().abs()
    }

    /// Elementwise floor in the preferred float
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// assert_eq!(Vector::new([1.5f32, -0.5]).floor(), Vector::new([1.0, -1.0]));
    /// assert_eq!(Vector::new([3u8]).floor(), Vector::new([3.0f64]));
    /// ```
    #[inline]
    pub fn floor(&self) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.unary().floor()
    }

    /// Elementwise ceiling in the preferred float
    #[inline]
    pub fn ceil(&self) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.unary().ceil()
    }

    /// Elementwise truncation in the preferred float
    #[inline]
    pub fn trunc(&self) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.unary().trunc()
    }

    /// Elementwise rounding in the preferred float
    #[inline]
    pub fn round(&self) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.unary().round()
    }
}

impl<E: ElementMut, const N: usize> Vector<E, N> {
    /// Adds one to every element
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let mut v = Vector::new([1u8, 2]);
    /// v.increment();
    /// assert_eq!(v, Vector::new([2, 3]));
    /// ```
    #[inline]
    pub fn increment(&mut self) {
        self.unary_mut().increment()
    }

    /// Subtracts one from every element
    #[inline]
    pub fn decrement(&mut self) {
        self.unary_mut().decrement()
    }

    /// Adds one to the elements of `span`
    #[inline]
    pub fn increment_span(&mut self, span: Span) {
        self.unary_mut().span(span).increment()
    }

    /// Subtracts one from the elements of `span`
    #[inline]
    pub fn decrement_span(&mut self, span: Span) {
        self.unary_mut().span(span).decrement()
    }
}
