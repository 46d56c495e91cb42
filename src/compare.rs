//! Predicate reduction and adaptive comparison
//!
//! Two families live here:
//!
//! - **Reductions** (`cmp_all`, `cmp_any` and the `all`/`any` builder
//!   terminals) pair `self` with any [`Operand`] exactly like an elementwise
//!   operation, honouring [`Span`](crate::Span) and
//!   [`Coverage`](crate::Coverage), and fold the per-index predicate into one
//!   `bool`. They stop at the first index that decides the outcome.
//! - **Adaptive comparisons** (`cmp_equal`, `cmp_less`, `cmp_near`, ...)
//!   change meaning with the shape of the right-hand side. Against a vector
//!   they require the comparison to hold for every element. Against a scalar
//!   they compare the *magnitude* of `self`, and against [`Squared`] they
//!   compare the squared magnitude without taking a square root.
//!
//! ```
//! use trueno_fixed::{Squared, Vector};
//!
//! let v = Vector::new([3.0f64, 4.0]);
//! assert!(v.cmp_equal(&Vector::new([3.0, 4.0])));
//! assert!(v.cmp_equal(&5.0));
//! assert!(v.cmp_less(&Squared(26.0)));
//! ```

use num_traits::AsPrimitive;

use crate::dispatch::{cast, Broadcast, Operand, Splat};
use crate::scalar::{Element, FloatScalar, PreferredFloat, Scalar};
use crate::vector::Vector;

/// Named binary comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `a == b`
    Equal,
    /// `a != b`
    NotEqual,
    /// `a < b`
    Less,
    /// `a <= b`
    LessEqual,
    /// `a > b`
    Greater,
    /// `a >= b`
    GreaterEqual,
}

impl Comparison {
    /// Evaluates the comparator on `a` and `b`
    #[inline]
    pub fn test<T: PartialOrd>(self, a: T, b: T) -> bool {
        match self {
            Comparison::Equal => a == b,
            Comparison::NotEqual => a != b,
            Comparison::Less => a < b,
            Comparison::LessEqual => a <= b,
            Comparison::Greater => a > b,
            Comparison::GreaterEqual => a >= b,
        }
    }
}

/// Tolerance for near-equality
///
/// `a` and `b` are near when they are equal, when `|a - b| <= absolute`, or
/// when `|a - b| <= relative * max(|a|, |b|)`. NaN is never near anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<F> {
    /// Bound on the absolute difference, used close to zero
    pub absolute: F,
    /// Bound on the difference relative to the larger magnitude
    pub relative: F,
}

impl<F: FloatScalar> Tolerance<F> {
    /// Tolerance with explicit bounds
    pub fn new(absolute: F, relative: F) -> Self {
        Self { absolute, relative }
    }

    /// Exact equality only
    pub fn exact() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// `true` if `a` and `b` are within tolerance
    ///
    /// ```
    /// use trueno_fixed::Tolerance;
    ///
    /// let tol = Tolerance::<f64>::default();
    /// assert!(tol.near(0.1 + 0.2, 0.3));
    /// assert!(!tol.near(1.0, 1.001));
    /// assert!(!tol.near(f64::NAN, f64::NAN));
    /// assert!(tol.near(f64::INFINITY, f64::INFINITY));
    /// assert!(!tol.near(f64::INFINITY, 1.0));
    /// ```
    pub fn near(&self, a: F, b: F) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        // An infinity only matches itself
        if !diff.is_finite() {
            return false;
        }
        diff <= self.absolute || diff <= self.relative * a.abs().max(b.abs())
    }
}

impl<F: FloatScalar> Default for Tolerance<F> {
    /// 64 machine epsilons, absolute and relative
    fn default() -> Self {
        let two = F::one() + F::one();
        let bound = F::epsilon() * two.powi(6);
        Self::new(bound, bound)
    }
}

/// Pre-squared scalar for comparing against the squared magnitude
///
/// ```
/// use trueno_fixed::{Squared, Vector};
///
/// let v = Vector::new([1, 2, 2]);
/// assert!(v.cmp_equal(&Squared(9)));
/// assert!(v.cmp_greater(&Squared(8.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Squared<T>(pub T);

impl<'a, E: Element, R: Operand + ?Sized, const N: usize> Broadcast<'a, E, R, N> {
    /// `true` if `pred(lhs[i], rhs[i])` holds at every visited index
    ///
    /// The right-hand value is converted to the left-hand value type. An
    /// empty range yields `true`.
    ///
    /// ```
    /// use trueno_fixed::{Span, Vector};
    ///
    /// let a = Vector::new([1, 5, 9]);
    /// let b = Vector::new([0, 6, 10]);
    /// assert!(!a.broadcast(&b).all(|x, y| x < y));
    /// assert!(a.broadcast(&b).span(Span::copy(1..3)).all(|x, y| x < y));
    /// ```
    pub fn all(self, mut pred: impl FnMut(E::Value, E::Value) -> bool) -> bool
    where
        R::Value: AsPrimitive<E::Value>,
    {
        let (lhs, rhs) = (self.lhs, self.rhs);
        self.reduction_range()
            .all(|i| pred(lhs.theoretical(i).get(), cast(rhs.element(i))))
    }

    /// `true` if `pred(lhs[i], rhs[i])` holds at some visited index
    ///
    /// An empty range yields `false`.
    pub fn any(self, mut pred: impl FnMut(E::Value, E::Value) -> bool) -> bool
    where
        R::Value: AsPrimitive<E::Value>,
    {
        let (lhs, rhs) = (self.lhs, self.rhs);
        self.reduction_range()
            .any(|i| pred(lhs.theoretical(i).get(), cast(rhs.element(i))))
    }

    /// [`all`](Self::all) with a named comparator
    #[inline]
    pub fn all_cmp(self, comparison: Comparison) -> bool
    where
        R::Value: AsPrimitive<E::Value>,
    {
        self.all(|a, b| comparison.test(a, b))
    }

    /// [`any`](Self::any) with a named comparator
    #[inline]
    pub fn any_cmp(self, comparison: Comparison) -> bool
    where
        R::Value: AsPrimitive<E::Value>,
    {
        self.any(|a, b| comparison.test(a, b))
    }

    /// `true` if every visited pair is near, compared in the preferred float
    pub fn all_near(self, tolerance: Tolerance<PreferredFloat<E>>) -> bool
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        let (lhs, rhs) = (self.lhs, self.rhs);
        self.reduction_range()
            .all(|i| tolerance.near(lhs.theoretical(i).get().to_float(), cast(rhs.element(i))))
    }

    /// `true` if some visited pair is near, compared in the preferred float
    pub fn any_near(self, tolerance: Tolerance<PreferredFloat<E>>) -> bool
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        let (lhs, rhs) = (self.lhs, self.rhs);
        self.reduction_range()
            .any(|i| tolerance.near(lhs.theoretical(i).get().to_float(), cast(rhs.element(i))))
    }
}

impl<E: Element, const N: usize> Vector<E, N> {
    /// `true` if `pred` holds for every pair, including implied zeros
    ///
    /// A scalar `rhs` is broadcast to every index. Use
    /// [`broadcast`](Self::broadcast) to restrict the range or the coverage.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([2, 4, 6]);
    /// assert!(v.cmp_all(&0, |x, _| x % 2 == 0));
    /// assert!(!v.cmp_all(&Vector::new([2, 4]), |x, y| x == y));
    /// ```
    #[inline]
    pub fn cmp_all<R: Operand + ?Sized>(&self, rhs: &R, pred: impl FnMut(E::Value, E::Value) -> bool) -> bool
    where
        R::Value: AsPrimitive<E::Value>,
    {
        self.broadcast(rhs).all(pred)
    }

    /// `true` if `pred` holds for some pair, including implied zeros
    #[inline]
    pub fn cmp_any<R: Operand + ?Sized>(&self, rhs: &R, pred: impl FnMut(E::Value, E::Value) -> bool) -> bool
    where
        R::Value: AsPrimitive<E::Value>,
    {
        self.broadcast(rhs).any(pred)
    }

    /// Every pair near within the default [`Tolerance`]
    #[inline]
    pub fn cmp_all_near<R: Operand + ?Sized>(&self, rhs: &R) -> bool
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.broadcast(rhs).all_near(Tolerance::default())
    }

    /// Some pair near within the default [`Tolerance`]
    #[inline]
    pub fn cmp_any_near<R: Operand + ?Sized>(&self, rhs: &R) -> bool
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.broadcast(rhs).any_near(Tolerance::default())
    }
}

macro_rules! named_reductions {
    ($($all:ident, $any:ident => $comparison:ident;)*) => {
        impl<E: Element, const N: usize> Vector<E, N> {
            $(
                #[doc = concat!("`cmp_all` with [`Comparison::", stringify!($comparison), "`]")]
                #[inline]
                pub fn $all<R: Operand + ?Sized>(&self, rhs: &R) -> bool
                where
                    R::Value: AsPrimitive<E::Value>,
                {
                    self.broadcast(rhs).all_cmp(Comparison::$comparison)
                }

                #[doc = concat!("`cmp_any` with [`Comparison::", stringify!($comparison), "`]")]
                #[inline]
                pub fn $any<R: Operand + ?Sized>(&self, rhs: &R) -> bool
                where
                    R::Value: AsPrimitive<E::Value>,
                {
                    self.broadcast(rhs).any_cmp(Comparison::$comparison)
                }
            )*
        }
    };
}

named_reductions! {
    cmp_all_equal, cmp_any_equal => Equal;
    cmp_all_not_equal, cmp_any_not_equal => NotEqual;
    cmp_all_less, cmp_any_less => Less;
    cmp_all_less_equal, cmp_any_less_equal => LessEqual;
    cmp_all_greater, cmp_any_greater => Greater;
    cmp_all_greater_equal, cmp_any_greater_equal => GreaterEqual;
}

/// Right-hand side of an adaptive comparison against `Vector<E, N>`
///
/// The implementation decides what is compared: vectors compare
/// elementwise and require every element to pass, scalars compare against
/// the magnitude, [`Squared`] against the squared magnitude.
pub trait Comparand<E: Element, const N: usize> {
    /// Applies `comparison` with `lhs` on the left
    fn compare(&self, lhs: &Vector<E, N>, comparison: Comparison) -> bool;

    /// Near-equality with `lhs` under `tolerance`
    fn near(&self, lhs: &Vector<E, N>, tolerance: &Tolerance<PreferredFloat<E>>) -> bool;
}

impl<E, F, const N: usize, const M: usize> Comparand<E, N> for Vector<F, M>
where
    E: Element,
    F: Element,
    F::Value: AsPrimitive<E::Value> + AsPrimitive<PreferredFloat<E>>,
{
    fn compare(&self, lhs: &Vector<E, N>, comparison: Comparison) -> bool {
        lhs.broadcast(self).all_cmp(comparison)
    }

    fn near(&self, lhs: &Vector<E, N>, tolerance: &Tolerance<PreferredFloat<E>>) -> bool {
        lhs.broadcast(self).all_near(*tolerance)
    }
}

impl<E, T, const N: usize> Comparand<E, N> for Splat<T>
where
    E: Element,
    T: Scalar + AsPrimitive<PreferredFloat<E>>,
{
    fn compare(&self, lhs: &Vector<E, N>, comparison: Comparison) -> bool {
        comparison.test(lhs.magnitude(), cast(self.0))
    }

    fn near(&self, lhs: &Vector<E, N>, tolerance: &Tolerance<PreferredFloat<E>>) -> bool {
        tolerance.near(lhs.magnitude(), cast(self.0))
    }
}

impl<E, T, const N: usize> Comparand<E, N> for Squared<T>
where
    E: Element,
    T: Scalar + AsPrimitive<PreferredFloat<E>>,
{
    fn compare(&self, lhs: &Vector<E, N>, comparison: Comparison) -> bool {
        comparison.test(lhs.square_magnitude_float(0..N), cast(self.0))
    }

    fn near(&self, lhs: &Vector<E, N>, tolerance: &Tolerance<PreferredFloat<E>>) -> bool {
        tolerance.near(lhs.square_magnitude_float(0..N), cast(self.0))
    }
}

macro_rules! magnitude_comparand {
    ($($t:ty),* $(,)?) => {$(
        impl<E: Element, const N: usize> Comparand<E, N> for $t
        where
            $t: AsPrimitive<PreferredFloat<E>>,
        {
            #[inline]
            fn compare(&self, lhs: &Vector<E, N>, comparison: Comparison) -> bool {
                Splat(*self).compare(lhs, comparison)
            }

            #[inline]
            fn near(&self, lhs: &Vector<E, N>, tolerance: &Tolerance<PreferredFloat<E>>) -> bool {
                Splat(*self).near(lhs, tolerance)
            }
        }
    )*};
}

magnitude_comparand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! adaptive_comparisons {
    ($($(#[$meta:meta])* $name:ident => $comparison:ident;)*) => {
        impl<E: Element, const N: usize> Vector<E, N> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $name<C: Comparand<E, N> + ?Sized>(&self, rhs: &C) -> bool {
                    rhs.compare(self, Comparison::$comparison)
                }
            )*

            /// Near-equality within the default [`Tolerance`]
            ///
            /// ```
            /// use trueno_fixed::Vector;
            ///
            /// let v = Vector::new([0.1f64 + 0.2, 0.0]);
            /// assert!(v.cmp_near(&Vector::new([0.3, 0.0])));
            /// assert!(v.cmp_near(&0.3));
            /// ```
            #[inline]
            pub fn cmp_near<C: Comparand<E, N> + ?Sized>(&self, rhs: &C) -> bool {
                rhs.near(self, &Tolerance::default())
            }

            /// Near-equality within `tolerance`
            #[inline]
            pub fn cmp_near_with<C: Comparand<E, N> + ?Sized>(
                &self,
                rhs: &C,
                tolerance: Tolerance<PreferredFloat<E>>,
            ) -> bool {
                rhs.near(self, &tolerance)
            }
        }
    };
}

adaptive_comparisons! {
    /// Equal elementwise, or magnitude equal to a scalar
    cmp_equal => Equal;
    /// Every element differs, or magnitude differs from a scalar
    cmp_not_equal => NotEqual;
    /// Less elementwise, or magnitude less than a scalar
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([3, 4]);
    /// assert!(v.cmp_less(&Vector::new([4, 5])));
    /// assert!(!v.cmp_less(&5));
    /// assert!(v.cmp_less(&5.5));
    /// ```
    cmp_less => Less;
    /// Less or equal elementwise, or against the magnitude
    cmp_less_equal => LessEqual;
    /// Greater elementwise, or against the magnitude
    cmp_greater => Greater;
    /// Greater or equal elementwise, or against the magnitude
    cmp_greater_equal => GreaterEqual;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Coverage, Span};
    use proptest::prelude::*;

    #[test]
    fn test_comparison_table() {
        let cases = [
            (Comparison::Equal, [false, true, false]),
            (Comparison::NotEqual, [true, false, true]),
            (Comparison::Less, [true, false, false]),
            (Comparison::LessEqual, [true, true, false]),
            (Comparison::Greater, [false, false, true]),
            (Comparison::GreaterEqual, [false, true, true]),
        ];
        for (comparison, expected) in cases {
            let got = [comparison.test(1, 2), comparison.test(2, 2), comparison.test(3, 2)];
            assert_eq!(got, expected, "{comparison:?}");
        }
    }

    #[test]
    fn test_tolerance_rule() {
        let tol = Tolerance::new(1e-3f64, 1e-2);
        assert!(tol.near(0.0, 0.0009));
        assert!(!tol.near(0.0, 0.002));
        assert!(tol.near(1000.0, 1009.0));
        assert!(!tol.near(1000.0, 1011.0));
        assert!(tol.near(f64::INFINITY, f64::INFINITY));
        assert!(!Tolerance::<f32>::exact().near(1.0, 1.0 + f32::EPSILON));
    }

    #[test]
    fn test_reduction_implied_zero_vs_contained_only() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([1, 2]);
        assert!(!a.cmp_all_equal(&b));
        assert!(a.broadcast(&b).coverage(Coverage::ContainedOnly).all_cmp(Comparison::Equal));
        assert!(a.cmp_any_not_equal(&b));
    }

    #[test]
    fn test_reduction_longer_rhs_sees_implied_zeros() {
        let a = Vector::new([1.0f32]);
        let b = Vector::new([1.0f32, 0.0, 0.0]);
        assert!(a.cmp_all_equal(&b));
        assert!(!a.cmp_all_equal(&Vector::new([1.0f32, 0.5])));
    }

    #[test]
    fn test_reduction_span() {
        let a = Vector::new([0, 5, 5, 0]);
        assert!(a.broadcast(&5).span(Span::copy(1..3)).all_cmp(Comparison::Equal));
        assert!(!a.broadcast(&5).span(Span::copy(2..4)).all_cmp(Comparison::Equal));
    }

    #[test]
    fn test_empty_range_identities() {
        let a = Vector::new([1, 2]);
        assert!(a.broadcast(&9).span(Span::copy(1..1)).all(|_, _| false));
        assert!(!a.broadcast(&9).span(Span::copy(1..1)).any(|_, _| true));
    }

    #[test]
    fn test_short_circuit() {
        let a = Vector::new([1, 2, 3, 4]);
        let mut calls = 0;
        assert!(!a.cmp_all(&0, |x, _| {
            calls += 1;
            x < 2
        }));
        assert_eq!(calls, 2);

        calls = 0;
        assert!(a.cmp_any(&0, |x, _| {
            calls += 1;
            x == 1
        }));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_scalar_reduction_is_elementwise() {
        let v = Vector::new([3.0f32, 4.0]);
        assert!(v.cmp_all_less(&5.0));
        assert!(!v.cmp_equal(&Vector::new([5.0f32, 5.0])));
        assert!(v.cmp_equal(&5.0));
    }

    #[test]
    fn test_adaptive_against_magnitude() {
        let v = Vector::new([3u8, 4]);
        assert!(v.cmp_equal(&5));
        assert!(v.cmp_less_equal(&5.0f32));
        assert!(v.cmp_greater(&4.9));
        assert!(v.cmp_greater_equal(&Splat(5u64)));
        assert!(v.cmp_not_equal(&6));
    }

    #[test]
    fn test_adaptive_against_squared() {
        let v = Vector::new([1.0f64, 1.0]);
        assert!(v.cmp_equal(&Squared(2.0)));
        assert!(v.cmp_near(&Squared(2.0 + 1e-15)));
        assert!(v.cmp_less(&Squared(3)));
    }

    #[test]
    fn test_adaptive_not_equal_needs_every_element() {
        let v = Vector::new([1, 2, 3]);
        assert!(!v.cmp_not_equal(&Vector::new([1, 0, 0])));
        assert!(v.cmp_not_equal(&Vector::new([0, 0, 0])));
    }

    #[test]
    fn test_infinity_is_only_near_itself() {
        let tol = Tolerance::<f64>::default();
        let loose = Tolerance::new(1e300f64, 1.0);
        for t in [tol, loose] {
            assert!(t.near(f64::INFINITY, f64::INFINITY));
            assert!(t.near(f64::NEG_INFINITY, f64::NEG_INFINITY));
            assert!(!t.near(f64::INFINITY, 1.0));
            assert!(!t.near(-1.0, f64::NEG_INFINITY));
            assert!(!t.near(f64::INFINITY, f64::NEG_INFINITY));
        }
        let v = Vector::new([f64::INFINITY, 0.0]);
        assert!(!v.cmp_near(&Vector::new([1.0f64, 0.0])));
        assert!(v.cmp_near(&Vector::new([f64::INFINITY, 0.0])));
        assert!(!Vector::new([f32::INFINITY]).cmp_near(&1.0f32));
    }

    #[test]
    fn test_near_vectors_mixed_types() {
        let v = Vector::new([1u16, 2]);
        assert!(v.cmp_near(&Vector::new([1.0f64, 2.0 + 1e-15])));
        assert!(!v.cmp_near(&Vector::new([1.0f64, 2.1])));
        assert!(v.cmp_near_with(&Vector::new([1.0f64, 2.1]), Tolerance::new(0.2, 0.0)));
        assert!(v.cmp_any_near(&Vector::new([9.0f32, 2.0])));
    }

    #[test]
    fn test_reference_form_lhs() {
        let (x, y) = (3.0f32, 4.0f32);
        let r = Vector::new([&x, &y]);
        assert!(r.cmp_equal(&5.0));
        assert!(r.cmp_all_equal(&Vector::new([3.0f32, 4.0])));
    }

    proptest! {
        #[test]
        fn prop_equal_is_reflexive(a in prop::array::uniform4(-1e6f64..1e6)) {
            let v = Vector::new(a);
            prop_assert!(v.cmp_equal(&v));
            prop_assert!(v.cmp_near(&v));
            prop_assert!(!v.cmp_any_not_equal(&v));
        }

        #[test]
        fn prop_magnitude_and_squared_agree(a in prop::array::uniform3(-1e3f64..1e3)) {
            let v = Vector::new(a);
            let m = v.magnitude();
            prop_assert!(v.cmp_near(&m));
            prop_assert!(v.cmp_near(&Squared(m * m)));
        }

        #[test]
        fn prop_any_is_not_all_of_negation(a in prop::array::uniform3(any::<i32>()), k in any::<i32>()) {
            let v = Vector::new(a);
            prop_assert_eq!(v.cmp_any_less(&k), !v.cmp_all_greater_equal(&k));
        }
    }
}
