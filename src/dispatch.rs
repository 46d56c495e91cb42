//! Broadcast dispatcher
//!
//! Every elementwise operation funnels through this module. An operation
//! pairs a left-hand [`Vector`] with a partner [`Operand`], either another
//! vector of any size or a scalar, and writes an output vector whose size and
//! element type are chosen independently of both inputs.
//!
//! For output index `i` inside the active range the element functor receives
//! `lhs.theoretical(i)` and `rhs.element(i)`, both converted into the output
//! element type. Vector partners fall back to implied zeros past their own
//! size; scalar partners are broadcast to every index.
//!
//! The active range is controlled by two policies:
//!
//! - [`Span`] restricts the operation to a sub-range and picks what happens to
//!   the cells outside it (copied from the left-hand source, or reset to the
//!   canonical default).
//! - [`Coverage`] decides whether indices contained in only one operand take
//!   part, or whether iteration stops at the smaller operand.
//!
//! ```
//! use trueno_fixed::{Span, Vector};
//!
//! let a = Vector::new([1, 2, 3, 4]);
//! let b = Vector::new([10, 20]);
//!
//! // Implied zeros extend `b`
//! assert_eq!(a.add(&b), Vector::new([11, 22, 3, 4]));
//!
//! // Operate on 1..3 only, reset the rest
//! let out: Vector<f32, 4> = a.broadcast(&b).span(Span::fresh(1..3)).add();
//! assert_eq!(out, Vector::new([0.0, 22.0, 3.0, 0.0]));
//! ```

use core::fmt;
use core::ops::Range;

use num_traits::AsPrimitive;

use crate::scalar::{Element, ElementMut, Scalar};
use crate::vector::Vector;

/// Converts between element types with `as` semantics
#[inline(always)]
pub(crate) fn cast<A, B>(value: A) -> B
where
    A: AsPrimitive<B>,
    B: Copy + 'static,
{
    value.as_()
}

/// Right-hand side of an elementwise operation
///
/// Vector-like operands report their size through [`extent`](Self::extent)
/// and yield implied zeros past it; scalar-like operands report `None` and
/// yield the same value for every index.
pub trait Operand {
    /// Element type produced for each index
    type Value: Scalar;

    /// Number of contained cells, `None` for scalar-like operands
    fn extent(&self) -> Option<usize>;

    /// Value at `index`, with implied zeros past the extent
    fn element(&self, index: usize) -> Self::Value;

    /// `true` for vector-like operands
    #[inline]
    fn is_vector(&self) -> bool {
        self.extent().is_some()
    }
}

impl<E: Element, const N: usize> Operand for Vector<E, N> {
    type Value = E::Value;

    #[inline]
    fn extent(&self) -> Option<usize> {
        Some(N)
    }

    #[inline]
    fn element(&self, index: usize) -> E::Value {
        self.theoretical(index).get()
    }
}

/// Broadcasts any [`Scalar`] to every index
///
/// Primitive scalars are operands on their own; `Splat` lets custom scalar
/// types take part as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Splat<T>(pub T);

impl<T: Scalar> Operand for Splat<T> {
    type Value = T;

    #[inline]
    fn extent(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn element(&self, _index: usize) -> T {
        self.0
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),* $(,)?) => {$(
        impl Operand for $t {
            type Value = $t;

            #[inline]
            fn extent(&self) -> Option<usize> {
                None
            }

            #[inline]
            fn element(&self, _index: usize) -> $t {
                *self
            }
        }
    )*};
}

impl_scalar_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Sub-range policy of an elementwise operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Span {
    /// Operate on the entire output
    #[default]
    Full,
    /// Operate inside the range, copy the left-hand source outside it
    Copy(Range<usize>),
    /// Operate inside the range, leave canonical defaults outside it
    Fresh(Range<usize>),
}

impl Span {
    /// Range with copy-through outside
    #[inline]
    pub fn copy(range: Range<usize>) -> Self {
        Span::Copy(range)
    }

    /// Range with default-fill outside
    #[inline]
    pub fn fresh(range: Range<usize>) -> Self {
        Span::Fresh(range)
    }

    /// Active range clipped to `0..size`
    pub fn clip(&self, size: usize) -> Range<usize> {
        match self {
            Span::Full => 0..size,
            Span::Copy(range) | Span::Fresh(range) => {
                let end = range.end.min(size);
                range.start.min(end)..end
            }
        }
    }

    /// `true` if cells outside the active range take the source's values
    #[inline]
    pub fn copies_outside(&self) -> bool {
        !matches!(self, Span::Fresh(_))
    }
}

/// Treatment of indices contained in only one operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coverage {
    /// Iterate the whole output; missing cells read as implied zeros
    #[default]
    IncludeNonContained,
    /// Stop at the smallest vector operand
    ContainedOnly,
}

impl Coverage {
    /// Exclusive upper bound on active indices
    pub(crate) fn limit(self, own: usize, partners: &[Option<usize>]) -> usize {
        match self {
            Coverage::IncludeNonContained => usize::MAX,
            Coverage::ContainedOnly => partners.iter().flatten().fold(own, |acc, &n| acc.min(n)),
        }
    }

    /// Number of indices a reduction visits
    pub(crate) fn reduction_len(self, own: usize, partners: &[Option<usize>]) -> usize {
        let sizes = partners.iter().flatten();
        match self {
            Coverage::IncludeNonContained => sizes.fold(own, |acc, &n| acc.max(n)),
            Coverage::ContainedOnly => sizes.fold(own, |acc, &n| acc.min(n)),
        }
    }
}

/// Writes `out`, calling `f` for active indices and applying the span's
/// outside policy elsewhere
pub(crate) fn drive<S, OE, const M: usize>(
    source: &S,
    span: &Span,
    limit: usize,
    out: &mut Vector<OE, M>,
    mut f: impl FnMut(usize) -> OE::Value,
) where
    S: Operand + ?Sized,
    OE: ElementMut,
    S::Value: AsPrimitive<OE::Value>,
{
    let active = span.clip(M);
    let end = active.end.min(limit);
    let copies = span.copies_outside();
    for (i, cell) in out.data.iter_mut().enumerate() {
        let value = if i >= active.start && i < end {
            f(i)
        } else if copies {
            cast(source.element(i))
        } else {
            Default::default()
        };
        *cell.value_mut() = value;
    }
}

/// In-place counterpart of [`drive`]: copy-through leaves cells untouched
pub(crate) fn drive_in_place<E, const N: usize>(
    target: &mut Vector<E, N>,
    span: &Span,
    limit: usize,
    mut f: impl FnMut(usize, E::Value) -> E::Value,
) where
    E: ElementMut,
{
    let active = span.clip(N);
    let end = active.end.min(limit);
    let copies = span.copies_outside();
    for (i, cell) in target.data.iter_mut().enumerate() {
        let slot = cell.value_mut();
        if i >= active.start && i < end {
            *slot = f(i, *slot);
        } else if !copies {
            *slot = Default::default();
        }
    }
}

/// Pending binary operation producing a new vector
#[must_use = "a broadcast does nothing until a terminal operation is called"]
pub struct Broadcast<'a, E, R: ?Sized, const N: usize> {
    pub(crate) lhs: &'a Vector<E, N>,
    pub(crate) rhs: &'a R,
    pub(crate) span: Span,
    pub(crate) coverage: Coverage,
}

/// Pending ternary operation producing a new vector
#[must_use = "a broadcast does nothing until a terminal operation is called"]
pub struct Broadcast3<'a, E, R: ?Sized, S: ?Sized, const N: usize> {
    pub(crate) lhs: &'a Vector<E, N>,
    pub(crate) second: &'a R,
    pub(crate) third: &'a S,
    pub(crate) span: Span,
    pub(crate) coverage: Coverage,
}

/// Pending binary operation assigning into its left-hand vector
#[must_use = "a broadcast does nothing until a terminal operation is called"]
pub struct BroadcastAssign<'a, E, R: ?Sized, const N: usize> {
    pub(crate) lhs: &'a mut Vector<E, N>,
    pub(crate) rhs: &'a R,
    pub(crate) span: Span,
    pub(crate) coverage: Coverage,
}

/// Pending ternary operation assigning into its left-hand vector
#[must_use = "a broadcast does nothing until a terminal operation is called"]
pub struct BroadcastAssign3<'a, E, R: ?Sized, S: ?Sized, const N: usize> {
    pub(crate) lhs: &'a mut Vector<E, N>,
    pub(crate) second: &'a R,
    pub(crate) third: &'a S,
    pub(crate) span: Span,
    pub(crate) coverage: Coverage,
}

/// Pending partner-less operation producing a new vector
#[must_use = "a broadcast does nothing until a terminal operation is called"]
pub struct Unary<'a, E, const N: usize> {
    pub(crate) source: &'a Vector<E, N>,
    pub(crate) span: Span,
}

/// Pending partner-less operation on the vector itself
#[must_use = "a broadcast does nothing until a terminal operation is called"]
pub struct UnaryAssign<'a, E, const N: usize> {
    pub(crate) target: &'a mut Vector<E, N>,
    pub(crate) span: Span,
}

impl<E: Element, R: fmt::Debug + ?Sized, const N: usize> fmt::Debug for Broadcast<'_, E, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("lhs", self.lhs)
            .field("rhs", &self.rhs)
            .field("span", &self.span)
            .field("coverage", &self.coverage)
            .finish()
    }
}

impl<E: Element, R: fmt::Debug + ?Sized, S: fmt::Debug + ?Sized, const N: usize> fmt::Debug
    for Broadcast3<'_, E, R, S, N>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast3")
            .field("lhs", self.lhs)
            .field("second", &self.second)
            .field("third", &self.third)
            .field("span", &self.span)
            .field("coverage", &self.coverage)
            .finish()
    }
}

impl<E: Element, R: fmt::Debug + ?Sized, const N: usize> fmt::Debug for BroadcastAssign<'_, E, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BroadcastAssign")
            .field("lhs", &*self.lhs)
            .field("rhs", &self.rhs)
            .field("span", &self.span)
            .field("coverage", &self.coverage)
            .finish()
    }
}

impl<E: Element, R: fmt::Debug + ?Sized, S: fmt::Debug + ?Sized, const N: usize> fmt::Debug
    for BroadcastAssign3<'_, E, R, S, N>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BroadcastAssign3")
            .field("lhs", &*self.lhs)
            .field("second", &self.second)
            .field("third", &self.third)
            .field("span", &self.span)
            .field("coverage", &self.coverage)
            .finish()
    }
}

impl<E: Element, const N: usize> fmt::Debug for Unary<'_, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unary")
            .field("source", self.source)
            .field("span", &self.span)
            .finish()
    }
}

impl<E: Element, const N: usize> fmt::Debug for UnaryAssign<'_, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryAssign")
            .field("target", &*self.target)
            .field("span", &self.span)
            .finish()
    }
}

impl<E: Element, const N: usize> Vector<E, N> {
    /// Starts a binary operation against `rhs`
    #[inline]
    pub fn broadcast<'a, R: Operand + ?Sized>(&'a self, rhs: &'a R) -> Broadcast<'a, E, R, N> {
        Broadcast {
            lhs: self,
            rhs,
            span: Span::Full,
            coverage: Coverage::IncludeNonContained,
        }
    }

    /// Starts a partner-less operation
    #[inline]
    pub fn unary(&self) -> Unary<'_, E, N> {
        Unary {
            source: self,
            span: Span::Full,
        }
    }
}

impl<E: ElementMut, const N: usize> Vector<E, N> {
    /// Starts an in-place binary operation against `rhs`
    #[inline]
    pub fn broadcast_mut<'a, R: Operand + ?Sized>(
        &'a mut self,
        rhs: &'a R,
    ) -> BroadcastAssign<'a, E, R, N> {
        BroadcastAssign {
            lhs: self,
            rhs,
            span: Span::Full,
            coverage: Coverage::IncludeNonContained,
        }
    }

    /// Starts an in-place partner-less operation
    #[inline]
    pub fn unary_mut(&mut self) -> UnaryAssign<'_, E, N> {
        UnaryAssign {
            target: self,
            span: Span::Full,
        }
    }
}

impl<'a, E: Element, R: Operand + ?Sized, const N: usize> Broadcast<'a, E, R, N> {
    /// Restricts the operation to a sub-range
    #[inline]
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Sets the non-contained index policy
    #[inline]
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Stops at the smaller operand
    #[inline]
    pub fn contained_only(self) -> Self {
        self.coverage(Coverage::ContainedOnly)
    }

    /// Adds a third operand for ternary operations
    #[inline]
    pub fn and<S: Operand + ?Sized>(self, third: &'a S) -> Broadcast3<'a, E, R, S, N> {
        Broadcast3 {
            lhs: self.lhs,
            second: self.rhs,
            third,
            span: self.span,
            coverage: self.coverage,
        }
    }

    /// Indices visited by a reduction over this pairing
    pub(crate) fn reduction_range(&self) -> Range<usize> {
        let len = self.coverage.reduction_len(N, &[self.rhs.extent()]);
        self.span.clip(len)
    }

    /// Applies `f` elementwise, returning a vector of `M` cells of `O`
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let a = Vector::new([1u8, 2, 3]);
    /// let out: Vector<i32, 2> = a.broadcast(&10u8).combine(|x, y| x * y - 1);
    /// assert_eq!(out, Vector::new([9, 19]));
    /// ```
    pub fn combine<O, const M: usize>(self, f: impl FnMut(O, O) -> O) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
        R::Value: AsPrimitive<O>,
    {
        let mut out = Vector::default();
        self.combine_into(&mut out, f);
        out
    }

    /// Applies `f` elementwise, writing into a caller-supplied vector
    ///
    /// `out` may itself be reference-form, writing through to its aliases.
    pub fn combine_into<OE, const M: usize>(
        self,
        out: &mut Vector<OE, M>,
        mut f: impl FnMut(OE::Value, OE::Value) -> OE::Value,
    ) where
        OE: ElementMut,
        E::Value: AsPrimitive<OE::Value>,
        R::Value: AsPrimitive<OE::Value>,
    {
        let limit = self.coverage.limit(N, &[self.rhs.extent()]);
        let (lhs, rhs) = (self.lhs, self.rhs);
        drive(lhs, &self.span, limit, out, |i| {
            f(cast(lhs.element(i)), cast(rhs.element(i)))
        });
    }
}

impl<'a, E, R, S, const N: usize> Broadcast3<'a, E, R, S, N>
where
    E: Element,
    R: Operand + ?Sized,
    S: Operand + ?Sized,
{
    /// Restricts the operation to a sub-range
    #[inline]
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Sets the non-contained index policy
    #[inline]
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Applies `f` elementwise over all three operands
    pub fn combine3<O, const M: usize>(self, f: impl FnMut(O, O, O) -> O) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
        R::Value: AsPrimitive<O>,
        S::Value: AsPrimitive<O>,
    {
        let mut out = Vector::default();
        self.combine3_into(&mut out, f);
        out
    }

    /// Applies `f` elementwise over all three operands into `out`
    pub fn combine3_into<OE, const M: usize>(
        self,
        out: &mut Vector<OE, M>,
        mut f: impl FnMut(OE::Value, OE::Value, OE::Value) -> OE::Value,
    ) where
        OE: ElementMut,
        E::Value: AsPrimitive<OE::Value>,
        R::Value: AsPrimitive<OE::Value>,
        S::Value: AsPrimitive<OE::Value>,
    {
        let limit = self
            .coverage
            .limit(N, &[self.second.extent(), self.third.extent()]);
        let (lhs, second, third) = (self.lhs, self.second, self.third);
        drive(lhs, &self.span, limit, out, |i| {
            f(
                cast(lhs.element(i)),
                cast(second.element(i)),
                cast(third.element(i)),
            )
        });
    }
}

impl<'a, E: ElementMut, R: Operand + ?Sized, const N: usize> BroadcastAssign<'a, E, R, N> {
    /// Restricts the operation to a sub-range
    #[inline]
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Sets the non-contained index policy
    #[inline]
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Stops at the smaller operand
    #[inline]
    pub fn contained_only(self) -> Self {
        self.coverage(Coverage::ContainedOnly)
    }

    /// Adds a third operand for ternary operations
    #[inline]
    pub fn and<S: Operand + ?Sized>(self, third: &'a S) -> BroadcastAssign3<'a, E, R, S, N> {
        BroadcastAssign3 {
            lhs: self.lhs,
            second: self.rhs,
            third,
            span: self.span,
            coverage: self.coverage,
        }
    }

    /// Applies `f` elementwise in place
    pub fn combine(self, mut f: impl FnMut(E::Value, E::Value) -> E::Value)
    where
        R::Value: AsPrimitive<E::Value>,
    {
        let limit = self.coverage.limit(N, &[self.rhs.extent()]);
        let rhs = self.rhs;
        drive_in_place(self.lhs, &self.span, limit, |i, current| {
            f(current, cast(rhs.element(i)))
        });
    }
}

impl<'a, E, R, S, const N: usize> BroadcastAssign3<'a, E, R, S, N>
where
    E: ElementMut,
    R: Operand + ?Sized,
    S: Operand + ?Sized,
{
    /// Restricts the operation to a sub-range
    #[inline]
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Sets the non-contained index policy
    #[inline]
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Applies `f` elementwise over all three operands in place
    pub fn combine3(self, mut f: impl FnMut(E::Value, E::Value, E::Value) -> E::Value)
    where
        R::Value: AsPrimitive<E::Value>,
        S::Value: AsPrimitive<E::Value>,
    {
        let limit = self
            .coverage
            .limit(N, &[self.second.extent(), self.third.extent()]);
        let (second, third) = (self.second, self.third);
        drive_in_place(self.lhs, &self.span, limit, |i, current| {
            f(current, cast(second.element(i)), cast(third.element(i)))
        });
    }
}

impl<'a, E: Element, const N: usize> Unary<'a, E, N> {
    /// Restricts the operation to a sub-range
    #[inline]
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Maps each active value through `f`
    pub fn map<O, const M: usize>(self, f: impl FnMut(E::Value) -> O) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
    {
        let mut out = Vector::default();
        self.map_into(&mut out, f);
        out
    }

    /// Maps each active value through `f` into `out`
    pub fn map_into<OE, const M: usize>(
        self,
        out: &mut Vector<OE, M>,
        mut f: impl FnMut(E::Value) -> OE::Value,
    ) where
        OE: ElementMut,
        E::Value: AsPrimitive<OE::Value>,
    {
        let source = self.source;
        drive(source, &self.span, usize::MAX, out, |i| f(source.element(i)));
    }
}

impl<'a, E: ElementMut, const N: usize> UnaryAssign<'a, E, N> {
    /// Restricts the operation to a sub-range
    #[inline]
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Replaces each active value with `f(value)`
    pub fn apply(self, mut f: impl FnMut(E::Value) -> E::Value) {
        drive_in_place(self.target, &self.span, usize::MAX, |_, current| f(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_clip() {
        assert_eq!(Span::Full.clip(4), 0..4);
        assert_eq!(Span::copy(1..3).clip(4), 1..3);
        assert_eq!(Span::fresh(2..10).clip(4), 2..4);
        assert_eq!(Span::copy(6..9).clip(4), 4..4);
        assert!(Span::Full.copies_outside());
        assert!(Span::copy(0..1).copies_outside());
        assert!(!Span::fresh(0..1).copies_outside());
    }

    #[test]
    fn test_builders_debug_format() {
        let mut v = Vector::new([1i32, 2]);
        let other = Vector::new([3i32]);
        let text = format!("{:?}", v.broadcast(&other).span(Span::copy(0..1)));
        assert!(text.starts_with("Broadcast"));
        assert!(text.contains("[1, 2]"));
        assert!(text.contains("[3]"));
        assert!(format!("{:?}", v.broadcast(&1i32).and(&Splat(2i32))).contains("Splat(2)"));
        assert!(format!("{:?}", v.unary()).contains("source: [1, 2]"));
        assert!(format!("{:?}", v.unary_mut()).contains("target: [1, 2]"));
        assert!(format!("{:?}", v.broadcast_mut(&4i32)).contains("rhs: 4"));
    }

    #[test]
    fn test_coverage_limits() {
        assert_eq!(Coverage::IncludeNonContained.limit(3, &[Some(1)]), usize::MAX);
        assert_eq!(Coverage::ContainedOnly.limit(3, &[Some(1)]), 1);
        assert_eq!(Coverage::ContainedOnly.limit(3, &[None]), 3);
        assert_eq!(Coverage::ContainedOnly.limit(3, &[Some(5), Some(2)]), 2);
        assert_eq!(Coverage::IncludeNonContained.reduction_len(2, &[Some(4)]), 4);
        assert_eq!(Coverage::ContainedOnly.reduction_len(2, &[Some(4)]), 2);
        assert_eq!(Coverage::IncludeNonContained.reduction_len(2, &[None]), 2);
    }

    #[test]
    fn test_operand_shapes() {
        let v = Vector::new([1, 2]);
        assert_eq!(v.extent(), Some(2));
        assert_eq!(v.element(1), 2);
        assert_eq!(v.element(2), 0);
        assert!(v.is_vector());
        assert_eq!(3.5f32.extent(), None);
        assert_eq!(3.5f32.element(100), 3.5);
        assert!(!Splat(1u8).is_vector());
        assert_eq!(Splat(9i64).element(4), 9);
    }

    #[test]
    fn test_combine_vector_vector_implied_zero() {
        let a = Vector::new([1, 2, 3, 4]);
        let b = Vector::new([10, 20]);
        let out: Vector<i32, 4> = a.broadcast(&b).combine(|x, y| x + y);
        assert_eq!(out.into_inner(), [11, 22, 3, 4]);
    }

    #[test]
    fn test_combine_rhs_longer_than_lhs() {
        let a = Vector::new([1, 2]);
        let b = Vector::new([10, 20, 30]);
        let out: Vector<i32, 3> = a.broadcast(&b).combine(|x, y| x + y);
        assert_eq!(out.into_inner(), [11, 22, 30]);
    }

    #[test]
    fn test_combine_contained_only_copies_rest() {
        let a = Vector::new([1, 2, 3, 4]);
        let b = Vector::new([10, 20]);
        let out: Vector<i32, 4> = a.broadcast(&b).contained_only().combine(|x, y| x * y);
        assert_eq!(out.into_inner(), [10, 40, 3, 4]);

        let fresh: Vector<i32, 4> = a
            .broadcast(&b)
            .contained_only()
            .span(Span::fresh(0..4))
            .combine(|x, y| x * y);
        assert_eq!(fresh.into_inner(), [10, 40, 0, 0]);
    }

    #[test]
    fn test_combine_scalar() {
        let a = Vector::new([1.0f32, 2.0, 3.0]);
        let out: Vector<f32, 3> = a.broadcast(&2.0f32).combine(|x, y| x * y);
        assert_eq!(out.into_inner(), [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_combine_output_type_and_size() {
        let a = Vector::new([1.5f32, 2.5, 3.5]);
        let out: Vector<i64, 5> = a.broadcast(&1i32).combine(|x, y| x + y);
        assert_eq!(out.into_inner(), [2, 3, 4, 1, 1]);
    }

    #[test]
    fn test_span_copy_vs_fresh() {
        let a = Vector::new([1, 2, 3, 4]);
        let copy: Vector<i32, 4> = a.broadcast(&100).span(Span::copy(1..3)).combine(|x, y| x + y);
        assert_eq!(copy.into_inner(), [1, 102, 103, 4]);
        let fresh: Vector<i32, 4> = a.broadcast(&100).span(Span::fresh(1..3)).combine(|x, y| x + y);
        assert_eq!(fresh.into_inner(), [0, 102, 103, 0]);
    }

    #[test]
    fn test_combine_into_reference_output() {
        let a = Vector::new([1, 2]);
        let (mut x, mut y) = (0i64, 0i64);
        {
            let mut out = Vector::new([&mut x, &mut y]);
            a.broadcast(&5).combine_into(&mut out, |p, q| p * q);
        }
        assert_eq!((x, y), (5, 10));
    }

    #[test]
    fn test_combine3() {
        let a = Vector::new([1.0f64, 2.0]);
        let out: Vector<f64, 2> = a
            .broadcast(&Vector::new([1.0f64, 1.0]))
            .and(&3.0f64)
            .combine3(|x, y, z| (x + y) * z);
        assert_eq!(out.into_inner(), [6.0, 9.0]);
    }

    #[test]
    fn test_assign_forms() {
        let mut a = Vector::new([1, 2, 3]);
        a.broadcast_mut(&Vector::new([1, 1])).combine(|x, y| x + y);
        assert_eq!(a.into_inner(), [2, 3, 3]);

        a.broadcast_mut(&10).span(Span::fresh(1..2)).combine(|x, y| x * y);
        assert_eq!(a.into_inner(), [0, 30, 0]);

        let mut b = Vector::new([5, 5, 5]);
        b.broadcast_mut(&Vector::new([1])).contained_only().combine(|x, y| x - y);
        assert_eq!(b.into_inner(), [4, 5, 5]);
    }

    #[test]
    fn test_assign3() {
        let mut a = Vector::new([1, 2, 3]);
        a.broadcast_mut(&2).and(&1).span(Span::copy(0..2)).combine3(|x, y, z| x * y + z);
        assert_eq!(a.into_inner(), [3, 5, 3]);
    }

    #[test]
    fn test_unary_map() {
        let a = Vector::new([1u8, 2, 3]);
        let out: Vector<u16, 3> = a.unary().span(Span::copy(0..2)).map(|x| u16::from(x) * 100);
        assert_eq!(out.into_inner(), [100, 200, 3]);
        let mut b = a;
        b.unary_mut().apply(|x| x + 1);
        assert_eq!(b.into_inner(), [2, 3, 4]);
    }
}
