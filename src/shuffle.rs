//! Structural transforms: shuffle, map/mutate, cast, concat

use core::array;

use num_traits::AsPrimitive;

use crate::dispatch::{cast, drive, drive_in_place, Span};
use crate::error::{Result, VectorError};
use crate::scalar::{Element, ElementMut, Scalar};
use crate::vector::{SizeSum, Vector};

impl<E: Element, const N: usize> Vector<E, N> {
    fn check_indices<const K: usize>(indices: &[usize; K]) -> Result<()> {
        match indices.iter().find(|&&index| index >= N) {
            Some(&index) => Err(VectorError::IndexOutOfRange { index, size: N }),
            None => Ok(()),
        }
    }

    /// Selects contained cells by index, repeats and reordering allowed
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] for the first index `>= N`.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([10, 20, 30]);
    /// assert_eq!(v.shuffle([2, 0, 0, 1]).unwrap(), Vector::new([30, 10, 10, 20]));
    /// assert!(v.shuffle([3]).is_err());
    /// ```
    pub fn shuffle<const K: usize>(&self, indices: [usize; K]) -> Result<Vector<E::Value, K>> {
        Self::check_indices(&indices)?;
        Ok(Vector::new(indices.map(|i| *self.data[i].value())))
    }

    /// Selects cells by index, reading implied zeros past the end
    pub fn shuffle_theoretical<const K: usize>(&self, indices: [usize; K]) -> Vector<E::Value, K> {
        Vector::new(indices.map(|i| self.theoretical(i).get()))
    }

    /// Selects contained cells by index, aliasing instead of copying
    ///
    /// Theoretical indices are rejected since there is nothing to alias.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] for the first index `>= N`.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([1.0f32, 2.0, 3.0]);
    /// let yx = v.ref_shuffle([1, 0]).unwrap();
    /// assert!(std::ptr::eq(&yx[0], &v[1]));
    /// ```
    pub fn ref_shuffle<const K: usize>(&self, indices: [usize; K]) -> Result<Vector<&E::Value, K>> {
        Self::check_indices(&indices)?;
        Ok(Vector::new(indices.map(|i| self.data[i].value())))
    }

    /// Applies `f` to every value
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([1, 2, 3]);
    /// assert_eq!(v.map(|x| x as f32 * 0.5), Vector::new([0.5, 1.0, 1.5]));
    /// ```
    pub fn map<O: Scalar>(&self, mut f: impl FnMut(E::Value) -> O) -> Vector<O, N> {
        Vector::new(array::from_fn(|i| f(*self.data[i].value())))
    }

    /// Builds an `M`-cell vector from `f(index)` inside `span`
    ///
    /// Outside the span the cells follow its policy: copied from `self`
    /// (implied zeros past `N`) or left at the default.
    pub fn mutate<O, const M: usize>(&self, span: Span, mut f: impl FnMut(usize) -> O) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
    {
        let mut out = Vector::default();
        drive(self, &span, usize::MAX, &mut out, |i| f(i));
        out
    }

    /// Like [`mutate`](Self::mutate), passing the source value first:
    /// `f(self[i], i)`
    ///
    /// ```
    /// use trueno_fixed::{Span, Vector};
    ///
    /// let v = Vector::new([1, 2, 3]);
    /// let out: Vector<i64, 4> = v.mutate_with_source(Span::Full, |x, i| x as i64 * 10 + i as i64);
    /// assert_eq!(out, Vector::new([10, 21, 32, 3]));
    /// ```
    pub fn mutate_with_source<O, const M: usize>(
        &self,
        span: Span,
        mut f: impl FnMut(E::Value, usize) -> O,
    ) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
    {
        self.mutate(span, |i| f(self.theoretical(i).get(), i))
    }

    /// Like [`mutate`](Self::mutate), passing the source value last:
    /// `f(i, self[i])`
    pub fn mutate_with_source_last<O, const M: usize>(
        &self,
        span: Span,
        mut f: impl FnMut(usize, E::Value) -> O,
    ) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
    {
        self.mutate(span, |i| f(i, self.theoretical(i).get()))
    }

    /// Converts size and element type: implied zeros when growing,
    /// truncation when shrinking, `as` semantics per element
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([1.9f32, -2.5]);
    /// let c: Vector<i32, 3> = v.cast();
    /// assert_eq!(c, Vector::new([1, -2, 0]));
    /// ```
    pub fn cast<O, const M: usize>(&self) -> Vector<O, M>
    where
        O: Scalar,
        E::Value: AsPrimitive<O>,
    {
        Vector::new(array::from_fn(|i| cast(self.theoretical(i).get())))
    }

    /// `self` followed by `other`; `S` must equal `N + M`
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let xy = Vector::new([1, 2]);
    /// let xyz: Vector<i32, 3> = xy.concat(&Vector::new([3]));
    /// assert_eq!(xyz, Vector::new([1, 2, 3]));
    /// ```
    ///
    /// A wrong output size does not build:
    ///
    /// ```compile_fail
    /// use trueno_fixed::Vector;
    ///
    /// let v: Vector<i32, 4> = Vector::new([1, 2]).concat(&Vector::new([3]));
    /// ```
    pub fn concat<F, const M: usize, const S: usize>(&self, other: &Vector<F, M>) -> Vector<E::Value, S>
    where
        F: Element,
        F::Value: AsPrimitive<E::Value>,
    {
        #[allow(clippy::let_unit_value)]
        let () = SizeSum::<N, M, S>::CHECK;
        Vector::new(array::from_fn(|i| {
            if i < N {
                *self.data[i].value()
            } else {
                cast(*other.data[i - N].value())
            }
        }))
    }

    /// `other` followed by `self`; `S` must equal `M + N`
    pub fn prepend<F, const M: usize, const S: usize>(&self, other: &Vector<F, M>) -> Vector<E::Value, S>
    where
        F: Element,
        F::Value: AsPrimitive<E::Value>,
    {
        #[allow(clippy::let_unit_value)]
        let () = SizeSum::<M, N, S>::CHECK;
        Vector::new(array::from_fn(|i| {
            if i < M {
                cast(*other.data[i].value())
            } else {
                *self.data[i - M].value()
            }
        }))
    }
}

impl<E: ElementMut, const N: usize> Vector<E, N> {
    /// Replaces each value inside `span` with `f(index, value)`
    ///
    /// Outside the span values are kept (`Span::Copy`) or reset
    /// (`Span::Fresh`).
    pub fn mutate_in_place(&mut self, span: Span, mut f: impl FnMut(usize, E::Value) -> E::Value) {
        drive_in_place(self, &span, usize::MAX, |i, value| f(i, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_repeats_and_reorders() {
        let v = Vector::new([1.0f32, 2.0, 3.0, 4.0]);
        assert_eq!(v.shuffle([3, 3, 0]).unwrap().into_inner(), [4.0, 4.0, 1.0]);
    }

    #[test]
    fn test_shuffle_reports_first_bad_index() {
        let v = Vector::new([1, 2]);
        assert_eq!(
            v.shuffle([0, 5, 9]),
            Err(VectorError::IndexOutOfRange { index: 5, size: 2 })
        );
    }

    #[test]
    fn test_shuffle_theoretical() {
        let v = Vector::new([1, 2]);
        assert_eq!(v.shuffle_theoretical([1, 4, 0]).into_inner(), [2, 0, 1]);
    }

    #[test]
    fn test_ref_shuffle_aliases() {
        let v = Vector::new([5u8, 6, 7]);
        let r = v.ref_shuffle([2, 2]).unwrap();
        assert!(core::ptr::eq(&r[0], &v[2]));
        assert!(core::ptr::eq(&r[1], &v[2]));
        assert!(v.ref_shuffle([3]).is_err());
    }

    #[test]
    fn test_map_changes_type() {
        let v = Vector::new([1u8, 200]);
        let w = v.map(|x| i32::from(x) - 100);
        assert_eq!(w.into_inner(), [-99, 100]);
    }

    #[test]
    fn test_mutate_spans() {
        let v = Vector::new([1, 2, 3]);
        let copy: Vector<i32, 3> = v.mutate(Span::copy(1..2), |i| i as i32 * 100);
        assert_eq!(copy.into_inner(), [1, 100, 3]);
        let fresh: Vector<i32, 3> = v.mutate(Span::fresh(1..2), |i| i as i32 * 100);
        assert_eq!(fresh.into_inner(), [0, 100, 0]);
    }

    #[test]
    fn test_mutate_source_positions() {
        let v = Vector::new([2.0f64, 4.0]);
        let first: Vector<f64, 2> = v.mutate_with_source(Span::Full, |x, i| x - i as f64);
        let last: Vector<f64, 2> = v.mutate_with_source_last(Span::Full, |i, x| i as f64 - x);
        assert_eq!(first.into_inner(), [2.0, 3.0]);
        assert_eq!(last.into_inner(), [-2.0, -3.0]);
    }

    #[test]
    fn test_mutate_in_place() {
        let mut v = Vector::new([1, 1, 1, 1]);
        v.mutate_in_place(Span::copy(1..3), |i, x| x + i as i32);
        assert_eq!(v.as_slice(), &[1, 2, 3, 1]);
        v.mutate_in_place(Span::fresh(0..1), |_, x| x * 7);
        assert_eq!(v.into_inner(), [7, 0, 0, 0]);
    }

    #[test]
    fn test_cast_grow_and_shrink() {
        let v = Vector::new([1i16, -2, 3]);
        let grown: Vector<f64, 5> = v.cast();
        assert_eq!(grown.into_inner(), [1.0, -2.0, 3.0, 0.0, 0.0]);
        let shrunk: Vector<u8, 2> = v.cast();
        assert_eq!(shrunk.into_inner(), [1, 254]);
    }

    #[test]
    fn test_cast_round_trip() {
        let v = Vector::new([0.5f32, -1.25, 3.0]);
        let wide: Vector<f64, 4> = v.cast();
        let back: Vector<f32, 3> = wide.cast();
        assert_eq!(back, v);
    }

    #[test]
    fn test_concat_and_prepend() {
        let a = Vector::new([1, 2]);
        let b = Vector::new([3.0f32, 4.0, 5.0]);
        let ab: Vector<i32, 5> = a.concat(&b);
        assert_eq!(ab.into_inner(), [1, 2, 3, 4, 5]);
        let ba: Vector<i32, 5> = a.prepend(&b);
        assert_eq!(ba.into_inner(), [3, 4, 5, 1, 2]);
    }

    #[test]
    fn test_concat_reference_form() {
        let (x, y) = (1u32, 2u32);
        let r = Vector::new([&x]);
        let out: Vector<u32, 2> = r.concat(&Vector::new([&y]));
        assert_eq!(out.into_inner(), [1, 2]);
    }
}
