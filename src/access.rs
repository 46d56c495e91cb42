//! Element access layer
//!
//! Four flavours of indexing:
//!
//! - compile-time checked: [`Vector::at_const`] fails to build for `I >= N`
//! - runtime checked: [`Vector::at`] returns [`VectorError::IndexOutOfRange`]
//! - unchecked: `v[i]` (panics past the end) and [`Vector::get_unchecked`]
//! - theoretical: [`Vector::theoretical`] yields an owned implied zero past the end
//!
//! plus the non-failing probes [`Vector::get`] and [`Vector::try_get`].

use core::ops::{Deref, Index, IndexMut};

use num_traits::AsPrimitive;

use crate::error::{Result, VectorError};
use crate::scalar::{Element, ElementMut, Scalar};
use crate::vector::{Contained, Vector};

/// Result of a theoretical (zero-padded) access
///
/// Contained indices borrow the live cell; indices past the end produce a
/// freshly constructed canonical zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theoretical<'a, T> {
    /// Index inside the vector
    Contained(&'a T),
    /// Index past the end: implied zero
    Virtual(T),
}

impl<'a, T: Scalar> Theoretical<'a, T> {
    /// The value, copied out
    #[inline]
    pub fn get(&self) -> T {
        match self {
            Theoretical::Contained(value) => **value,
            Theoretical::Virtual(value) => *value,
        }
    }

    /// `true` if the index was past the end
    #[inline]
    pub fn is_virtual(&self) -> bool {
        matches!(self, Theoretical::Virtual(_))
    }
}

impl<'a, T> Deref for Theoretical<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Theoretical::Contained(value) => value,
            Theoretical::Virtual(value) => value,
        }
    }
}

impl<E: Element, const N: usize> Vector<E, N> {
    /// Compile-time checked access
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([1, 2, 3]);
    /// assert_eq!(*v.at_const::<2>(), 3);
    /// ```
    ///
    /// An out-of-range index is rejected when the call is monomorphized:
    ///
    /// ```compile_fail
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([1, 2, 3]);
    /// let _ = v.at_const::<3>();
    /// ```
    #[inline]
    pub fn at_const<const I: usize>(&self) -> &E::Value {
        #[allow(clippy::let_unit_value)]
        let () = Contained::<I, N>::CHECK;
        self.data[I].value()
    }

    /// Runtime checked access
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= N`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&E::Value> {
        self.get(index)
            .ok_or(VectorError::IndexOutOfRange { index, size: N })
    }

    /// Non-failing probe
    #[inline]
    pub fn get(&self, index: usize) -> Option<&E::Value> {
        self.data.get(index).map(Element::value)
    }

    /// Unchecked access
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &E::Value {
        // SAFETY: caller guarantees index < N
        unsafe { self.data.get_unchecked(index) }.value()
    }

    /// Zero-padded access with a runtime index
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([4i32, 5]);
    /// assert_eq!(v.theoretical(1).get(), 5);
    /// assert_eq!(v.theoretical(9).get(), 0);
    /// ```
    #[inline]
    pub fn theoretical(&self, index: usize) -> Theoretical<'_, E::Value> {
        match self.data.get(index) {
            Some(cell) => Theoretical::Contained(cell.value()),
            None => Theoretical::Virtual(<E::Value as num_traits::Zero>::zero()),
        }
    }

    /// Zero-padded access with a compile-time index
    ///
    /// Any `I` is accepted; `I >= N` yields the implied zero.
    #[inline]
    pub fn theoretical_const<const I: usize>(&self) -> Theoretical<'_, E::Value> {
        self.theoretical(I)
    }

    /// Copies cell `index` into `out`, converting with `as` semantics
    ///
    /// Returns `false` and leaves `out` untouched if `index >= N`.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([1.5f32, 2.5]);
    /// let mut out = 0i32;
    /// assert!(v.try_get(1, &mut out));
    /// assert_eq!(out, 2);
    /// assert!(!v.try_get(2, &mut out));
    /// assert_eq!(out, 2);
    /// ```
    pub fn try_get<O>(&self, index: usize, out: &mut O) -> bool
    where
        O: Copy + 'static,
        E::Value: AsPrimitive<O>,
    {
        match self.get(index) {
            Some(value) => {
                *out = value.as_();
                true
            }
            None => false,
        }
    }

    /// Like [`try_get`](Self::try_get), but resets `out` to its default on
    /// failure
    pub fn try_get_or_reset<O>(&self, index: usize, out: &mut O) -> bool
    where
        O: Copy + Default + 'static,
        E::Value: AsPrimitive<O>,
    {
        let found = self.try_get(index, out);
        if !found {
            *out = O::default();
        }
        found
    }
}

impl<E: ElementMut, const N: usize> Vector<E, N> {
    /// Compile-time checked mutable access
    #[inline]
    pub fn at_const_mut<const I: usize>(&mut self) -> &mut E::Value {
        #[allow(clippy::let_unit_value)]
        let () = Contained::<I, N>::CHECK;
        self.data[I].value_mut()
    }

    /// Runtime checked mutable access
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= N`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut E::Value> {
        self.get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, size: N })
    }

    /// Non-failing mutable probe
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut E::Value> {
        self.data.get_mut(index).map(ElementMut::value_mut)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Contiguous storage
    ///
    /// Only value-form vectors have one; reference-form vectors make no
    /// contiguity promise and do not offer this method:
    ///
    /// ```compile_fail
    /// use trueno_fixed::Vector;
    ///
    /// let x = 1.0f32;
    /// let r = Vector::new([&x]);
    /// let _ = r.as_slice();
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable contiguous storage
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Storage as a fixed-size array
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }
}

impl<E: Element, const N: usize> Index<usize> for Vector<E, N> {
    type Output = E::Value;

    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    fn index(&self, index: usize) -> &E::Value {
        self.data[index].value()
    }
}

impl<E: ElementMut, const N: usize> IndexMut<usize> for Vector<E, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut E::Value {
        self.data[index].value_mut()
    }
}
