//! Fixed-size vector type
//!
//! [`Vector<E, N>`] holds exactly `N` cells of element type `E`. With a
//! [`Scalar`] element the vector owns its storage; with `&T` or `&mut T` it is
//! a reference-form vector aliasing storage owned elsewhere. The borrow checker
//! enforces that aliased storage outlives the vector, and a reference-form
//! vector never allocates, copies, or frees the data it points to.

use core::array;
use core::fmt;
use core::ops::Range;

use num_traits::AsPrimitive;

use crate::error::{Result, VectorError};
use crate::scalar::{Element, ElementMut, Scalar};

/// Compile-time sized vector of `N` homogeneous elements
///
/// # Examples
///
/// ```
/// use trueno_fixed::Vector;
///
/// let a = Vector::new([1.0f32, 2.0, 3.0]);
/// let b = Vector::new([4.0f32, 5.0, 6.0]);
///
/// assert_eq!(a + b, Vector::new([5.0, 7.0, 9.0]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<E, const N: usize> {
    pub(crate) data: [E; N],
}

/// Two-element vector
pub type Vec2<E> = Vector<E, 2>;
/// Three-element vector
pub type Vec3<E> = Vector<E, 3>;
/// Four-element vector
pub type Vec4<E> = Vector<E, 4>;

/// Compile-time index check, evaluated during monomorphization
pub(crate) struct Contained<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> Contained<I, N> {
    pub(crate) const CHECK: () = assert!(I < N, "compile-time index out of range");
}

/// Compile-time size check for concatenation
pub(crate) struct SizeSum<const A: usize, const B: usize, const S: usize>;

impl<const A: usize, const B: usize, const S: usize> SizeSum<A, B, S> {
    pub(crate) const CHECK: () = assert!(A + B == S, "output size must equal the sum of both sizes");
}

impl<E, const N: usize> Vector<E, N> {
    /// Number of cells
    pub const SIZE: usize = N;

    /// Builds a vector from exactly `N` cells
    ///
    /// The array literal makes the element count a compile-time check.
    #[inline]
    pub const fn new(data: [E; N]) -> Self {
        Self { data }
    }

    /// Number of cells
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for zero-sized vectors
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Consumes the vector, returning its cells
    #[inline]
    pub fn into_inner(self) -> [E; N] {
        self.data
    }
}

impl<E: Element, const N: usize> Vector<E, N> {
    /// Iterates over the logical values
    pub fn iter(&self) -> impl Iterator<Item = &E::Value> + '_ {
        self.data.iter().map(Element::value)
    }

    /// Borrows every cell, producing a reference-form vector
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([1i32, 2, 3]);
    /// let r = v.as_refs();
    /// assert_eq!(*r[1], 2);
    /// ```
    pub fn as_refs(&self) -> Vector<&E::Value, N> {
        Vector::new(self.data.each_ref().map(Element::value))
    }

    /// Copies the logical values into a new value-form vector
    pub fn to_values(&self) -> Vector<E::Value, N> {
        Vector::new(array::from_fn(|i| *self.data[i].value()))
    }

    /// Converts from a vector of another size and element type
    ///
    /// A shorter source is extended with implied zeros, a longer one is
    /// truncated.
    pub fn from_vector<S: Element, const M: usize>(source: &Vector<S, M>) -> Self
    where
        E: Scalar,
        S::Value: AsPrimitive<E>,
    {
        source.cast()
    }
}

impl<E: ElementMut, const N: usize> Vector<E, N> {
    /// Mutably borrows every cell, producing a reference-form vector that
    /// writes through to `self`
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let mut v = Vector::new([1, 2, 3]);
    /// let mut r = v.as_muts();
    /// r.set_all(9);
    /// assert_eq!(v, Vector::new([9, 9, 9]));
    /// ```
    pub fn as_muts(&mut self) -> Vector<&mut E::Value, N> {
        Vector::new(self.data.each_mut().map(ElementMut::value_mut))
    }

    /// Writes `value` into cell `index`
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= N`.
    pub fn set(&mut self, index: usize, value: E::Value) -> Result<()> {
        match self.data.get_mut(index) {
            Some(cell) => {
                *cell.value_mut() = value;
                Ok(())
            }
            None => Err(VectorError::IndexOutOfRange { index, size: N }),
        }
    }

    /// Writes `value` into every cell
    pub fn set_all(&mut self, value: E::Value) {
        for cell in &mut self.data {
            *cell.value_mut() = value;
        }
    }

    /// Writes `value` into the cells of `range`, clipped to `0..N`
    pub fn set_span(&mut self, range: Range<usize>, value: E::Value) {
        let end = range.end.min(N);
        for cell in self.data[range.start.min(end)..end].iter_mut() {
            *cell.value_mut() = value;
        }
    }

    /// Assigns from a vector of any size and element type
    ///
    /// Cells beyond the source's size receive implied zeros; source cells
    /// beyond `N` are ignored.
    pub fn copy_from<S: Element, const M: usize>(&mut self, source: &Vector<S, M>)
    where
        S::Value: AsPrimitive<E::Value>,
    {
        for (i, cell) in self.data.iter_mut().enumerate() {
            *cell.value_mut() = source.theoretical(i).get().as_();
        }
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Vector with every cell set to `value`
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v: Vector<u8, 4> = Vector::splat(7);
    /// assert_eq!(v.as_slice(), &[7, 7, 7, 7]);
    /// ```
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Vector of canonical zeros
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::new(array::from_fn(|_| T::default()))
    }
}

impl<E, const N: usize> From<[E; N]> for Vector<E, N> {
    #[inline]
    fn from(data: [E; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<E: Element, const N: usize> fmt::Debug for Vector<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: Element, const N: usize> fmt::Display for Vector<E, N>
where
    E::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        write!(f, ")")
    }
}
