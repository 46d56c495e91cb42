//! Vector-math algorithm library
//!
//! | Operation | Formula (`a` = `self`) |
//! |---|---|
//! | [`dot`](Vector::dot) | Σ aᵢ·bᵢ |
//! | [`square_magnitude`](Vector::square_magnitude) | a·a |
//! | [`magnitude`](Vector::magnitude) | √(a·a) |
//! | [`normalize`](Vector::normalize) | a · (1/‖a‖) |
//! | [`angle_cos`](Vector::angle_cos) | a·b / (‖a‖‖b‖) |
//! | [`angle`](Vector::angle) | acos of the above |
//! | [`cross`](Vector::cross) | (a₁b₂−a₂b₁, a₂b₀−a₀b₂, a₀b₁−a₁b₀) |
//! | [`square_distance`](Vector::square_distance) | ‖b−a‖² |
//! | [`reflect`](Vector::reflect) | a − 2(a·n)n, `n` unit length |
//! | [`normal_to_plane3`](Vector::normal_to_plane3) | (b−a) × (c−a) |
//! | [`project`](Vector::project) | b · (a·b)/(b·b) |
//! | [`project_plane`](Vector::project_plane) | a − (a·n)n, `n` unit length |
//! | [`project_plane3`](Vector::project_plane3) | `project_plane` with a unit plane normal |
//!
//! Algorithms that need a square root or an arccosine have a `*_with::<B>()`
//! variant taking a [`Numerics`] strategy; the plain method uses
//! [`Runtime`]. Results that are inherently continuous are returned in the
//! preferred float; the rest stay in the value type.
//!
//! Degenerate input is not an error: normalizing a zero vector or projecting
//! onto one yields NaN components. With the `tracing` feature enabled these
//! cases emit a `trace!` event.

use core::array;
use core::ops::Range;

use num_traits::{AsPrimitive, Float};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::backends::{Numerics, Runtime};
use crate::dispatch::{cast, Coverage, Span};
use crate::scalar::{Element, FloatScalar, PreferredFloat, Scalar};
use crate::vector::Vector;

/// Right-handed cross product of two triples
#[inline]
fn cross3<T: Scalar>(a: [T; 3], b: [T; 3]) -> [T; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn dot3<T: Scalar>(a: [T; 3], b: [T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// `|a - b|` without leaving the value type, so unsigned types never wrap
#[inline]
fn abs_diff<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// First three components of `v` converted into `T`, zero padded
#[inline]
fn point3<T, X, const K: usize>(v: &Vector<X, K>) -> [T; 3]
where
    T: Scalar,
    X: Element,
    X::Value: AsPrimitive<T>,
{
    array::from_fn(|i| cast(v.theoretical(i).get()))
}

/// `(b - a) × (c - a)`
#[inline]
fn plane_normal<T: Scalar>(a: [T; 3], b: [T; 3], c: [T; 3]) -> [T; 3] {
    cross3(
        array::from_fn(|i| b[i] - a[i]),
        array::from_fn(|i| c[i] - a[i]),
    )
}

#[inline]
fn unit_plane_normal<B: Numerics, F: FloatScalar>(a: [F; 3], b: [F; 3], c: [F; 3]) -> [F; 3] {
    let normal = plane_normal(a, b, c);
    let inverse = B::rsqrt(dot3(normal, normal));
    normal.map(|x| x * inverse)
}

impl<E: Element, const N: usize> Vector<E, N> {
    /// Dot product over the indices both vectors contain
    ///
    /// Past the shorter operand every product involves an implied zero, so
    /// only contained indices are visited. `rhs` is converted into the value
    /// type first.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let a = Vector::new([1, 2, 3, 4]);
    /// assert_eq!(a.dot(&Vector::new([10, 20])), 50);
    /// ```
    pub fn dot<R: Element, const M: usize>(&self, rhs: &Vector<R, M>) -> E::Value
    where
        R::Value: AsPrimitive<E::Value>,
    {
        self.dot_span(rhs, 0..N)
    }

    /// Dot product restricted to `range`
    pub fn dot_span<R: Element, const M: usize>(
        &self,
        rhs: &Vector<R, M>,
        range: Range<usize>,
    ) -> E::Value
    where
        R::Value: AsPrimitive<E::Value>,
    {
        Span::copy(range)
            .clip(N.min(M))
            .fold(num_traits::zero(), |acc: E::Value, i| {
                acc + *self.data[i].value() * cast::<_, E::Value>(*rhs.data[i].value())
            })
    }

    /// Squared length, in the value type
    pub fn square_magnitude(&self) -> E::Value {
        self.dot(self)
    }

    /// Squared length of the cells in `range`
    pub fn square_magnitude_span(&self, range: Range<usize>) -> E::Value {
        self.dot_span(self, range)
    }

    /// Squared length accumulated in the preferred float
    pub(crate) fn square_magnitude_float(&self, range: Range<usize>) -> PreferredFloat<E> {
        Span::copy(range)
            .clip(N)
            .map(|i| self.data[i].value().to_float())
            .fold(num_traits::zero(), |acc: PreferredFloat<E>, x| acc + x * x)
    }

    /// Dot product with `rhs` accumulated in the preferred float
    fn dot_float<R: Element, const M: usize>(&self, rhs: &Vector<R, M>) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        (0..N.min(M)).fold(num_traits::zero(), |acc: PreferredFloat<E>, i| {
            let b: PreferredFloat<E> = cast(*rhs.data[i].value());
            acc + self.data[i].value().to_float() * b
        })
    }

    /// Euclidean length
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// assert_eq!(Vector::new([3.0f32, 4.0]).magnitude(), 5.0);
    /// assert_eq!(Vector::new([3u8, 4]).magnitude(), 5.0f64);
    /// ```
    pub fn magnitude(&self) -> PreferredFloat<E> {
        self.magnitude_with::<Runtime>()
    }

    /// Euclidean length using strategy `B`
    pub fn magnitude_with<B: Numerics>(&self) -> PreferredFloat<E> {
        B::sqrt(self.square_magnitude_float(0..N))
    }

    /// Euclidean length of the cells in `range`
    pub fn magnitude_span(&self, range: Range<usize>) -> PreferredFloat<E> {
        Runtime::sqrt(self.square_magnitude_float(range))
    }

    /// Unit vector in the same direction
    ///
    /// A zero vector has no direction; its components come back NaN.
    pub fn normalize(&self) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.normalize_with::<Runtime>()
    }

    /// [`normalize`](Self::normalize) using strategy `B`
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(n = N, strategy = B::NAME)))]
    pub fn normalize_with<B: Numerics>(&self) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.normalize_span_with::<B>(0..N)
    }

    /// Normalizes the cells of `range` as a sub-vector, copying the rest
    /// through converted to the preferred float
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([9.0f64, 0.0, 2.0]);
    /// assert_eq!(v.normalize_span(1..3), Vector::new([9.0, 0.0, 1.0]));
    /// ```
    pub fn normalize_span(&self, range: Range<usize>) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.normalize_span_with::<Runtime>(range)
    }

    /// [`normalize_span`](Self::normalize_span) using strategy `B`
    pub fn normalize_span_with<B: Numerics>(
        &self,
        range: Range<usize>,
    ) -> Vector<PreferredFloat<E>, N>
    where
        E::Value: AsPrimitive<PreferredFloat<E>>,
    {
        let square = self.square_magnitude_float(range.clone());
        #[cfg(feature = "tracing")]
        if square == num_traits::zero::<PreferredFloat<E>>() {
            tracing::trace!("normalizing a zero-length vector");
        }
        let inverse = B::rsqrt(square);
        self.unary()
            .span(Span::copy(range))
            .map(|x| x.to_float() * inverse)
    }

    /// Cosine of the angle between `self` and `rhs`
    ///
    /// NaN when either vector has zero length.
    pub fn angle_cos<R: Element, const M: usize>(&self, rhs: &Vector<R, M>) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.angle_cos_with::<Runtime, R, M>(rhs)
    }

    /// [`angle_cos`](Self::angle_cos) using strategy `B`
    pub fn angle_cos_with<B: Numerics, R: Element, const M: usize>(
        &self,
        rhs: &Vector<R, M>,
    ) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        let rhs_square = rhs.iter().fold(num_traits::zero(), |acc: PreferredFloat<E>, &x| {
            let x: PreferredFloat<E> = cast(x);
            acc + x * x
        });
        let lengths = B::sqrt(self.square_magnitude_float(0..N)) * B::sqrt(rhs_square);
        self.dot_float(rhs) / lengths
    }

    /// Angle between `self` and `rhs` in radians, within `[0, π]`
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let x = Vector::new([1.0f64, 0.0]);
    /// let y = Vector::new([0.0f64, 2.0]);
    /// assert!((x.angle(&y) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn angle<R: Element, const M: usize>(&self, rhs: &Vector<R, M>) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.angle_with::<Runtime, R, M>(rhs)
    }

    /// [`angle`](Self::angle) using strategy `B`
    ///
    /// The cosine is clamped into `[-1, 1]` first, so rounding on nearly
    /// parallel vectors cannot push it out of the arccosine's domain.
    #[cfg_attr(feature = "tracing", instrument(skip(self, rhs), fields(n = N, m = M, strategy = B::NAME)))]
    pub fn angle_with<B: Numerics, R: Element, const M: usize>(
        &self,
        rhs: &Vector<R, M>,
    ) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        let one: PreferredFloat<E> = num_traits::one();
        let cos = self.angle_cos_with::<B, R, M>(rhs);
        B::acos(Float::min(Float::max(cos, -one), one))
    }

    /// Angle between `self` and `rhs` in degrees
    pub fn angle_degrees<R: Element, const M: usize>(&self, rhs: &Vector<R, M>) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.angle(rhs).to_degrees()
    }

    /// [`angle_degrees`](Self::angle_degrees) using strategy `B`
    pub fn angle_degrees_with<B: Numerics, R: Element, const M: usize>(
        &self,
        rhs: &Vector<R, M>,
    ) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.angle_with::<B, R, M>(rhs).to_degrees()
    }

    /// Three-dimensional cross product of components 0, 1, 2
    ///
    /// Shorter vectors contribute implied zeros; extra components are
    /// ignored. Unsigned element types wrap or panic on negative
    /// components exactly like their scalar subtraction.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let x = Vector::new([1.0f32, 0.0, 0.0]);
    /// let y = Vector::new([0.0f32, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y), Vector::new([0.0, 0.0, 1.0]));
    /// ```
    pub fn cross<R: Element, const M: usize>(&self, rhs: &Vector<R, M>) -> Vector<E::Value, 3>
    where
        R::Value: AsPrimitive<E::Value>,
    {
        self.cross_axes(rhs, [0, 1, 2], [0, 1, 2])
    }

    /// Cross product over arbitrary component indices of either operand
    ///
    /// `lhs_axes` and `rhs_axes` pick the x, y, z components of `self` and
    /// `rhs`; indices past either vector read as implied zeros.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// // (w, x, y, z) layout: cross the xyz parts
    /// let a = Vector::new([9, 1, 0, 0]);
    /// let b = Vector::new([9, 0, 1, 0]);
    /// assert_eq!(a.cross_axes(&b, [1, 2, 3], [1, 2, 3]), Vector::new([0, 0, 1]));
    /// ```
    pub fn cross_axes<R: Element, const M: usize>(
        &self,
        rhs: &Vector<R, M>,
        lhs_axes: [usize; 3],
        rhs_axes: [usize; 3],
    ) -> Vector<E::Value, 3>
    where
        R::Value: AsPrimitive<E::Value>,
    {
        let a = lhs_axes.map(|axis| self.theoretical(axis).get());
        let b = rhs_axes.map(|axis| cast::<_, E::Value>(rhs.theoretical(axis).get()));
        Vector::new(cross3(a, b))
    }

    /// Squared distance to `to`, extending the shorter vector with implied
    /// zeros
    pub fn square_distance<R: Element, const M: usize>(&self, to: &Vector<R, M>) -> E::Value
    where
        R::Value: AsPrimitive<E::Value>,
    {
        self.square_distance_within(to, Coverage::IncludeNonContained)
    }

    /// Squared distance under an explicit coverage policy
    ///
    /// ```
    /// use trueno_fixed::{Coverage, Vector};
    ///
    /// let a = Vector::new([0, 0, 5]);
    /// let b = Vector::new([3, 4]);
    /// assert_eq!(a.square_distance_within(&b, Coverage::IncludeNonContained), 50);
    /// assert_eq!(a.square_distance_within(&b, Coverage::ContainedOnly), 25);
    /// ```
    pub fn square_distance_within<R: Element, const M: usize>(
        &self,
        to: &Vector<R, M>,
        coverage: Coverage,
    ) -> E::Value
    where
        R::Value: AsPrimitive<E::Value>,
    {
        let len = coverage.reduction_len(N, &[Some(M)]);
        (0..len).fold(num_traits::zero(), |acc: E::Value, i| {
            let a = self.theoretical(i).get();
            let b: E::Value = cast(to.theoretical(i).get());
            let d = abs_diff(a, b);
            acc + d * d
        })
    }

    /// Euclidean distance to `to`
    ///
    /// Symmetric in its operands when they share an element type.
    pub fn distance<R: Element, const M: usize>(&self, to: &Vector<R, M>) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<E::Value>,
    {
        self.distance_with::<Runtime, R, M>(to, Coverage::IncludeNonContained)
    }

    /// Euclidean distance using strategy `B` and an explicit coverage policy
    ///
    /// Squares are summed in the preferred float, so integer vectors whose
    /// squared distance exceeds their value type still measure correctly.
    ///
    /// ```
    /// use trueno_fixed::{Coverage, Runtime, Vector};
    ///
    /// let origin = Vector::new([0u8, 0]);
    /// let far = Vector::new([200u8, 150]);
    /// assert_eq!(origin.distance_with::<Runtime, _, 2>(&far, Coverage::ContainedOnly), 250.0);
    /// ```
    pub fn distance_with<B: Numerics, R: Element, const M: usize>(
        &self,
        to: &Vector<R, M>,
        coverage: Coverage,
    ) -> PreferredFloat<E>
    where
        R::Value: AsPrimitive<E::Value>,
    {
        let len = coverage.reduction_len(N, &[Some(M)]);
        let square = (0..len).fold(num_traits::zero(), |acc: PreferredFloat<E>, i| {
            let b: E::Value = cast(to.theoretical(i).get());
            let d = abs_diff(self.theoretical(i).get(), b).to_float();
            acc + d * d
        });
        B::sqrt(square)
    }

    /// Reflects `self` off a surface with unit normal `normal`
    ///
    /// `normal` is used as given; a non-unit normal scales the reflected
    /// component accordingly.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let ray = Vector::new([1.0f32, -1.0]);
    /// let up = Vector::new([0.0f32, 1.0]);
    /// assert_eq!(ray.reflect(&up), Vector::new([1.0, 1.0]));
    /// ```
    pub fn reflect<R: Element, const M: usize>(&self, normal: &Vector<R, M>) -> Vector<E::Value, N>
    where
        R::Value: AsPrimitive<E::Value>,
    {
        let one: E::Value = num_traits::one();
        let two = one + one;
        let k = two * self.dot(normal);
        self.broadcast(normal).combine(|r, n| r - k * n)
    }

    /// Unnormalized normal of the plane through `self`, `b` and `c`:
    /// `(b - self) × (c - self)`
    pub fn normal_to_plane3<R, S, const M: usize, const K: usize>(
        &self,
        b: &Vector<R, M>,
        c: &Vector<S, K>,
    ) -> Vector<E::Value, 3>
    where
        R: Element,
        S: Element,
        R::Value: AsPrimitive<E::Value>,
        S::Value: AsPrimitive<E::Value>,
    {
        let a = array::from_fn(|i| self.theoretical(i).get());
        Vector::new(plane_normal(a, point3(b), point3(c)))
    }

    /// Unit normal of the plane through `self`, `b` and `c`
    ///
    /// NaN components for collinear points.
    pub fn unit_normal_to_plane3<R, S, const M: usize, const K: usize>(
        &self,
        b: &Vector<R, M>,
        c: &Vector<S, K>,
    ) -> Vector<PreferredFloat<E>, 3>
    where
        R: Element,
        S: Element,
        R::Value: AsPrimitive<PreferredFloat<E>>,
        S::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.unit_normal_to_plane3_with::<Runtime, R, S, M, K>(b, c)
    }

    /// [`unit_normal_to_plane3`](Self::unit_normal_to_plane3) using strategy `B`
    pub fn unit_normal_to_plane3_with<B, R, S, const M: usize, const K: usize>(
        &self,
        b: &Vector<R, M>,
        c: &Vector<S, K>,
    ) -> Vector<PreferredFloat<E>, 3>
    where
        B: Numerics,
        R: Element,
        S: Element,
        R::Value: AsPrimitive<PreferredFloat<E>>,
        S::Value: AsPrimitive<PreferredFloat<E>>,
    {
        let a = array::from_fn(|i| self.theoretical(i).get().to_float());
        Vector::new(unit_plane_normal::<B, _>(a, point3(b), point3(c)))
    }

    /// Projection of `self` onto `onto`
    ///
    /// The result has `onto`'s size. Uses one reciprocal and `M` multiplies
    /// rather than `M` divisions; projecting onto a zero vector yields NaN.
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let v = Vector::new([2.0f64, 3.0]);
    /// let x_axis = Vector::new([4.0f64, 0.0]);
    /// assert_eq!(v.project(&x_axis), Vector::new([2.0, 0.0]));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self, onto), fields(n = N, m = M)))]
    pub fn project<R: Element, const M: usize>(
        &self,
        onto: &Vector<R, M>,
    ) -> Vector<PreferredFloat<E>, M>
    where
        R::Value: AsPrimitive<PreferredFloat<E>>,
    {
        let onto_square = onto.iter().fold(num_traits::zero(), |acc: PreferredFloat<E>, &x| {
            let x: PreferredFloat<E> = cast(x);
            acc + x * x
        });
        #[cfg(feature = "tracing")]
        if onto_square == num_traits::zero::<PreferredFloat<E>>() {
            tracing::trace!("projecting onto a zero-length vector");
        }
        let k = self.dot_float(onto) * onto_square.recip();
        onto.unary().map(|x| cast::<_, PreferredFloat<E>>(x) * k)
    }

    /// Projection of `self` onto the plane through the origin with unit
    /// normal `normal`
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let p = Vector::new([1, 2, 3]);
    /// let z = Vector::new([0, 0, 1]);
    /// assert_eq!(p.project_plane(&z), Vector::new([1, 2, 0]));
    /// ```
    pub fn project_plane<R: Element, const M: usize>(
        &self,
        normal: &Vector<R, M>,
    ) -> Vector<E::Value, N>
    where
        R::Value: AsPrimitive<E::Value>,
    {
        let d = self.dot(normal);
        self.broadcast(normal).combine(|p, n| p - d * n)
    }

    /// Projection onto the plane with the unit normal of triangle `a`, `b`, `c`
    ///
    /// Only the plane's orientation matters: the result lies in the parallel
    /// plane through the origin.
    pub fn project_plane3<A, R, S, const J: usize, const M: usize, const K: usize>(
        &self,
        a: &Vector<A, J>,
        b: &Vector<R, M>,
        c: &Vector<S, K>,
    ) -> Vector<PreferredFloat<E>, N>
    where
        A: Element,
        R: Element,
        S: Element,
        A::Value: AsPrimitive<PreferredFloat<E>>,
        R::Value: AsPrimitive<PreferredFloat<E>>,
        S::Value: AsPrimitive<PreferredFloat<E>>,
    {
        self.project_plane3_with::<Runtime, A, R, S, J, M, K>(a, b, c)
    }

    /// [`project_plane3`](Self::project_plane3) using strategy `B`
    pub fn project_plane3_with<B, A, R, S, const J: usize, const M: usize, const K: usize>(
        &self,
        a: &Vector<A, J>,
        b: &Vector<R, M>,
        c: &Vector<S, K>,
    ) -> Vector<PreferredFloat<E>, N>
    where
        B: Numerics,
        A: Element,
        R: Element,
        S: Element,
        A::Value: AsPrimitive<PreferredFloat<E>>,
        R::Value: AsPrimitive<PreferredFloat<E>>,
        S::Value: AsPrimitive<PreferredFloat<E>>,
    {
        let normal = unit_plane_normal::<B, _>(point3(a), point3(b), point3(c));
        self.remove_component(normal, |x| x.to_float())
    }

    /// Projection onto the plane with the unnormalized normal of triangle
    /// `self`-relative points `a`, `b`, `c`, in the value type
    ///
    /// Exact for integer geometry when the normal happens to be unit length;
    /// otherwise the removed component is scaled by the normal's squared
    /// length.
    pub fn project_plane3_raw<A, R, S, const J: usize, const M: usize, const K: usize>(
        &self,
        a: &Vector<A, J>,
        b: &Vector<R, M>,
        c: &Vector<S, K>,
    ) -> Vector<E::Value, N>
    where
        A: Element,
        R: Element,
        S: Element,
        A::Value: AsPrimitive<E::Value>,
        R::Value: AsPrimitive<E::Value>,
        S::Value: AsPrimitive<E::Value>,
    {
        let normal = plane_normal(point3(a), point3(b), point3(c));
        self.remove_component(normal, |x| x)
    }

    /// `p - (p·n)n` against a three-component normal, in the type `to` maps into
    fn remove_component<T: Scalar>(
        &self,
        normal: [T; 3],
        to: impl Fn(E::Value) -> T,
    ) -> Vector<T, N> {
        let p = array::from_fn(|i| to(self.theoretical(i).get()));
        let d = dot3(p, normal);
        Vector::new(array::from_fn(|i| {
            let n = normal.get(i).copied().unwrap_or_else(T::zero);
            to(*self.data[i].value()) - d * n
        }))
    }
}

impl<E, const N: usize> Vector<E, N>
where
    E: crate::scalar::ElementMut,
    E::Value: FloatScalar,
{
    /// Normalizes a floating-point vector in place
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// let mut v = Vector::new([0.0f32, 3.0, 4.0]);
    /// v.normalize_mut();
    /// assert_eq!(v, Vector::new([0.0, 0.6, 0.8]));
    /// ```
    pub fn normalize_mut(&mut self) {
        self.normalize_mut_with::<Runtime>()
    }

    /// [`normalize_mut`](Self::normalize_mut) using strategy `B`
    pub fn normalize_mut_with<B: Numerics>(&mut self) {
        let square = self
            .iter()
            .fold(num_traits::zero(), |acc: E::Value, &x| acc + x * x);
        #[cfg(feature = "tracing")]
        if square == num_traits::zero::<E::Value>() {
            tracing::trace!("normalizing a zero-length vector in place");
        }
        let inverse = B::rsqrt(square);
        self.unary_mut().apply(|x| x * inverse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::Portable;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_dot_implied_zero() {
        let a = Vector::new([1, 2, 3, 4]);
        let b = Vector::new([10, 20]);
        assert_eq!(a.dot(&b), 50);
        assert_eq!(b.dot(&a), 50);
        assert_eq!(a.dot_span(&a, 2..4), 25);
    }

    #[test]
    fn test_dot_converts_rhs_to_value_type() {
        let a = Vector::new([1i32, 1]);
        let b = Vector::new([2.9f32, 3.9]);
        assert_eq!(a.dot(&b), 5);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector::new([3.0f32, 4.0]).magnitude(), 5.0);
        assert_eq!(Vector::new([3i64, 4]).magnitude(), 5.0f64);
        assert_eq!(Vector::new([3.0f64, 4.0]).magnitude_with::<Portable>(), 5.0);
        assert_eq!(Vector::new([7.0f64, 3.0, 4.0]).magnitude_span(1..3), 5.0);
        assert_eq!(Vector::new([1, 2, 2]).square_magnitude(), 9);
        assert_eq!(Vector::new([1, 2, 2]).square_magnitude_span(1..9), 8);
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new([3.0f64, 0.0, 4.0]);
        let n = v.normalize();
        assert_relative_eq!(n[0], 0.6);
        assert_relative_eq!(n[2], 0.8);
        assert_relative_eq!(n.magnitude(), 1.0);
    }

    #[test]
    fn test_normalize_integers_produce_float() {
        let n = Vector::new([0i32, 5]).normalize();
        assert_eq!(n.into_inner(), [0.0f64, 1.0]);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vector::new([0.0f32, 0.0]).normalize();
        assert!(n.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_angle() {
        let x = Vector::new([1.0f64, 0.0, 0.0]);
        let xy = Vector::new([1.0f64, 1.0, 0.0]);
        assert_relative_eq!(x.angle(&xy), core::f64::consts::FRAC_PI_4, max_relative = 1e-12);
        assert_relative_eq!(x.angle_degrees(&xy), 45.0, max_relative = 1e-12);
        assert_relative_eq!(x.angle_cos(&xy), core::f64::consts::FRAC_1_SQRT_2, max_relative = 1e-12);
        assert_relative_eq!(
            x.angle_degrees_with::<Portable, _, 3>(&xy),
            45.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_angle_parallel_is_zero_not_nan() {
        let v = Vector::new([0.1f32, 0.2, 0.3]);
        let w = Vector::new([0.2f32, 0.4, 0.6]);
        let angle = v.angle(&w);
        assert!(!angle.is_nan());
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_angle_cos_large_magnitudes() {
        let a = Vector::new([1e10f32, 0.0]);
        let b = Vector::new([2e10f32, 0.0]);
        assert_relative_eq!(a.angle_cos(&b), 1.0, max_relative = 1e-6);
        assert_abs_diff_eq!(a.angle(&b), 0.0, epsilon = 1e-3);
        assert_relative_eq!(a.angle_cos_with::<Portable, _, 2>(&b), 1.0, max_relative = 1e-5);
    }

    #[test]
    fn test_cross() {
        let x = Vector::new([1, 0, 0]);
        let y = Vector::new([0, 1, 0]);
        assert_eq!(x.cross(&y).into_inner(), [0, 0, 1]);
        assert_eq!(y.cross(&x).into_inner(), [0, 0, -1]);
    }

    #[test]
    fn test_cross_of_two_dimensional_vectors() {
        let a = Vector::new([2.0f32, 0.0]);
        let b = Vector::new([0.0f32, 3.0]);
        assert_eq!(a.cross(&b).into_inner(), [0.0, 0.0, 6.0]);
    }

    #[test]
    fn test_cross_axes_out_of_range_reads_zero() {
        let a = Vector::new([1, 2]);
        let b = Vector::new([3, 4]);
        assert_eq!(a.cross_axes(&b, [0, 1, 7], [0, 1, 9]).into_inner(), [0, 0, -2]);
    }

    #[test]
    fn test_distance() {
        let a = Vector::new([1.0f64, 2.0]);
        let b = Vector::new([4.0f64, 6.0]);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.square_distance(&b), 25.0);
    }

    #[test]
    fn test_distance_unsigned_does_not_wrap() {
        let a = Vector::new([1u8, 10]);
        let b = Vector::new([4u8, 6]);
        assert_eq!(a.square_distance(&b), 25);
        assert_eq!(b.square_distance(&a), 25);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_distance_exceeding_value_type_range() {
        let origin = Vector::new([0u8, 0]);
        let far = Vector::new([20u8, 0]);
        assert_eq!(far.magnitude(), 20.0);
        assert_eq!(origin.distance(&far), 20.0);
        assert_eq!(far.distance(&origin), 20.0);

        let a = Vector::new([0i32]);
        let b = Vector::new([50_000i32]);
        assert_eq!(a.distance(&b), 50_000.0);
        assert_eq!(Vector::new([-50_000i32, 0]).distance(&b), 100_000.0);
    }

    #[test]
    fn test_distance_coverage() {
        let a = Vector::new([0.0f32, 0.0, 12.0]);
        let b = Vector::new([3.0f32, 4.0]);
        assert_eq!(a.distance_with::<Runtime, _, 2>(&b, Coverage::ContainedOnly), 5.0);
        assert_relative_eq!(
            a.distance_with::<Portable, _, 2>(&b, Coverage::IncludeNonContained),
            13.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_reflect() {
        let ray = Vector::new([1.0f64, -1.0, 0.0]);
        let n = Vector::new([0.0f64, 1.0, 0.0]);
        assert_eq!(ray.reflect(&n).into_inner(), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_normal_to_plane() {
        let a = Vector::new([0, 0, 0]);
        let b = Vector::new([2, 0, 0]);
        let c = Vector::new([0, 3, 0]);
        assert_eq!(a.normal_to_plane3(&b, &c).into_inner(), [0, 0, 6]);
        assert_eq!(a.unit_normal_to_plane3(&b, &c).into_inner(), [0.0f64, 0.0, 1.0]);
    }

    #[test]
    fn test_project() {
        let v = Vector::new([3.0f32, 4.0]);
        let onto = Vector::new([0.0f32, 2.0]);
        assert_eq!(v.project(&onto).into_inner(), [0.0, 4.0]);

        let p = Vector::new([1, 1]).project(&Vector::new([1, 0, 0]));
        assert_eq!(p.into_inner(), [1.0f64, 0.0, 0.0]);
    }

    #[test]
    fn test_project_onto_zero_is_nan() {
        let p = Vector::new([1.0f64, 2.0]).project(&Vector::new([0.0f64, 0.0]));
        assert!(p.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_project_plane() {
        let p = Vector::new([1.0f64, 2.0, 3.0]);
        let n = Vector::new([1.0f64, 0.0, 0.0]);
        assert_eq!(p.project_plane(&n).into_inner(), [0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_project_plane3() {
        let p = Vector::new([1.0f64, 2.0, 3.0]);
        let a = Vector::new([0.0f64, 0.0, 5.0]);
        let b = Vector::new([4.0f64, 0.0, 5.0]);
        let c = Vector::new([0.0f64, 4.0, 5.0]);
        let projected = p.project_plane3(&a, &b, &c);
        assert_abs_diff_eq!(projected[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(projected[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(projected[2], 0.0, epsilon = 1e-12);

        let portable = p.project_plane3_with::<Portable, _, _, _, 3, 3, 3>(&a, &b, &c);
        assert_abs_diff_eq!(portable[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_plane3_raw_integers() {
        let p = Vector::new([4, 5, 6]);
        let a = Vector::new([0, 0, 0]);
        let b = Vector::new([1, 0, 0]);
        let c = Vector::new([0, 1, 0]);
        assert_eq!(p.project_plane3_raw(&a, &b, &c).into_inner(), [4, 5, 0]);
    }

    #[test]
    fn test_normalize_mut_through_aliases() {
        let (mut x, mut y) = (6.0f64, 8.0f64);
        {
            let mut r = Vector::new([&mut x, &mut y]);
            r.normalize_mut_with::<Portable>();
        }
        assert_relative_eq!(x, 0.6);
        assert_relative_eq!(y, 0.8);
    }

    fn finite() -> impl Strategy<Value = f64> {
        -1e3f64..1e3
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_dot_self_is_square_magnitude(v in prop::array::uniform4(finite())) {
            let v = Vector::new(v);
            prop_assert_eq!(v.dot(&v), v.square_magnitude());
        }

        #[test]
        fn prop_normalized_has_unit_length(v in prop::array::uniform3(finite())) {
            let v = Vector::new(v);
            prop_assume!(v.magnitude() > 1e-6);
            let n = v.normalize();
            prop_assert!((n.magnitude() - 1.0).abs() < 1e-12);
            let p = v.normalize_with::<Portable>();
            prop_assert!((p.magnitude_with::<Portable>() - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_distance_symmetric(a in prop::array::uniform3(finite()), b in prop::array::uniform3(finite())) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            prop_assert_eq!(a.distance(&b), b.distance(&a));
        }

        #[test]
        fn prop_cross_orthogonal(a in prop::array::uniform3(finite()), b in prop::array::uniform3(finite())) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            let c = a.cross(&b);
            let scale = a.magnitude() * b.magnitude() * (a.magnitude() + b.magnitude()) + 1.0;
            prop_assert!(c.dot(&a).abs() <= scale * 1e-12);
            prop_assert!(c.dot(&b).abs() <= scale * 1e-12);
        }

        #[test]
        fn prop_strategies_agree_on_magnitude(v in prop::array::uniform3(finite())) {
            let v = Vector::new(v);
            let runtime = v.magnitude_with::<Runtime>();
            let portable = v.magnitude_with::<Portable>();
            prop_assert!((runtime - portable).abs() <= runtime * 4.0 * f64::EPSILON);
        }
    }
}
