//! Trueno Fixed: compile-time sized numeric vectors
//!
//! **Trueno Fixed** provides [`Vector<E, N>`], a fixed-dimension tuple of
//! homogeneous numeric elements whose size and element type are both part of
//! the type. On top of it sit:
//!
//! 1. **Broadcast dispatch** - every elementwise operation pairs a vector with
//!    another vector of any size or with a scalar, chooses its output size and
//!    element type independently, and can be restricted to a sub-range
//! 2. **Operation set** - arithmetic, bitwise, rounding, min/max/clamp/lerp,
//!    reductions and comparisons, all built on the one dispatcher
//! 3. **Vector math** - dot, magnitude, normalize, cross, project, reflect,
//!    distance and angle, each with a selectable numeric strategy
//!
//! # Design Principles
//!
//! - **Sizes are types**: out-of-range constant indices and mismatched
//!   concatenations fail to build
//! - **Implied zeros**: reading past the end of a vector yields zero, so
//!   vectors of different sizes combine without padding by hand
//! - **Reference form**: `Vector<&mut T, N>` aliases other storage and every
//!   write goes through to it
//! - **One contract, two strategies**: [`Runtime`] uses platform math,
//!   [`Portable`] is bit-reproducible everywhere
//!
//! # Quick Start
//!
//! ```rust
//! use trueno_fixed::{Span, Vector};
//!
//! let a = Vector::new([1.0f32, 2.0, 3.0, 4.0]);
//! let b = Vector::new([5.0f32, 6.0]);
//!
//! // `b` is extended with implied zeros
//! assert_eq!(a + b, Vector::new([6.0, 8.0, 3.0, 4.0]));
//!
//! // Output size and type chosen per call, sub-range only
//! let out: Vector<f64, 3> = a.broadcast(&b).span(Span::copy(0..1)).mul();
//! assert_eq!(out, Vector::new([5.0, 2.0, 3.0]));
//!
//! assert_eq!(Vector::new([3, 4]).magnitude(), 5.0);
//! ```
//!
//! # Features
//!
//! - `tracing`: spans on the vector-math algorithms and trace events for
//!   degenerate input (zero-length normalization or projection)

pub mod access;
pub mod backends;
pub mod compare;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod ops;
pub mod scalar;
pub mod shuffle;
pub mod vector;

pub use access::Theoretical;
pub use backends::{Numerics, Portable, Runtime};
pub use compare::{Comparand, Comparison, Squared, Tolerance};
pub use dispatch::{
    Broadcast, Broadcast3, BroadcastAssign, BroadcastAssign3, Coverage, Operand, Span, Splat, Unary,
    UnaryAssign,
};
pub use error::{Result, VectorError};
pub use ops::{Bitwise, Negatable};
pub use scalar::{
    Canonical, Element, ElementMut, FloatScalar, PreferredFloat, Scalar, Stored, TypeRoles, ValueForm,
};
pub use vector::{Vec2, Vec3, Vec4, Vector};

/// Glob-importable set of the commonly used items
///
/// ```
/// use trueno_fixed::prelude::*;
///
/// let v: Vec3<f64> = Vector::new([1.0, 2.0, 2.0]);
/// assert!(v.cmp_near(&3.0));
/// ```
pub mod prelude {
    pub use crate::{
        Comparison, Coverage, Element, ElementMut, FloatScalar, Numerics, Operand, Portable, Runtime, Scalar,
        Span, Splat, Squared, Tolerance, Vec2, Vec3, Vec4, Vector, VectorError,
    };
}
