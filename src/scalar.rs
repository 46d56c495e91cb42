//! Element type resolution
//!
//! Every vector element type maps to four roles, resolved entirely by the
//! trait system:
//!
//! | Role | Rust spelling |
//! |---|---|
//! | stored form | the element type `E` itself ([`Stored`]) |
//! | value form | [`Element::Value`] ([`ValueForm`]) |
//! | canonical form | [`Canonical`], the value form as an owned [`Scalar`] |
//! | preferred float | [`PreferredFloat`], the value form's [`Scalar::Float`] |
//!
//! Value-form vectors store primitives directly; reference-form vectors store
//! `&T` or `&mut T` aliases into storage owned elsewhere. Rust carries
//! qualifiers on the reference rather than on the referent, so stripping them
//! from the value form leaves the value form unchanged and the canonical form
//! coincides with it.
//!
//! Resolution never falls back to a runtime default: a type without an
//! [`Element`] implementation simply does not form a vector.

use core::fmt::Debug;

use num_traits::{AsPrimitive, Float, FloatConst, Num};

/// Numeric element type usable as a vector's value form
///
/// Integers nominate `f64` as their preferred floating-point form, floats
/// nominate themselves. Custom numeric types implement this trait together
/// with [`Element`] and [`ElementMut`] (with `Value = Self`) and pick their own
/// [`Scalar::Float`].
pub trait Scalar:
    Copy + Default + Debug + PartialOrd + Num + AsPrimitive<Self> + ElementMut<Value = Self> + 'static
{
    /// Floating type used for continuous results (magnitude, angles, division)
    type Float: FloatScalar;

    /// Converts into the preferred floating-point form
    fn to_float(self) -> Self::Float;

    /// Absolute value; identity for unsigned types
    fn absolute(self) -> Self;
}

/// Floating-point scalar: its own preferred float
pub trait FloatScalar: Scalar<Float = Self> + Float + FloatConst {}

/// Storage cell of a vector
///
/// Implemented by every [`Scalar`] (value form) and by `&T` / `&mut T` for
/// any scalar `T` (reference form).
pub trait Element {
    /// Logical element exposed through the accessors
    type Value: Scalar;

    /// `true` for aliasing (reference-form) cells
    const REFERENCE: bool;

    /// Borrows the logical value held or aliased by this cell
    fn value(&self) -> &Self::Value;
}

/// Storage cell whose value can be written through
pub trait ElementMut: Element {
    /// Mutably borrows the logical value held or aliased by this cell
    fn value_mut(&mut self) -> &mut Self::Value;
}

/// Stored form of `E`
pub type Stored<E> = E;

/// Value form of `E`
pub type ValueForm<E> = <E as Element>::Value;

/// Canonical (unqualified, owned) form of `E`, the default output element of
/// value-producing operations
pub type Canonical<E> = <E as Element>::Value;

/// Preferred floating-point form of `E`
pub type PreferredFloat<E> = <<E as Element>::Value as Scalar>::Float;

/// All four roles of an element type, resolved at compile time
///
/// ```
/// use trueno_fixed::TypeRoles;
///
/// fn preferred<E: TypeRoles>(x: E::PreferredFloat) -> E::PreferredFloat {
///     x
/// }
///
/// assert_eq!(preferred::<&u8>(0.5f64), 0.5);
/// ```
pub trait TypeRoles {
    /// Physically held per cell
    type Stored;
    /// Exposed through access
    type Value: Scalar;
    /// Default output of value-producing operations
    type Canonical: Scalar;
    /// Output of continuous operations
    type PreferredFloat: FloatScalar;
}

impl<E: Element> TypeRoles for E {
    type Stored = E;
    type Value = E::Value;
    type Canonical = E::Value;
    type PreferredFloat = <E::Value as Scalar>::Float;
}

/// Returns `true` if `E` is a reference-form element
pub const fn is_reference<E: Element>() -> bool {
    E::REFERENCE
}

impl<'a, T: Scalar> Element for &'a T {
    type Value = T;
    const REFERENCE: bool = true;

    #[inline]
    fn value(&self) -> &T {
        self
    }
}

impl<'a, T: Scalar> Element for &'a mut T {
    type Value = T;
    const REFERENCE: bool = true;

    #[inline]
    fn value(&self) -> &T {
        self
    }
}

impl<'a, T: Scalar> ElementMut for &'a mut T {
    #[inline]
    fn value_mut(&mut self) -> &mut T {
        self
    }
}

macro_rules! impl_value_element {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            type Value = $t;
            const REFERENCE: bool = false;

            #[inline]
            fn value(&self) -> &$t {
                self
            }
        }

        impl ElementMut for $t {
            #[inline]
            fn value_mut(&mut self) -> &mut $t {
                self
            }
        }
    )*};
}

macro_rules! impl_signed_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl_value_element!($t);

        impl Scalar for $t {
            type Float = f64;

            #[inline]
            fn to_float(self) -> f64 {
                self as f64
            }

            #[inline]
            fn absolute(self) -> Self {
                self.wrapping_abs()
            }
        }
    )*};
}

macro_rules! impl_unsigned_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl_value_element!($t);

        impl Scalar for $t {
            type Float = f64;

            #[inline]
            fn to_float(self) -> f64 {
                self as f64
            }

            #[inline]
            fn absolute(self) -> Self {
                self
            }
        }
    )*};
}

macro_rules! impl_float_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl_value_element!($t);

        impl Scalar for $t {
            type Float = $t;

            #[inline]
            fn to_float(self) -> $t {
                self
            }

            #[inline]
            fn absolute(self) -> Self {
                self.abs()
            }
        }

        impl FloatScalar for $t {}
    )*};
}

impl_signed_scalar!(i8, i16, i32, i64, i128, isize);
impl_unsigned_scalar!(u8, u16, u32, u64, u128, usize);
impl_float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn preferred<E: Element>() -> TypeId {
        TypeId::of::<PreferredFloat<E>>()
    }

    fn canonical<E: Element>() -> TypeId {
        TypeId::of::<Canonical<E>>()
    }

    #[test]
    fn test_integral_prefers_f64() {
        assert_eq!(preferred::<i8>(), TypeId::of::<f64>());
        assert_eq!(preferred::<u32>(), TypeId::of::<f64>());
        assert_eq!(preferred::<i64>(), TypeId::of::<f64>());
        assert_eq!(preferred::<usize>(), TypeId::of::<f64>());
    }

    #[test]
    fn test_floats_pass_through() {
        assert_eq!(preferred::<f32>(), TypeId::of::<f32>());
        assert_eq!(preferred::<f64>(), TypeId::of::<f64>());
    }

    #[test]
    fn test_reference_form_roles() {
        assert_eq!(canonical::<&f32>(), TypeId::of::<f32>());
        assert_eq!(canonical::<&'static mut i16>(), TypeId::of::<i16>());
        assert_eq!(preferred::<&u8>(), TypeId::of::<f64>());
        assert_eq!(preferred::<&'static mut f32>(), TypeId::of::<f32>());
    }

    #[test]
    fn test_type_roles_agree_with_aliases() {
        fn roles<E: TypeRoles>() -> [TypeId; 3] {
            [
                TypeId::of::<E::Value>(),
                TypeId::of::<E::Canonical>(),
                TypeId::of::<E::PreferredFloat>(),
            ]
        }
        let i = TypeId::of::<i32>();
        let f = TypeId::of::<f64>();
        assert_eq!(roles::<i32>(), [i, i, f]);
        assert_eq!(roles::<&'static i32>(), [i, i, f]);
        assert_eq!(roles::<f32>()[2], TypeId::of::<f32>());
    }

    #[test]
    fn test_reference_flag() {
        assert!(!is_reference::<f32>());
        assert!(!is_reference::<u64>());
        assert!(is_reference::<&f32>());
        assert!(is_reference::<&'static mut i32>());
    }

    #[test]
    fn test_element_access_through_alias() {
        let mut x = 5i32;
        {
            let cell: &mut i32 = &mut x;
            *cell.value_mut() += 2;
            assert_eq!(*cell.value(), 7);
        }
        assert_eq!(x, 7);
    }

    #[test]
    fn test_absolute() {
        assert_eq!((-3i32).absolute(), 3);
        assert_eq!(3u8.absolute(), 3);
        assert_eq!((-2.5f32).absolute(), 2.5);
        assert_eq!(i8::MIN.absolute(), i8::MIN);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(7u16.to_float(), 7.0f64);
        assert_eq!(1.5f32.to_float(), 1.5f32);
    }
}
