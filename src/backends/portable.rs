//! Portable backend implementation
//!
//! Uses only IEEE-754 `+ - * /`, so results are bit-identical on every
//! target and never touch the platform libm. Slower than [`super::Runtime`];
//! intended for reproducible pipelines and as a correctness reference.

use super::Numerics;
use crate::scalar::FloatScalar;

/// Iteration cap shared by the Newton and series loops
const MAX_ITERATIONS: usize = 64;

/// Deterministic strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Portable;

impl Numerics for Portable {
    const NAME: &'static str = "portable";

    fn sqrt<F: FloatScalar>(x: F) -> F {
        if x.is_nan() || x < F::zero() {
            return F::nan();
        }
        if x == F::zero() || x.is_infinite() {
            return x;
        }

        // x = m * 2^e, so sqrt(x) is near 2^((e + bits(m)) / 2)
        let (mantissa, exponent, _) = x.integer_decode();
        let bits = 64 - mantissa.leading_zeros() as i32;
        let two = F::one() + F::one();
        let mut guess = two.powi((i32::from(exponent) + bits) / 2);

        // One step lands at or above the root; from there the sequence
        // decreases monotonically until rounding stalls it.
        guess = (guess + x / guess) / two;
        for _ in 0..MAX_ITERATIONS {
            let next = (guess + x / guess) / two;
            if next >= guess {
                break;
            }
            guess = next;
        }
        guess
    }

    fn acos<F: FloatScalar>(x: F) -> F {
        if x.is_nan() || x > F::one() || x < -F::one() {
            return F::nan();
        }
        // acos(x) = 2 atan(sqrt((1 - x) / (1 + x)))
        let t = Self::sqrt((F::one() - x) / (F::one() + x));
        let two = F::one() + F::one();
        two * atan_non_negative(t)
    }
}

/// Arctangent for `t >= 0`, including `+inf`
fn atan_non_negative<F: FloatScalar>(t: F) -> F {
    if t.is_infinite() {
        return F::FRAC_PI_2();
    }
    if t > F::one() {
        return F::FRAC_PI_2() - atan_non_negative(F::one() / t);
    }

    // atan(t) = 2 atan(t / (1 + sqrt(1 + t^2))); twice brings t under 0.2
    let mut reduced = t;
    let mut scale = F::one();
    for _ in 0..2 {
        reduced = reduced / (F::one() + Portable::sqrt(F::one() + reduced * reduced));
        scale = scale + scale;
    }

    // Alternating series t - t^3/3 + t^5/5 - ...
    let square = reduced * reduced;
    let two = F::one() + F::one();
    let mut power = reduced;
    let mut denominator = F::one();
    let mut sum = F::zero();
    for k in 0..MAX_ITERATIONS {
        let term = power / denominator;
        if term.abs() <= F::epsilon() * sum.abs() {
            break;
        }
        sum = if k % 2 == 0 { sum + term } else { sum - term };
        power = power * square;
        denominator = denominator + two;
    }
    scale * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_perfect_squares() {
        for n in 1..200u32 {
            let x = f64::from(n * n);
            let root = f64::from(n);
            assert!((Portable::sqrt(x) - root).abs() <= root * f64::EPSILON);
        }
    }

    #[test]
    fn test_sqrt_special_values() {
        assert!(Portable::sqrt(-4.0f32).is_nan());
        assert!(Portable::sqrt(f64::NAN).is_nan());
        assert_eq!(Portable::sqrt(0.0f64), 0.0);
        assert_eq!(Portable::sqrt(f32::INFINITY), f32::INFINITY);
    }

    #[test]
    fn test_sqrt_tiny_and_huge() {
        assert_relative_eq!(Portable::sqrt(1e-300f64), 1e-150, max_relative = 1e-15);
        assert_relative_eq!(Portable::sqrt(1e300f64), 1e150, max_relative = 1e-15);
        assert_relative_eq!(Portable::sqrt(2.0f32), core::f32::consts::SQRT_2, max_relative = 1e-6);
    }

    #[test]
    fn test_acos_landmarks() {
        use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};
        assert_eq!(Portable::acos(1.0f64), 0.0);
        assert_relative_eq!(Portable::acos(-1.0f64), PI, max_relative = 1e-14);
        assert_relative_eq!(Portable::acos(0.0f64), FRAC_PI_2, max_relative = 1e-14);
        assert_relative_eq!(Portable::acos(0.5f64), FRAC_PI_3, max_relative = 1e-14);
    }

    #[test]
    fn test_acos_out_of_domain() {
        assert!(Portable::acos(1.0001f64).is_nan());
        assert!(Portable::acos(-2.0f32).is_nan());
        assert!(Portable::acos(f32::NAN).is_nan());
    }

    #[test]
    fn test_atan_reduction() {
        assert_relative_eq!(atan_non_negative(1.0f64), core::f64::consts::FRAC_PI_4, max_relative = 1e-14);
        assert_relative_eq!(atan_non_negative(1e6f64), 1e6f64.atan(), max_relative = 1e-14);
        assert_eq!(atan_non_negative(0.0f64), 0.0);
    }
}
