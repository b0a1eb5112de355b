// Copyright 2026 the Carousel Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small scalar abstraction over `f32`/`f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type used for extents, offsets, and scroll positions.
///
/// Implemented for `f32` and `f64`. Everything the crate needs from a float
/// lives here, so the crate stays `no_std` without a math backend.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Positive infinity, used as the "disabled distance scaling" sentinel.
    fn infinity() -> Self;

    /// Converts an index or count into a scalar.
    fn from_usize(v: usize) -> Self;

    /// Returns `true` if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` if this value has a negative sign, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Minimum of two values.
    fn min(self, other: Self) -> Self;

    /// Maximum of two values.
    fn max(self, other: Self) -> Self;

    /// Largest integer less than or equal to this value, as an `isize`.
    fn floor_to_isize(self) -> isize;

    /// This value rounded to the nearest integer (half away from zero rounds
    /// up), as an `isize`.
    fn round_to_isize(self) -> isize;
}

macro_rules! impl_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn infinity() -> Self {
                Self::INFINITY
            }

            fn from_usize(v: usize) -> Self {
                v as Self
            }

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn is_sign_negative(self) -> bool {
                <$t>::is_sign_negative(self)
            }

            fn abs(self) -> Self {
                // Branch instead of the inherent method so no math backend is
                // required on `no_std` targets.
                if self.is_sign_negative() { -self } else { self }
            }

            fn min(self, other: Self) -> Self {
                <$t>::min(self, other)
            }

            fn max(self, other: Self) -> Self {
                <$t>::max(self, other)
            }

            fn floor_to_isize(self) -> isize {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "`as` saturates; callers clamp indices to bounds afterwards"
                )]
                let truncated = self as isize;
                // `as` truncates toward zero; correct downwards for negative
                // non-integer values.
                if self < truncated as Self {
                    truncated - 1
                } else {
                    truncated
                }
            }

            fn round_to_isize(self) -> isize {
                (self + 0.5).floor_to_isize()
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn floor_and_round_handle_negatives() {
        assert_eq!(2.7_f32.floor_to_isize(), 2);
        assert_eq!((-2.7_f32).floor_to_isize(), -3);
        assert_eq!((-3.0_f32).floor_to_isize(), -3);
        assert_eq!(2.5_f32.round_to_isize(), 3);
        assert_eq!(2.4_f64.round_to_isize(), 2);
        assert_eq!((-0.4_f64).round_to_isize(), 0);
        assert_eq!((-0.6_f64).round_to_isize(), -1);
    }

    #[test]
    fn abs_without_a_math_backend() {
        assert_eq!((-4.0_f32).abs(), 4.0);
        assert_eq!(4.0_f64.abs(), 4.0);
        assert_eq!((-0.0_f32).abs(), 0.0);
    }
}
