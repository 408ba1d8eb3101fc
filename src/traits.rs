//! Element trait for the vector-scale kernel.
//!
//! Provides a unified interface for the product operation across the six
//! supported element types. Compile-time monomorphization, zero runtime
//! overhead.

use std::fmt::Debug;

/// Core element trait for the scale kernels.
///
/// Implemented for `u32`, `i32`, `u64`, `i64`, `f32` and `f64`. The single
/// arithmetic method carries each type's native product semantics: integer
/// types wrap silently on overflow, float types follow IEEE-754 (rounding,
/// infinities and NaNs propagate).
pub trait ScaleElement:
    Debug + Clone + Copy + Send + Sync + Default + PartialEq + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// `self * factor` under the type's native multiplication.
    fn scale_by(self, factor: Self) -> Self;
}

macro_rules! impl_scale_element_int {
    ($($t:ty),*) => {$(
        impl ScaleElement for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn scale_by(self, factor: Self) -> Self {
                self.wrapping_mul(factor)
            }
        }
    )*};
}

macro_rules! impl_scale_element_float {
    ($($t:ty),*) => {$(
        impl ScaleElement for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline(always)]
            fn scale_by(self, factor: Self) -> Self {
                self * factor
            }
        }
    )*};
}

impl_scale_element_int!(u32, i32, u64, i64);
impl_scale_element_float!(f32, f64);
