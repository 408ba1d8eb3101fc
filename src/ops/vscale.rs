//! Element-wise vector scaling: `output[i] = scale * input[i]`.
//!
//! One generic kernel body plus six monomorphic entry points, mirroring the
//! hardware boundary where each element type is a separately named symbol
//! with a statically fixed signature.
//!
//! # Design
//!
//! - Buffers are borrowed slices: the kernel never allocates or retains
//!   memory, and input/output overlap is unrepresentable through this API.
//! - Every element is computed independently; there is no cross-element
//!   dependency and an empty input is a no-op.
//! - Integer variants wrap silently on overflow; float variants follow
//!   IEEE-754.

use crate::error::KernelError;
use crate::traits::ScaleElement;
use crate::validation::validate_vscale_lens;

// ============================================================================
// Generic kernel body
// ============================================================================

/// Scale `input` into `output`: `output[i] = scale * input[i]`.
///
/// Lengths must agree; checked with `debug_assert` only, matching the
/// unvalidated hardware contract. Use [`vscale_checked`] for a reporting
/// variant.
#[inline(always)]
pub fn vscale<T: ScaleElement>(scale: T, input: &[T], output: &mut [T]) {
    debug_assert_eq!(input.len(), output.len());
    for (o, &x) in output.iter_mut().zip(input.iter()) {
        *o = scale.scale_by(x);
    }
}

/// In-place variant: `data[i] = scale * data[i]`.
#[inline(always)]
pub fn vscale_inplace<T: ScaleElement>(scale: T, data: &mut [T]) {
    for x in data.iter_mut() {
        *x = scale.scale_by(*x);
    }
}

/// Scale with length validation through the error channel.
///
/// A deliberate strengthening of the hardware contract, which leaves
/// mismatched buffer lengths undefined.
#[inline]
pub fn vscale_checked<T: ScaleElement>(
    scale: T,
    input: &[T],
    output: &mut [T],
) -> Result<(), KernelError> {
    validate_vscale_lens(input.len(), output.len()).map_err(KernelError::InvalidArguments)?;
    vscale(scale, input, output);
    Ok(())
}

// ============================================================================
// Monomorphic entry points (one per supported element type)
// ============================================================================

/// `vscale` over unsigned 32-bit elements. Overflow wraps.
#[inline(always)]
pub fn vscale_u32(scale: u32, input: &[u32], output: &mut [u32]) {
    vscale(scale, input, output);
}

/// `vscale` over signed 32-bit elements. Overflow wraps.
#[inline(always)]
pub fn vscale_i32(scale: i32, input: &[i32], output: &mut [i32]) {
    vscale(scale, input, output);
}

/// `vscale` over unsigned 64-bit elements. Overflow wraps.
#[inline(always)]
pub fn vscale_u64(scale: u64, input: &[u64], output: &mut [u64]) {
    vscale(scale, input, output);
}

/// `vscale` over signed 64-bit elements. Overflow wraps.
#[inline(always)]
pub fn vscale_i64(scale: i64, input: &[i64], output: &mut [i64]) {
    vscale(scale, input, output);
}

/// `vscale` over 32-bit float elements. IEEE-754 semantics.
#[inline(always)]
pub fn vscale_f32(scale: f32, input: &[f32], output: &mut [f32]) {
    vscale(scale, input, output);
}

/// `vscale` over 64-bit float elements. IEEE-754 semantics.
#[inline(always)]
pub fn vscale_f64(scale: f64, input: &[f64], output: &mut [f64]) {
    vscale(scale, input, output);
}
