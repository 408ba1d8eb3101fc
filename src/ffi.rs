//! C-ABI entry points for the harness boundary.
//!
//! The hardware toolchain links each kernel as a separately named symbol with
//! a statically fixed, unparameterized signature, so every element type gets
//! its own exported function here. The element count travels as a separate
//! 32-bit value the way the bitstream interface passes it.
//!
//! # Safety
//!
//! Buffer pointers must be valid for `size` elements of the declared type and
//! must not overlap; neither property is validated. A zero `size` returns
//! without touching the pointers, and null pointers are dropped with a
//! warning rather than dereferenced.

use std::slice;

use crate::ops::add::add_u32;
use crate::ops::vscale::vscale;
use crate::traits::ScaleElement;

/// Wrapping 32-bit addition through the C boundary: `*out = in_0 + in_1`.
///
/// The hardware build prints its inputs and output on stdout; here the same
/// three lines go through the `log` facade instead.
///
/// # Safety
///
/// `out` must be a valid, writable pointer to a single `u32`.
#[no_mangle]
pub unsafe extern "C" fn add(in_0: u32, in_1: u32, out: *mut u32) {
    if out.is_null() {
        log::warn!("add: null output pointer, dropping call");
        return;
    }
    let sum = add_u32(in_0, in_1);
    log::debug!("in_0: {}", in_0);
    log::debug!("in_1: {}", in_1);
    log::debug!("out[0]: {}", sum);
    *out = sum;
}

#[inline(always)]
unsafe fn vscale_raw<T: ScaleElement>(size: u32, scale: T, input: *const T, output: *mut T) {
    let input = slice::from_raw_parts(input, size as usize);
    let output = slice::from_raw_parts_mut(output, size as usize);
    vscale(scale, input, output);
}

macro_rules! ffi_vscale {
    ($name:ident, $t:ty) => {
        /// `output[i] = scale * input[i]` for `size` elements.
        ///
        /// # Safety
        ///
        /// `input` and `output` must be valid for `size` elements and must
        /// not overlap.
        #[no_mangle]
        pub unsafe extern "C" fn $name(size: u32, scale: $t, input: *const $t, output: *mut $t) {
            if size == 0 {
                return;
            }
            if input.is_null() || output.is_null() {
                log::warn!(concat!(stringify!($name), ": null buffer pointer, dropping call"));
                return;
            }
            vscale_raw(size, scale, input, output);
        }
    };
}

ffi_vscale!(vscale_u32, u32);
ffi_vscale!(vscale_i32, i32);
ffi_vscale!(vscale_u64, u64);
ffi_vscale!(vscale_i64, i64);
ffi_vscale!(vscale_f32, f32);
ffi_vscale!(vscale_f64, f64);

#[cfg(test)]
mod tests {
    #[test]
    fn test_add_writes_slot() {
        let mut out = 0u32;
        unsafe { super::add(u32::MAX, 1, &mut out) };
        assert_eq!(out, 0);
    }

    #[test]
    fn test_add_null_out_is_dropped() {
        unsafe { super::add(1, 2, std::ptr::null_mut()) };
    }

    #[test]
    fn test_vscale_u32_through_ffi() {
        let input = [3_000_000_000u32, 5];
        let mut output = [0u32; 2];

        unsafe { super::vscale_u32(2, 2, input.as_ptr(), output.as_mut_ptr()) };

        assert_eq!(output, [1_705_032_704, 10]);
    }

    #[test]
    fn test_vscale_zero_size_ignores_pointers() {
        unsafe { super::vscale_f64(0, 2.5, std::ptr::null(), std::ptr::null_mut()) };
    }

    #[test]
    fn test_vscale_partial_buffer() {
        // size may cover a prefix of the allocation; the tail is untouched
        let input = [1i64, 2, 3, 4];
        let mut output = [0i64; 4];

        unsafe { super::vscale_i64(2, -3, input.as_ptr(), output.as_mut_ptr()) };

        assert_eq!(output, [-3, -6, 0, 0]);
    }
}
