//! End-to-end tests across the kernel entry points.
//!
//! Exercises every monomorphic entry point through both the safe API and the
//! C-ABI exports, the way a harness driving the test bitstream would call
//! them.

use vscale_kernels::{
    add_u32_traced, ffi, vscale_checked, vscale_f32, vscale_f64, vscale_i32, vscale_i64,
    vscale_u32, vscale_u64, KernelError,
};

#[test]
fn all_six_entry_points_scale() {
    let mut out_u32 = [0u32; 3];
    vscale_u32(2, &[1, 2, 3], &mut out_u32);
    assert_eq!(out_u32, [2, 4, 6]);

    let mut out_i32 = [0i32; 3];
    vscale_i32(-2, &[1, 2, 3], &mut out_i32);
    assert_eq!(out_i32, [-2, -4, -6]);

    let mut out_u64 = [0u64; 3];
    vscale_u64(1 << 40, &[1, 2, 3], &mut out_u64);
    assert_eq!(out_u64, [1 << 40, 2 << 40, 3 << 40]);

    let mut out_i64 = [0i64; 3];
    vscale_i64(-1, &[i64::MIN, 0, 5], &mut out_i64);
    assert_eq!(out_i64, [i64::MIN, 0, -5]);

    let mut out_f32 = [0.0f32; 3];
    vscale_f32(0.5, &[2.0, -4.0, 8.0], &mut out_f32);
    assert_eq!(out_f32, [1.0, -2.0, 4.0]);

    let mut out_f64 = [0.0f64; 3];
    vscale_f64(2.5, &[1.0, -2.0, 0.0], &mut out_f64);
    assert_eq!(out_f64, [2.5, -5.0, 0.0]);
}

#[test]
fn ffi_exports_match_safe_api() {
    let input = [7u32, 3_000_000_000, 0];
    let mut via_ffi = [0u32; 3];
    let mut via_safe = [0u32; 3];

    unsafe { ffi::vscale_u32(3, 2, input.as_ptr(), via_ffi.as_mut_ptr()) };
    vscale_u32(2, &input, &mut via_safe);

    assert_eq!(via_ffi, via_safe);
    assert_eq!(via_ffi[1], 1_705_032_704);
}

#[test]
fn ffi_add_roundtrip() {
    let mut out = 0u32;
    unsafe { ffi::add(40, 2, &mut out) };
    assert_eq!(out, 42);

    unsafe { ffi::add(u32::MAX, 1, &mut out) };
    assert_eq!(out, 0);
}

#[test]
fn traced_add_emits_harness_lines() {
    let mut sink = Vec::new();
    let out = add_u32_traced(11, 31, &mut sink).unwrap();

    assert_eq!(out, 42);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "in_0: 11\nin_1: 31\nout[0]: 42\n"
    );
}

#[test]
fn checked_variant_reports_mismatch() {
    let input = [1u32, 2, 3];
    let mut output = [0u32; 2];

    match vscale_checked(2, &input, &mut output) {
        Err(KernelError::InvalidArguments(msg)) => {
            assert!(msg.contains("3"));
            assert!(msg.contains("2"));
        }
        other => panic!("expected InvalidArguments, got {:?}", other),
    }
}

#[test]
fn reinvocation_is_identical() {
    let input = [0.1f64, 0.2, 0.3];
    let mut first = [0.0f64; 3];
    let mut second = [0.0f64; 3];

    vscale_f64(3.7, &input, &mut first);
    vscale_f64(3.7, &input, &mut second);

    assert_eq!(first, second);
}
