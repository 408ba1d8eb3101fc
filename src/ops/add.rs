//! Scalar 32-bit addition kernel.
//!
//! The simplest kernel at the harness boundary: two unsigned 32-bit inputs,
//! one caller-owned output slot, wraparound on overflow. The hardware build
//! of this kernel prints its inputs and output; here the trace is an
//! injectable sink so harnesses can capture or drop it.

use std::io::{self, Write};

/// Wrapping 32-bit addition: `(a + b) mod 2^32`.
///
/// Cannot fail for any pair of inputs; overflow wraps silently.
#[inline(always)]
pub fn add_u32(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Wrapping 32-bit addition written into a caller-owned slot.
#[inline(always)]
pub fn add_u32_into(a: u32, b: u32, out: &mut u32) {
    *out = add_u32(a, b);
}

/// Wrapping 32-bit addition with the three-line diagnostic trace.
///
/// Writes `in_0: <a>`, `in_1: <b>` and `out[0]: <sum>` to `sink`, matching
/// the trace the hardware kernel emits, then returns the sum.
pub fn add_u32_traced<W: Write>(a: u32, b: u32, sink: &mut W) -> io::Result<u32> {
    let out = add_u32(a, b);
    writeln!(sink, "in_0: {}", a)?;
    writeln!(sink, "in_1: {}", b)?;
    writeln!(sink, "out[0]: {}", out)?;
    Ok(out)
}
