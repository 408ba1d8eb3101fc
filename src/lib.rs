//! vscale-kernels: CPU reference kernels for hardware-acceleration harnesses.
//!
//! Two stateless kernels matched to an FPGA test bitstream:
//! - **Add**: wrapping unsigned 32-bit addition into a caller-owned slot
//! - **VectorScale**: `output[i] = scale * input[i]` over six element types
//!   (`u32`, `i32`, `u64`, `i64`, `f32`, `f64`)
//!
//! # Design
//!
//! - **Caller-owned buffers**: every kernel works on borrowed slices; nothing
//!   is allocated or retained across calls, and all calls are re-entrant.
//! - **One symbol per type**: the hardware boundary needs statically fixed,
//!   unparameterized signatures, so the generic kernel body is instantiated
//!   into six named entry points (and matching C-ABI exports in [`ffi`]).
//! - **Native arithmetic**: integer kernels wrap silently on overflow, float
//!   kernels follow IEEE-754. No kernel has a failure path; the checked
//!   variants only report caller-side length mismatches.
//!
//! # Quick Start
//!
//! ```
//! use vscale_kernels::{add_u32, vscale_f64};
//!
//! assert_eq!(add_u32(u32::MAX, 1), 0);
//!
//! let input = [1.0, -2.0, 0.0];
//! let mut output = [0.0; 3];
//! vscale_f64(2.5, &input, &mut output);
//! assert_eq!(output, [2.5, -5.0, 0.0]);
//! ```

pub mod error;
pub mod ffi;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::KernelError;
pub use traits::ScaleElement;

pub use ops::add::{add_u32, add_u32_into, add_u32_traced};
pub use ops::vscale::{
    vscale, vscale_checked, vscale_inplace, vscale_f32, vscale_f64, vscale_i32, vscale_i64,
    vscale_u32, vscale_u64,
};
