//! Zero-cost validation utilities for kernel parameters.
//!
//! All validation functions return `Result<(), String>` so each caller can map
//! failures into its own error type while sharing the checks.

/// Validate that input and output buffers agree in length.
#[inline]
pub fn validate_vscale_lens(input_len: usize, output_len: usize) -> Result<(), String> {
    if input_len != output_len {
        return Err(format!(
            "input length {} does not match output length {}",
            input_len, output_len
        ));
    }
    Ok(())
}
