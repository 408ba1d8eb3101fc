//! Error type for the checked kernel entry points.
//!
//! The kernels themselves cannot fail; only caller-misuse conditions that the
//! checked API chooses to detect appear here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Buffer lengths or element counts do not agree.
    #[error("invalid kernel arguments: {0}")]
    InvalidArguments(String),
}
