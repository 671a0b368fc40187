//! Error types for blend operations.

use thiserror::Error;

/// Errors that can occur during blend operations.
#[derive(Debug, Error)]
pub enum BlendError {
    /// The colour buffer length is invalid (must be divisible by 4).
    #[error("Invalid colour length: {0} bytes. Must be divisible by 4 (RGBA8888 pixel size).")]
    InvalidColorLength(usize),

    /// The opacity source is too small for the colour buffer.
    #[error("Opacity source too small: need {needed} bytes, but only {actual} bytes available.")]
    OpacitySourceTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The stencil is too small for the colour buffer.
    #[error("Stencil too small: need {needed} bytes, but only {actual} bytes available.")]
    StencilTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },
}
