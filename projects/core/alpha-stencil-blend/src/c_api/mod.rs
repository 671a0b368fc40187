//! C exports for the blend kernels.
//!
//! All functions here follow the `asbcore_` prefix convention and report
//! failures through [`AsbResult`] rather than panicking across the FFI
//! boundary. Pointers are null checked before any buffer is touched.

pub mod blend;
pub mod blend_modes;

/// Error codes returned by the C API.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsbErrorCode {
    /// The operation completed successfully.
    Success = 0,
    /// The colour buffer pointer was null.
    NullColorPointer = 1,
    /// The opacity source pointer was null.
    NullOpacityPointer = 2,
    /// The stencil pointer was null.
    NullStencilPointer = 3,
}

/// Result type returned by all C API blend functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsbResult {
    /// The error code. [`AsbErrorCode::Success`] means the call succeeded.
    pub error_code: AsbErrorCode,
}

impl AsbResult {
    /// Creates a success result.
    pub(crate) fn success() -> Self {
        Self {
            error_code: AsbErrorCode::Success,
        }
    }

    /// Creates a result carrying the given error code.
    pub(crate) fn from_error_code(error_code: AsbErrorCode) -> Self {
        Self { error_code }
    }

    /// Returns true if the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.error_code == AsbErrorCode::Success
    }
}
