//! Safe entry points for the three blend modes.

use crate::blend::alpha::blend_alpha as unsafe_blend_alpha;
use crate::blend::alpha_stencil::blend_alpha_stencil as unsafe_blend_alpha_stencil;
use crate::blend::stencil::blend_stencil as unsafe_blend_stencil;
use crate::pixel::BYTES_PER_PIXEL;
use likely_stable::unlikely;
use thiserror::Error;

/// Errors that can occur when validating buffers for the safe blend wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlendValidationError {
    /// The colour buffer length is not divisible by 4.
    #[error("Invalid colour buffer length: {0} is not divisible by 4")]
    InvalidColorLength(usize),

    /// The opacity source holds fewer bytes than the colour buffer.
    #[error("Opacity source too small: need at least {needed} bytes, got {actual}")]
    OpacitySourceTooSmall {
        /// Number of bytes required, the colour buffer length.
        needed: usize,
        /// Number of bytes the opacity source actually holds.
        actual: usize,
    },

    /// The stencil holds fewer bytes than the colour buffer.
    #[error("Stencil too small: need at least {needed} bytes, got {actual}")]
    StencilTooSmall {
        /// Number of bytes required, the colour buffer length.
        needed: usize,
        /// Number of bytes the stencil actually holds.
        actual: usize,
    },
}

/// Replaces the alpha byte of every pixel in `color` with the green byte of
/// the matching pixel in `opacity`.
///
/// `opacity` may be longer than `color`; the extra bytes are ignored.
///
/// # Errors
///
/// - [`BlendValidationError::InvalidColorLength`] if `color.len()` is not
///   divisible by 4
/// - [`BlendValidationError::OpacitySourceTooSmall`] if `opacity` holds fewer
///   bytes than `color`
pub fn blend_alpha(color: &mut [u8], opacity: &[u8]) -> Result<(), BlendValidationError> {
    if unlikely(!color.len().is_multiple_of(BYTES_PER_PIXEL)) {
        return Err(BlendValidationError::InvalidColorLength(color.len()));
    }

    if unlikely(opacity.len() < color.len()) {
        return Err(BlendValidationError::OpacitySourceTooSmall {
            needed: color.len(),
            actual: opacity.len(),
        });
    }

    // Safety: We've validated the buffer lengths above.
    unsafe {
        unsafe_blend_alpha(
            color.as_mut_ptr(),
            opacity.as_ptr(),
            color.len() / BYTES_PER_PIXEL,
        );
    }

    Ok(())
}

/// Replaces the alpha byte of every pixel in `color` with the green byte of
/// the matching pixel in `opacity` where the stencil red byte is >= 128, and
/// with 0 elsewhere.
///
/// `opacity` and `stencil` may be longer than `color`; the extra bytes are
/// ignored.
///
/// # Errors
///
/// - [`BlendValidationError::InvalidColorLength`] if `color.len()` is not
///   divisible by 4
/// - [`BlendValidationError::OpacitySourceTooSmall`] if `opacity` holds fewer
///   bytes than `color`
/// - [`BlendValidationError::StencilTooSmall`] if `stencil` holds fewer bytes
///   than `color`
pub fn blend_alpha_stencil(
    color: &mut [u8],
    opacity: &[u8],
    stencil: &[u8],
) -> Result<(), BlendValidationError> {
    if unlikely(!color.len().is_multiple_of(BYTES_PER_PIXEL)) {
        return Err(BlendValidationError::InvalidColorLength(color.len()));
    }

    if unlikely(opacity.len() < color.len()) {
        return Err(BlendValidationError::OpacitySourceTooSmall {
            needed: color.len(),
            actual: opacity.len(),
        });
    }

    if unlikely(stencil.len() < color.len()) {
        return Err(BlendValidationError::StencilTooSmall {
            needed: color.len(),
            actual: stencil.len(),
        });
    }

    // Safety: We've validated the buffer lengths above.
    unsafe {
        unsafe_blend_alpha_stencil(
            color.as_mut_ptr(),
            opacity.as_ptr(),
            stencil.as_ptr(),
            color.len() / BYTES_PER_PIXEL,
        );
    }

    Ok(())
}

/// Replaces the alpha byte of every pixel in `color` with 255 where the
/// stencil red byte is >= 128, and with 0 elsewhere.
///
/// `stencil` may be longer than `color`; the extra bytes are ignored.
///
/// # Errors
///
/// - [`BlendValidationError::InvalidColorLength`] if `color.len()` is not
///   divisible by 4
/// - [`BlendValidationError::StencilTooSmall`] if `stencil` holds fewer bytes
///   than `color`
pub fn blend_stencil(color: &mut [u8], stencil: &[u8]) -> Result<(), BlendValidationError> {
    if unlikely(!color.len().is_multiple_of(BYTES_PER_PIXEL)) {
        return Err(BlendValidationError::InvalidColorLength(color.len()));
    }

    if unlikely(stencil.len() < color.len()) {
        return Err(BlendValidationError::StencilTooSmall {
            needed: color.len(),
            actual: stencil.len(),
        });
    }

    // Safety: We've validated the buffer lengths above.
    unsafe {
        unsafe_blend_stencil(
            color.as_mut_ptr(),
            stencil.as_ptr(),
            color.len() / BYTES_PER_PIXEL,
        );
    }

    Ok(())
}
