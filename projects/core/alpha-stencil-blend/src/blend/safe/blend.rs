//! Combined safe entry point that picks the blend mode from which sources
//! are present.

use super::blend_modes::{blend_alpha, blend_alpha_stencil, blend_stencil, BlendValidationError};
use crate::pixel::BYTES_PER_PIXEL;
use likely_stable::unlikely;

/// Applies the blend matching the sources provided.
///
/// | `opacity`  | `stencil`  | Effect on each colour pixel's alpha byte        |
/// |------------|------------|-------------------------------------------------|
/// | `Some(..)` | `None`     | opacity green                                   |
/// | `Some(..)` | `Some(..)` | opacity green where stencil red >= 128, else 0  |
/// | `None`     | `Some(..)` | 255 where stencil red >= 128, else 0            |
/// | `None`     | `None`     | untouched, the call is a no-op                  |
///
/// # Errors
///
/// - [`BlendValidationError::InvalidColorLength`] if `color.len()` is not
///   divisible by 4
/// - [`BlendValidationError::OpacitySourceTooSmall`] if a provided `opacity`
///   holds fewer bytes than `color`
/// - [`BlendValidationError::StencilTooSmall`] if a provided `stencil` holds
///   fewer bytes than `color`
pub fn blend(
    color: &mut [u8],
    opacity: Option<&[u8]>,
    stencil: Option<&[u8]>,
) -> Result<(), BlendValidationError> {
    match (opacity, stencil) {
        (Some(opacity), Some(stencil)) => blend_alpha_stencil(color, opacity, stencil),
        (Some(opacity), None) => blend_alpha(color, opacity),
        (None, Some(stencil)) => blend_stencil(color, stencil),
        (None, None) => {
            if unlikely(!color.len().is_multiple_of(BYTES_PER_PIXEL)) {
                return Err(BlendValidationError::InvalidColorLength(color.len()));
            }

            Ok(())
        }
    }
}
