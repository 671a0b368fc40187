//! Slice based blend operations.
//!
//! These functions validate buffer lengths up front and then hand the
//! buffers to the fastest kernel available on the current CPU.

use crate::error::BlendError;
use alpha_stencil_blend::{
    blend_alpha as core_blend_alpha, blend_alpha_stencil as core_blend_alpha_stencil,
    blend_stencil as core_blend_stencil,
};

/// Replace the alpha byte of every pixel in `color` with the green byte of
/// the matching pixel in `opacity`.
///
/// Red, green and blue bytes of `color` pass through untouched. `opacity`
/// may be longer than `color`; the extra bytes are ignored.
///
/// # Parameters
///
/// - `color`: The RGBA8888 colour buffer, rewritten in place
/// - `opacity`: The RGBA8888 opacity source
///
/// # Returns
///
/// [`Ok`] on success, or an error if validation fails.
///
/// # Errors
///
/// - [`BlendError::InvalidColorLength`] if `color` length is not divisible by 4
/// - [`BlendError::OpacitySourceTooSmall`] if `opacity` is smaller than `color`
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use alpha_stencil_blend_api::blend_alpha;
/// let mut color = vec![0u8; 4 * 100]; // 100 RGBA8888 pixels
/// let opacity = vec![0u8; 4 * 100];
///
/// blend_alpha(&mut color, &opacity)?;
/// # Ok(())
/// # }
/// ```
pub fn blend_alpha(color: &mut [u8], opacity: &[u8]) -> Result<(), BlendError> {
    // Validate colour buffer length
    if color.len() % 4 != 0 {
        return Err(BlendError::InvalidColorLength(color.len()));
    }

    // Validate opacity source size
    if opacity.len() < color.len() {
        return Err(BlendError::OpacitySourceTooSmall {
            needed: color.len(),
            actual: opacity.len(),
        });
    }

    // Safety: We've validated all preconditions
    unsafe {
        core_blend_alpha(color.as_mut_ptr(), opacity.as_ptr(), color.len() / 4);
    }

    Ok(())
}

/// Replace the alpha byte of every pixel in `color` with the green byte of
/// the matching pixel in `opacity` where the stencil marks the pixel opaque
/// (red >= 128), and with 0 elsewhere.
///
/// `opacity` and `stencil` may be longer than `color`; the extra bytes are
/// ignored.
///
/// # Parameters
///
/// - `color`: The RGBA8888 colour buffer, rewritten in place
/// - `opacity`: The RGBA8888 opacity source
/// - `stencil`: The RGBA8888 stencil deciding which pixels stay visible
///
/// # Returns
///
/// [`Ok`] on success, or an error if validation fails.
///
/// # Errors
///
/// - [`BlendError::InvalidColorLength`] if `color` length is not divisible by 4
/// - [`BlendError::OpacitySourceTooSmall`] if `opacity` is smaller than `color`
/// - [`BlendError::StencilTooSmall`] if `stencil` is smaller than `color`
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use alpha_stencil_blend_api::blend_alpha_stencil;
/// let mut color = vec![0u8; 4 * 100]; // 100 RGBA8888 pixels
/// let opacity = vec![0u8; 4 * 100];
/// let stencil = vec![255u8; 4 * 100];
///
/// blend_alpha_stencil(&mut color, &opacity, &stencil)?;
/// # Ok(())
/// # }
/// ```
pub fn blend_alpha_stencil(
    color: &mut [u8],
    opacity: &[u8],
    stencil: &[u8],
) -> Result<(), BlendError> {
    // Validate colour buffer length
    if color.len() % 4 != 0 {
        return Err(BlendError::InvalidColorLength(color.len()));
    }

    // Validate opacity source size
    if opacity.len() < color.len() {
        return Err(BlendError::OpacitySourceTooSmall {
            needed: color.len(),
            actual: opacity.len(),
        });
    }

    // Validate stencil size
    if stencil.len() < color.len() {
        return Err(BlendError::StencilTooSmall {
            needed: color.len(),
            actual: stencil.len(),
        });
    }

    // Safety: We've validated all preconditions
    unsafe {
        core_blend_alpha_stencil(
            color.as_mut_ptr(),
            opacity.as_ptr(),
            stencil.as_ptr(),
            color.len() / 4,
        );
    }

    Ok(())
}

/// Replace the alpha byte of every pixel in `color` with 255 where the
/// stencil marks the pixel opaque (red >= 128), and with 0 elsewhere.
///
/// `stencil` may be longer than `color`; the extra bytes are ignored.
///
/// # Parameters
///
/// - `color`: The RGBA8888 colour buffer, rewritten in place
/// - `stencil`: The RGBA8888 stencil deciding which pixels stay visible
///
/// # Returns
///
/// [`Ok`] on success, or an error if validation fails.
///
/// # Errors
///
/// - [`BlendError::InvalidColorLength`] if `color` length is not divisible by 4
/// - [`BlendError::StencilTooSmall`] if `stencil` is smaller than `color`
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use alpha_stencil_blend_api::blend_stencil;
/// let mut color = vec![0u8; 4 * 100]; // 100 RGBA8888 pixels
/// let stencil = vec![255u8; 4 * 100];
///
/// blend_stencil(&mut color, &stencil)?;
/// # Ok(())
/// # }
/// ```
pub fn blend_stencil(color: &mut [u8], stencil: &[u8]) -> Result<(), BlendError> {
    // Validate colour buffer length
    if color.len() % 4 != 0 {
        return Err(BlendError::InvalidColorLength(color.len()));
    }

    // Validate stencil size
    if stencil.len() < color.len() {
        return Err(BlendError::StencilTooSmall {
            needed: color.len(),
            actual: stencil.len(),
        });
    }

    // Safety: We've validated all preconditions
    unsafe {
        core_blend_stencil(color.as_mut_ptr(), stencil.as_ptr(), color.len() / 4);
    }

    Ok(())
}

/// Apply the blend matching the sources provided.
///
/// With only `opacity`, alpha bytes come from the opacity green channel.
/// With both sources, the stencil masks that copy. With only `stencil`, alpha
/// bytes become 255 or 0. With neither, the call validates `color` and leaves
/// it untouched.
///
/// # Parameters
///
/// - `color`: The RGBA8888 colour buffer, rewritten in place
/// - `opacity`: Optional RGBA8888 opacity source
/// - `stencil`: Optional RGBA8888 stencil
///
/// # Returns
///
/// [`Ok`] on success, or an error if validation fails.
///
/// # Errors
///
/// - [`BlendError::InvalidColorLength`] if `color` length is not divisible by 4
/// - [`BlendError::OpacitySourceTooSmall`] if a provided `opacity` is smaller
///   than `color`
/// - [`BlendError::StencilTooSmall`] if a provided `stencil` is smaller than
///   `color`
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use alpha_stencil_blend_api::blend;
/// let mut color = vec![0u8; 4 * 100]; // 100 RGBA8888 pixels
/// let opacity = vec![0u8; 4 * 100];
///
/// blend(&mut color, Some(&opacity), None)?;
/// # Ok(())
/// # }
/// ```
pub fn blend(
    color: &mut [u8],
    opacity: Option<&[u8]>,
    stencil: Option<&[u8]>,
) -> Result<(), BlendError> {
    match (opacity, stencil) {
        (Some(opacity), Some(stencil)) => blend_alpha_stencil(color, opacity, stencil),
        (Some(opacity), None) => blend_alpha(color, opacity),
        (None, Some(stencil)) => blend_stencil(color, stencil),
        (None, None) => {
            // Validate colour buffer length
            if color.len() % 4 != 0 {
                return Err(BlendError::InvalidColorLength(color.len()));
            }

            Ok(())
        }
    }
}
