//! Single mode C entry points.

use super::{AsbErrorCode, AsbResult};
use crate::blend::{blend_alpha, blend_alpha_stencil, blend_stencil};

/// Rewrites the alpha byte of every pixel in the colour buffer from the green
/// byte of the matching opacity pixel.
///
/// # Parameters
///
/// - `color_ptr`: Pointer to the RGBA8888 colour buffer rewritten in place
/// - `opacity_ptr`: Pointer to the RGBA8888 opacity source
/// - `num_pixels`: Number of 4 byte pixels in every provided buffer
///
/// # Returns
///
/// An [`AsbResult`] indicating success or failure.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `opacity_ptr` must be valid for reads of `num_pixels * 4` bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn asbcore_blend_alpha(
    color_ptr: *mut u8,
    opacity_ptr: *const u8,
    num_pixels: usize,
) -> AsbResult {
    // Validate null pointers
    if color_ptr.is_null() {
        return AsbResult::from_error_code(AsbErrorCode::NullColorPointer);
    }
    if opacity_ptr.is_null() {
        return AsbResult::from_error_code(AsbErrorCode::NullOpacityPointer);
    }

    blend_alpha(color_ptr, opacity_ptr, num_pixels);
    AsbResult::success()
}

/// Rewrites the alpha byte of every pixel in the colour buffer from the green
/// byte of the matching opacity pixel where the stencil red byte is >= 128,
/// and to 0 elsewhere.
///
/// # Parameters
///
/// - `color_ptr`: Pointer to the RGBA8888 colour buffer rewritten in place
/// - `opacity_ptr`: Pointer to the RGBA8888 opacity source
/// - `stencil_ptr`: Pointer to the RGBA8888 stencil
/// - `num_pixels`: Number of 4 byte pixels in every provided buffer
///
/// # Returns
///
/// An [`AsbResult`] indicating success or failure.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `opacity_ptr` must be valid for reads of `num_pixels * 4` bytes
/// - `stencil_ptr` must be valid for reads of `num_pixels * 4` bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn asbcore_blend_alpha_stencil(
    color_ptr: *mut u8,
    opacity_ptr: *const u8,
    stencil_ptr: *const u8,
    num_pixels: usize,
) -> AsbResult {
    // Validate null pointers
    if color_ptr.is_null() {
        return AsbResult::from_error_code(AsbErrorCode::NullColorPointer);
    }
    if opacity_ptr.is_null() {
        return AsbResult::from_error_code(AsbErrorCode::NullOpacityPointer);
    }
    if stencil_ptr.is_null() {
        return AsbResult::from_error_code(AsbErrorCode::NullStencilPointer);
    }

    blend_alpha_stencil(color_ptr, opacity_ptr, stencil_ptr, num_pixels);
    AsbResult::success()
}

/// Rewrites the alpha byte of every pixel in the colour buffer to 255 where
/// the stencil red byte is >= 128, and to 0 elsewhere.
///
/// # Parameters
///
/// - `color_ptr`: Pointer to the RGBA8888 colour buffer rewritten in place
/// - `stencil_ptr`: Pointer to the RGBA8888 stencil
/// - `num_pixels`: Number of 4 byte pixels in every provided buffer
///
/// # Returns
///
/// An [`AsbResult`] indicating success or failure.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `stencil_ptr` must be valid for reads of `num_pixels * 4` bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn asbcore_blend_stencil(
    color_ptr: *mut u8,
    stencil_ptr: *const u8,
    num_pixels: usize,
) -> AsbResult {
    // Validate null pointers
    if color_ptr.is_null() {
        return AsbResult::from_error_code(AsbErrorCode::NullColorPointer);
    }
    if stencil_ptr.is_null() {
        return AsbResult::from_error_code(AsbErrorCode::NullStencilPointer);
    }

    blend_stencil(color_ptr, stencil_ptr, num_pixels);
    AsbResult::success()
}
