//! Combined C entry point that picks the blend mode from which source
//! pointers are non-null.

use super::{AsbErrorCode, AsbResult};
use crate::blend::{blend_alpha, blend_alpha_stencil, blend_stencil};

/// Rewrites the alpha byte of every pixel in the colour buffer, picking the
/// blend mode from which source pointers are provided.
///
/// | `opacity_ptr` | `stencil_ptr` | Effect on each pixel's alpha byte              |
/// |---------------|---------------|------------------------------------------------|
/// | non-null      | null          | opacity green                                  |
/// | non-null      | non-null      | opacity green where stencil red >= 128, else 0 |
/// | null          | non-null      | 255 where stencil red >= 128, else 0           |
/// | null          | null          | untouched, the call is a no-op                 |
///
/// # Parameters
///
/// - `color_ptr`: Pointer to the RGBA8888 colour buffer rewritten in place
/// - `opacity_ptr`: Pointer to the RGBA8888 opacity source, may be null
/// - `stencil_ptr`: Pointer to the RGBA8888 stencil, may be null
/// - `num_pixels`: Number of 4 byte pixels in every provided buffer
///
/// # Returns
///
/// An [`AsbResult`] indicating success or failure.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `opacity_ptr` must be null or valid for reads of `num_pixels * 4` bytes
/// - `stencil_ptr` must be null or valid for reads of `num_pixels * 4` bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn asbcore_blend(
    color_ptr: *mut u8,
    opacity_ptr: *const u8,
    stencil_ptr: *const u8,
    num_pixels: usize,
) -> AsbResult {
    // Validate null pointers
    if color_ptr.is_null() {
        return AsbResult::from_error_code(AsbErrorCode::NullColorPointer);
    }

    if !opacity_ptr.is_null() && !stencil_ptr.is_null() {
        blend_alpha_stencil(color_ptr, opacity_ptr, stencil_ptr, num_pixels);
    } else if !opacity_ptr.is_null() {
        blend_alpha(color_ptr, opacity_ptr, num_pixels);
    } else if !stencil_ptr.is_null() {
        blend_stencil(color_ptr, stencil_ptr, num_pixels);
    }

    AsbResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::{null, null_mut};

    #[test]
    fn rejects_null_color_pointer() {
        let result = unsafe { asbcore_blend(null_mut(), null(), null(), 0) };
        assert_eq!(result.error_code, AsbErrorCode::NullColorPointer);
        assert!(!result.is_success());
    }

    #[test]
    fn both_sources_null_is_a_no_op() {
        let mut color = [1u8, 2, 3, 4];
        let result = unsafe { asbcore_blend(color.as_mut_ptr(), null(), null(), 1) };
        assert!(result.is_success());
        assert_eq!(color, [1, 2, 3, 4]);
    }

    #[test]
    fn dispatches_to_the_alpha_blend() {
        let mut color = [1u8, 2, 3, 4];
        let opacity = [0u8, 99, 0, 0];
        let result = unsafe { asbcore_blend(color.as_mut_ptr(), opacity.as_ptr(), null(), 1) };
        assert!(result.is_success());
        assert_eq!(color, [1, 2, 3, 99]);
    }

    #[test]
    fn dispatches_to_the_stencil_masked_alpha_blend() {
        let mut color = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let opacity = [0u8, 99, 0, 0, 0, 99, 0, 0];
        let stencil = [255u8, 0, 0, 0, 0, 0, 0, 0];
        let result =
            unsafe { asbcore_blend(color.as_mut_ptr(), opacity.as_ptr(), stencil.as_ptr(), 2) };
        assert!(result.is_success());
        assert_eq!(color, [1, 2, 3, 99, 5, 6, 7, 0]);
    }

    #[test]
    fn dispatches_to_the_stencil_only_blend() {
        let mut color = [1u8, 2, 3, 4];
        let stencil = [255u8, 0, 0, 0];
        let result = unsafe { asbcore_blend(color.as_mut_ptr(), null(), stencil.as_ptr(), 1) };
        assert!(result.is_success());
        assert_eq!(color, [1, 2, 3, 255]);
    }

    #[test]
    fn zero_pixels_succeeds_without_touching_memory() {
        let mut color = [9u8; 4];
        let opacity = [0u8; 4];
        let result = unsafe { asbcore_blend(color.as_mut_ptr(), opacity.as_ptr(), null(), 0) };
        assert!(result.is_success());
        assert_eq!(color, [9; 4]);
    }
}
