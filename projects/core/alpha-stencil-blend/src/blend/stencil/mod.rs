//! Stencil only blend: colour alpha bytes become fully opaque (255) where
//! the stencil marks the pixel opaque (red >= 128) and fully transparent (0)
//! everywhere else.

pub(crate) mod portable32;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
use crate::cpu_detect::*;

/// Rewrites the alpha byte of every pixel in the colour buffer to 255 or 0
/// depending on the matching stencil pixel, picking the fastest kernel
/// available on the current CPU.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `stencil_ptr` must be valid for reads of `num_pixels * 4` bytes
#[inline]
pub unsafe fn blend_stencil(color_ptr: *mut u8, stencil_ptr: *const u8, num_pixels: usize) {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        blend_stencil_x86(color_ptr, stencil_ptr, num_pixels)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable32::u32_unroll_4(color_ptr, stencil_ptr, num_pixels)
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn blend_stencil_x86(color_ptr: *mut u8, stencil_ptr: *const u8, num_pixels: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        // Runtime feature detection
        if has_sse2() {
            sse2::blend_sse2(color_ptr, stencil_ptr, num_pixels);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "sse2") {
            sse2::blend_sse2(color_ptr, stencil_ptr, num_pixels);
            return;
        }
    }

    portable32::u32_unroll_4(color_ptr, stencil_ptr, num_pixels)
}
