//! Alpha blend: colour alpha bytes are replaced by the opacity source's
//! green bytes, all other channels pass through untouched.

pub(crate) mod portable32;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
use crate::cpu_detect::*;

/// Rewrites the alpha byte of every pixel in the colour buffer from the
/// matching pixel's green byte in the opacity source, picking the fastest
/// kernel available on the current CPU.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `opacity_ptr` must be valid for reads of `num_pixels * 4` bytes
#[inline]
pub unsafe fn blend_alpha(color_ptr: *mut u8, opacity_ptr: *const u8, num_pixels: usize) {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        blend_alpha_x86(color_ptr, opacity_ptr, num_pixels)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable32::u32_unroll_4(color_ptr, opacity_ptr, num_pixels)
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn blend_alpha_x86(color_ptr: *mut u8, opacity_ptr: *const u8, num_pixels: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        // Runtime feature detection
        if has_avx2() {
            avx2::blend_avx2(color_ptr, opacity_ptr, num_pixels);
            return;
        }

        if has_sse2() {
            sse2::blend_sse2(color_ptr, opacity_ptr, num_pixels);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            avx2::blend_avx2(color_ptr, opacity_ptr, num_pixels);
            return;
        }

        if cfg!(target_feature = "sse2") {
            sse2::blend_sse2(color_ptr, opacity_ptr, num_pixels);
            return;
        }
    }

    portable32::u32_unroll_4(color_ptr, opacity_ptr, num_pixels)
}
