//! AVX2 kernel for the alpha blend, 32 pixels per loop iteration.

use super::portable32;
use crate::pixel::{ALPHA_MASK, BYTES_PER_PIXEL, RGB_MASK};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Rewrites the alpha byte of every colour pixel from the opacity source's
/// green byte using AVX2, 4 vectors of 8 pixels per iteration.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `opacity_ptr` must be valid for reads of `num_pixels * 4` bytes
/// - Requires AVX2 support
#[target_feature(enable = "avx2")]
pub unsafe fn blend_avx2(mut color_ptr: *mut u8, mut opacity_ptr: *const u8, num_pixels: usize) {
    let rgb_mask = _mm256_set1_epi32(RGB_MASK as i32);
    let alpha_mask = _mm256_set1_epi32(ALPHA_MASK as i32);

    let vectorized_pixels = num_pixels & !31;
    let vectorized_end = color_ptr.add(vectorized_pixels * BYTES_PER_PIXEL);
    while color_ptr < vectorized_end {
        let color0 = _mm256_loadu_si256(color_ptr as *const __m256i);
        let color1 = _mm256_loadu_si256((color_ptr as *const __m256i).add(1));
        let color2 = _mm256_loadu_si256((color_ptr as *const __m256i).add(2));
        let color3 = _mm256_loadu_si256((color_ptr as *const __m256i).add(3));
        let opacity0 = _mm256_loadu_si256(opacity_ptr as *const __m256i);
        let opacity1 = _mm256_loadu_si256((opacity_ptr as *const __m256i).add(1));
        let opacity2 = _mm256_loadu_si256((opacity_ptr as *const __m256i).add(2));
        let opacity3 = _mm256_loadu_si256((opacity_ptr as *const __m256i).add(3));

        // Shift green from bits 8..16 up to bits 24..32, then merge.
        let blended0 = _mm256_or_si256(
            _mm256_and_si256(color0, rgb_mask),
            _mm256_and_si256(_mm256_slli_epi32(opacity0, 16), alpha_mask),
        );
        let blended1 = _mm256_or_si256(
            _mm256_and_si256(color1, rgb_mask),
            _mm256_and_si256(_mm256_slli_epi32(opacity1, 16), alpha_mask),
        );
        let blended2 = _mm256_or_si256(
            _mm256_and_si256(color2, rgb_mask),
            _mm256_and_si256(_mm256_slli_epi32(opacity2, 16), alpha_mask),
        );
        let blended3 = _mm256_or_si256(
            _mm256_and_si256(color3, rgb_mask),
            _mm256_and_si256(_mm256_slli_epi32(opacity3, 16), alpha_mask),
        );

        _mm256_storeu_si256(color_ptr as *mut __m256i, blended0);
        _mm256_storeu_si256((color_ptr as *mut __m256i).add(1), blended1);
        _mm256_storeu_si256((color_ptr as *mut __m256i).add(2), blended2);
        _mm256_storeu_si256((color_ptr as *mut __m256i).add(3), blended3);

        color_ptr = color_ptr.add(32 * BYTES_PER_PIXEL);
        opacity_ptr = opacity_ptr.add(32 * BYTES_PER_PIXEL);
    }

    // Process any remaining pixels with the portable kernel.
    let remaining_pixels = num_pixels - vectorized_pixels;
    if remaining_pixels > 0 {
        portable32::u32(color_ptr, opacity_ptr, remaining_pixels);
    }
}
