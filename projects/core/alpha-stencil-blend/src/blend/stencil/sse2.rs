//! SSE2 kernel for the stencil only blend, 16 pixels per loop iteration.

use super::portable32;
use crate::pixel::{ALPHA_MASK, BYTES_PER_PIXEL, RGB_MASK};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Rewrites the alpha byte of every colour pixel to 255 where the stencil red
/// byte is >= 128, and to 0 elsewhere, using SSE2, 4 vectors of 4 pixels per
/// iteration.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `stencil_ptr` must be valid for reads of `num_pixels * 4` bytes
/// - Requires SSE2 support
#[target_feature(enable = "sse2")]
pub unsafe fn blend_sse2(mut color_ptr: *mut u8, mut stencil_ptr: *const u8, num_pixels: usize) {
    let rgb_mask = _mm_set1_epi32(RGB_MASK as i32);
    let alpha_mask = _mm_set1_epi32(ALPHA_MASK as i32);

    let vectorized_pixels = num_pixels & !15;
    let vectorized_end = color_ptr.add(vectorized_pixels * BYTES_PER_PIXEL);
    while color_ptr < vectorized_end {
        let color0 = _mm_loadu_si128(color_ptr as *const __m128i);
        let color1 = _mm_loadu_si128((color_ptr as *const __m128i).add(1));
        let color2 = _mm_loadu_si128((color_ptr as *const __m128i).add(2));
        let color3 = _mm_loadu_si128((color_ptr as *const __m128i).add(3));
        let stencil0 = _mm_loadu_si128(stencil_ptr as *const __m128i);
        let stencil1 = _mm_loadu_si128((stencil_ptr as *const __m128i).add(1));
        let stencil2 = _mm_loadu_si128((stencil_ptr as *const __m128i).add(2));
        let stencil3 = _mm_loadu_si128((stencil_ptr as *const __m128i).add(3));

        // Move bit 7 of the stencil red byte into the lane sign bit, then
        // broadcast it across the lane with an arithmetic shift.
        let keep0 = _mm_srai_epi32(_mm_slli_epi32(stencil0, 24), 31);
        let keep1 = _mm_srai_epi32(_mm_slli_epi32(stencil1, 24), 31);
        let keep2 = _mm_srai_epi32(_mm_slli_epi32(stencil2, 24), 31);
        let keep3 = _mm_srai_epi32(_mm_slli_epi32(stencil3, 24), 31);

        let blended0 = _mm_or_si128(
            _mm_and_si128(color0, rgb_mask),
            _mm_and_si128(alpha_mask, keep0),
        );
        let blended1 = _mm_or_si128(
            _mm_and_si128(color1, rgb_mask),
            _mm_and_si128(alpha_mask, keep1),
        );
        let blended2 = _mm_or_si128(
            _mm_and_si128(color2, rgb_mask),
            _mm_and_si128(alpha_mask, keep2),
        );
        let blended3 = _mm_or_si128(
            _mm_and_si128(color3, rgb_mask),
            _mm_and_si128(alpha_mask, keep3),
        );

        _mm_storeu_si128(color_ptr as *mut __m128i, blended0);
        _mm_storeu_si128((color_ptr as *mut __m128i).add(1), blended1);
        _mm_storeu_si128((color_ptr as *mut __m128i).add(2), blended2);
        _mm_storeu_si128((color_ptr as *mut __m128i).add(3), blended3);

        color_ptr = color_ptr.add(16 * BYTES_PER_PIXEL);
        stencil_ptr = stencil_ptr.add(16 * BYTES_PER_PIXEL);
    }

    // Process any remaining pixels with the portable kernel.
    let remaining_pixels = num_pixels - vectorized_pixels;
    if remaining_pixels > 0 {
        portable32::u32(color_ptr, stencil_ptr, remaining_pixels);
    }
}
