//! Portable 32 bit kernels for the stencil only blend.

use crate::pixel::{ALPHA_MASK, BYTES_PER_PIXEL, RGB_MASK};

/// Rewrites the alpha byte of every colour pixel to 255 where the stencil red
/// byte is >= 128, and to 0 elsewhere, one `u32` word at a time.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `stencil_ptr` must be valid for reads of `num_pixels * 4` bytes
pub unsafe fn u32(mut color_ptr: *mut u8, mut stencil_ptr: *const u8, num_pixels: usize) {
    let max_ptr = color_ptr.add(num_pixels * BYTES_PER_PIXEL);
    while color_ptr < max_ptr {
        let color = (color_ptr as *const u32).read_unaligned();
        let stencil = (stencil_ptr as *const u32).read_unaligned();
        // Bit 7 of the stencil red byte is set exactly when red >= 128.
        let keep = 0u32.wrapping_sub((stencil >> 7) & 1);
        let blended = (color & RGB_MASK) | (ALPHA_MASK & keep);
        (color_ptr as *mut u32).write_unaligned(blended);
        color_ptr = color_ptr.add(BYTES_PER_PIXEL);
        stencil_ptr = stencil_ptr.add(BYTES_PER_PIXEL);
    }
}

/// Rewrites the alpha byte of every colour pixel to 255 where the stencil red
/// byte is >= 128, and to 0 elsewhere, processing groups of 16 pixels as
/// 4 unrolled iterations of 4 word combines before finishing the remainder
/// one word at a time.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `stencil_ptr` must be valid for reads of `num_pixels * 4` bytes
pub unsafe fn u32_unroll_4(mut color_ptr: *mut u8, mut stencil_ptr: *const u8, num_pixels: usize) {
    let grouped_pixels = num_pixels & !15;
    let grouped_end = color_ptr.add(grouped_pixels * BYTES_PER_PIXEL);
    while color_ptr < grouped_end {
        // Pixels 0..4
        let color_words = color_ptr as *mut u32;
        let stencil_words = stencil_ptr as *const u32;
        let keep0 = 0u32.wrapping_sub((stencil_words.read_unaligned() >> 7) & 1);
        let keep1 = 0u32.wrapping_sub((stencil_words.add(1).read_unaligned() >> 7) & 1);
        let keep2 = 0u32.wrapping_sub((stencil_words.add(2).read_unaligned() >> 7) & 1);
        let keep3 = 0u32.wrapping_sub((stencil_words.add(3).read_unaligned() >> 7) & 1);
        let blend0 = (color_words.read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep0);
        let blend1 = (color_words.add(1).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep1);
        let blend2 = (color_words.add(2).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep2);
        let blend3 = (color_words.add(3).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep3);
        color_words.write_unaligned(blend0);
        color_words.add(1).write_unaligned(blend1);
        color_words.add(2).write_unaligned(blend2);
        color_words.add(3).write_unaligned(blend3);
        color_ptr = color_ptr.add(4 * BYTES_PER_PIXEL);
        stencil_ptr = stencil_ptr.add(4 * BYTES_PER_PIXEL);

        // Pixels 4..8
        let color_words = color_ptr as *mut u32;
        let stencil_words = stencil_ptr as *const u32;
        let keep0 = 0u32.wrapping_sub((stencil_words.read_unaligned() >> 7) & 1);
        let keep1 = 0u32.wrapping_sub((stencil_words.add(1).read_unaligned() >> 7) & 1);
        let keep2 = 0u32.wrapping_sub((stencil_words.add(2).read_unaligned() >> 7) & 1);
        let keep3 = 0u32.wrapping_sub((stencil_words.add(3).read_unaligned() >> 7) & 1);
        let blend0 = (color_words.read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep0);
        let blend1 = (color_words.add(1).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep1);
        let blend2 = (color_words.add(2).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep2);
        let blend3 = (color_words.add(3).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep3);
        color_words.write_unaligned(blend0);
        color_words.add(1).write_unaligned(blend1);
        color_words.add(2).write_unaligned(blend2);
        color_words.add(3).write_unaligned(blend3);
        color_ptr = color_ptr.add(4 * BYTES_PER_PIXEL);
        stencil_ptr = stencil_ptr.add(4 * BYTES_PER_PIXEL);

        // Pixels 8..12
        let color_words = color_ptr as *mut u32;
        let stencil_words = stencil_ptr as *const u32;
        let keep0 = 0u32.wrapping_sub((stencil_words.read_unaligned() >> 7) & 1);
        let keep1 = 0u32.wrapping_sub((stencil_words.add(1).read_unaligned() >> 7) & 1);
        let keep2 = 0u32.wrapping_sub((stencil_words.add(2).read_unaligned() >> 7) & 1);
        let keep3 = 0u32.wrapping_sub((stencil_words.add(3).read_unaligned() >> 7) & 1);
        let blend0 = (color_words.read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep0);
        let blend1 = (color_words.add(1).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep1);
        let blend2 = (color_words.add(2).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep2);
        let blend3 = (color_words.add(3).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep3);
        color_words.write_unaligned(blend0);
        color_words.add(1).write_unaligned(blend1);
        color_words.add(2).write_unaligned(blend2);
        color_words.add(3).write_unaligned(blend3);
        color_ptr = color_ptr.add(4 * BYTES_PER_PIXEL);
        stencil_ptr = stencil_ptr.add(4 * BYTES_PER_PIXEL);

        // Pixels 12..16
        let color_words = color_ptr as *mut u32;
        let stencil_words = stencil_ptr as *const u32;
        let keep0 = 0u32.wrapping_sub((stencil_words.read_unaligned() >> 7) & 1);
        let keep1 = 0u32.wrapping_sub((stencil_words.add(1).read_unaligned() >> 7) & 1);
        let keep2 = 0u32.wrapping_sub((stencil_words.add(2).read_unaligned() >> 7) & 1);
        let keep3 = 0u32.wrapping_sub((stencil_words.add(3).read_unaligned() >> 7) & 1);
        let blend0 = (color_words.read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep0);
        let blend1 = (color_words.add(1).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep1);
        let blend2 = (color_words.add(2).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep2);
        let blend3 = (color_words.add(3).read_unaligned() & RGB_MASK) | (ALPHA_MASK & keep3);
        color_words.write_unaligned(blend0);
        color_words.add(1).write_unaligned(blend1);
        color_words.add(2).write_unaligned(blend2);
        color_words.add(3).write_unaligned(blend3);
        color_ptr = color_ptr.add(4 * BYTES_PER_PIXEL);
        stencil_ptr = stencil_ptr.add(4 * BYTES_PER_PIXEL);
    }

    // Process any remaining 0..=15 pixels one word at a time.
    let max_ptr = color_ptr.add((num_pixels - grouped_pixels) * BYTES_PER_PIXEL);
    while color_ptr < max_ptr {
        let color = (color_ptr as *const u32).read_unaligned();
        let stencil = (stencil_ptr as *const u32).read_unaligned();
        let keep = 0u32.wrapping_sub((stencil >> 7) & 1);
        let blended = (color & RGB_MASK) | (ALPHA_MASK & keep);
        (color_ptr as *mut u32).write_unaligned(blended);
        color_ptr = color_ptr.add(BYTES_PER_PIXEL);
        stencil_ptr = stencil_ptr.add(BYTES_PER_PIXEL);
    }
}
