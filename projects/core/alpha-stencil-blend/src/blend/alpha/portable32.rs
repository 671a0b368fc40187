//! Portable 32 bit kernels for the alpha blend.

use crate::pixel::{ALPHA_MASK, BYTES_PER_PIXEL, RGB_MASK};

/// Rewrites the alpha byte of every colour pixel from the opacity source's
/// green byte, one `u32` word at a time.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `opacity_ptr` must be valid for reads of `num_pixels * 4` bytes
pub unsafe fn u32(mut color_ptr: *mut u8, mut opacity_ptr: *const u8, num_pixels: usize) {
    let max_ptr = color_ptr.add(num_pixels * BYTES_PER_PIXEL);
    while color_ptr < max_ptr {
        let color = (color_ptr as *const u32).read_unaligned();
        let opacity = (opacity_ptr as *const u32).read_unaligned();
        let blended = (color & RGB_MASK) | ((opacity << 16) & ALPHA_MASK);
        (color_ptr as *mut u32).write_unaligned(blended);
        color_ptr = color_ptr.add(BYTES_PER_PIXEL);
        opacity_ptr = opacity_ptr.add(BYTES_PER_PIXEL);
    }
}

/// Rewrites the alpha byte of every colour pixel from the opacity source's
/// green byte, processing groups of 16 pixels as 4 unrolled iterations of
/// 4 word combines before finishing the remainder one word at a time.
///
/// # Safety
///
/// - `color_ptr` must be valid for reads and writes of `num_pixels * 4` bytes
/// - `opacity_ptr` must be valid for reads of `num_pixels * 4` bytes
pub unsafe fn u32_unroll_4(mut color_ptr: *mut u8, mut opacity_ptr: *const u8, num_pixels: usize) {
    let grouped_pixels = num_pixels & !15;
    let grouped_end = color_ptr.add(grouped_pixels * BYTES_PER_PIXEL);
    while color_ptr < grouped_end {
        // Pixels 0..4
        let color_words = color_ptr as *mut u32;
        let opacity_words = opacity_ptr as *const u32;
        let blend0 = (color_words.read_unaligned() & RGB_MASK)
            | ((opacity_words.read_unaligned() << 16) & ALPHA_MASK);
        let blend1 = (color_words.add(1).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(1).read_unaligned() << 16) & ALPHA_MASK);
        let blend2 = (color_words.add(2).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(2).read_unaligned() << 16) & ALPHA_MASK);
        let blend3 = (color_words.add(3).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(3).read_unaligned() << 16) & ALPHA_MASK);
        color_words.write_unaligned(blend0);
        color_words.add(1).write_unaligned(blend1);
        color_words.add(2).write_unaligned(blend2);
        color_words.add(3).write_unaligned(blend3);
        color_ptr = color_ptr.add(4 * BYTES_PER_PIXEL);
        opacity_ptr = opacity_ptr.add(4 * BYTES_PER_PIXEL);

        // Pixels 4..8
        let color_words = color_ptr as *mut u32;
        let opacity_words = opacity_ptr as *const u32;
        let blend0 = (color_words.read_unaligned() & RGB_MASK)
            | ((opacity_words.read_unaligned() << 16) & ALPHA_MASK);
        let blend1 = (color_words.add(1).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(1).read_unaligned() << 16) & ALPHA_MASK);
        let blend2 = (color_words.add(2).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(2).read_unaligned() << 16) & ALPHA_MASK);
        let blend3 = (color_words.add(3).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(3).read_unaligned() << 16) & ALPHA_MASK);
        color_words.write_unaligned(blend0);
        color_words.add(1).write_unaligned(blend1);
        color_words.add(2).write_unaligned(blend2);
        color_words.add(3).write_unaligned(blend3);
        color_ptr = color_ptr.add(4 * BYTES_PER_PIXEL);
        opacity_ptr = opacity_ptr.add(4 * BYTES_PER_PIXEL);

        // Pixels 8..12
        let color_words = color_ptr as *mut u32;
        let opacity_words = opacity_ptr as *const u32;
        let blend0 = (color_words.read_unaligned() & RGB_MASK)
            | ((opacity_words.read_unaligned() << 16) & ALPHA_MASK);
        let blend1 = (color_words.add(1).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(1).read_unaligned() << 16) & ALPHA_MASK);
        let blend2 = (color_words.add(2).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(2).read_unaligned() << 16) & ALPHA_MASK);
        let blend3 = (color_words.add(3).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(3).read_unaligned() << 16) & ALPHA_MASK);
        color_words.write_unaligned(blend0);
        color_words.add(1).write_unaligned(blend1);
        color_words.add(2).write_unaligned(blend2);
        color_words.add(3).write_unaligned(blend3);
        color_ptr = color_ptr.add(4 * BYTES_PER_PIXEL);
        opacity_ptr = opacity_ptr.add(4 * BYTES_PER_PIXEL);

        // Pixels 12..16
        let color_words = color_ptr as *mut u32;
        let opacity_words = opacity_ptr as *const u32;
        let blend0 = (color_words.read_unaligned() & RGB_MASK)
            | ((opacity_words.read_unaligned() << 16) & ALPHA_MASK);
        let blend1 = (color_words.add(1).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(1).read_unaligned() << 16) & ALPHA_MASK);
        let blend2 = (color_words.add(2).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(2).read_unaligned() << 16) & ALPHA_MASK);
        let blend3 = (color_words.add(3).read_unaligned() & RGB_MASK)
            | ((opacity_words.add(3).read_unaligned() << 16) & ALPHA_MASK);
        color_words.write_unaligned(blend0);
        color_words.add(1).write_unaligned(blend1);
        color_words.add(2).write_unaligned(blend2);
        color_words.add(3).write_unaligned(blend3);
        color_ptr = color_ptr.add(4 * BYTES_PER_PIXEL);
        opacity_ptr = opacity_ptr.add(4 * BYTES_PER_PIXEL);
    }

    // Process any remaining 0..=15 pixels one word at a time.
    let max_ptr = color_ptr.add((num_pixels - grouped_pixels) * BYTES_PER_PIXEL);
    while color_ptr < max_ptr {
        let color = (color_ptr as *const u32).read_unaligned();
        let opacity = (opacity_ptr as *const u32).read_unaligned();
        let blended = (color & RGB_MASK) | ((opacity << 16) & ALPHA_MASK);
        (color_ptr as *mut u32).write_unaligned(blended);
        color_ptr = color_ptr.add(BYTES_PER_PIXEL);
        opacity_ptr = opacity_ptr.add(BYTES_PER_PIXEL);
    }
}
