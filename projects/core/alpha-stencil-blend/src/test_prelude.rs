//! Common test imports and utilities used in this crate's tests.
//!
//! This module provides a common prelude for test modules, so kernel tests
//! can write `use crate::test_prelude::*;` instead of repeating the same
//! imports, generators and reference implementations everywhere.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use crate::cpu_detect::*;
pub use crate::pixel::*;

// Re-export super for convenience in test modules
pub use super::*;

/// Function pointer for an alpha blend implementation.
pub type AlphaBlendFn = unsafe fn(*mut u8, *const u8, usize);

/// Function pointer for a stencil masked alpha blend implementation.
pub type AlphaStencilBlendFn = unsafe fn(*mut u8, *const u8, *const u8, usize);

/// Function pointer for a stencil only blend implementation.
pub type StencilBlendFn = unsafe fn(*mut u8, *const u8, usize);

/// Generates colour pixels with a recognisable value in every channel, so a
/// kernel that writes the wrong channel shows up immediately.
pub fn generate_color_test_data(num_pixels: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(num_pixels * BYTES_PER_PIXEL);

    for i in 0..num_pixels {
        let base = (i as u8).wrapping_mul(4);
        data.push(base); // R
        data.push(base.wrapping_add(1)); // G
        data.push(base.wrapping_add(2)); // B
        data.push(base.wrapping_add(3)); // A
    }

    data
}

/// Generates opacity source pixels whose green byte carries a distinct
/// payload while the other channels hold decoy values a kernel must ignore.
pub fn generate_opacity_test_data(num_pixels: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(num_pixels * BYTES_PER_PIXEL);

    for i in 0..num_pixels {
        let base = (i as u8).wrapping_mul(7);
        data.push(base.wrapping_add(0x80)); // R (decoy)
        data.push(base.wrapping_add(3)); // G (payload)
        data.push(base.wrapping_add(0x40)); // B (decoy)
        data.push(base.wrapping_add(0xC0)); // A (decoy)
    }

    data
}

/// Generates stencil pixels whose red byte repeatedly crosses the opacity
/// threshold, with decoy values in the other channels.
pub fn generate_stencil_test_data(num_pixels: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(num_pixels * BYTES_PER_PIXEL);

    for i in 0..num_pixels {
        let base = (i as u8).wrapping_mul(37);
        data.push(base); // R (threshold input)
        data.push(base.wrapping_add(0x11)); // G (decoy)
        data.push(base.wrapping_add(0x22)); // B (decoy)
        data.push(base.wrapping_add(0x33)); // A (decoy)
    }

    data
}

/// Scalar reference for the alpha blend.
pub fn reference_blend_alpha(color: &mut [u8], opacity: &[u8]) {
    for (pixel, src) in color.chunks_exact_mut(4).zip(opacity.chunks_exact(4)) {
        pixel[3] = src[1];
    }
}

/// Scalar reference for the stencil masked alpha blend.
pub fn reference_blend_alpha_stencil(color: &mut [u8], opacity: &[u8], stencil: &[u8]) {
    for ((pixel, src), mask) in color
        .chunks_exact_mut(4)
        .zip(opacity.chunks_exact(4))
        .zip(stencil.chunks_exact(4))
    {
        pixel[3] = if mask[0] >= STENCIL_OPAQUE_THRESHOLD {
            src[1]
        } else {
            0
        };
    }
}

/// Scalar reference for the stencil only blend.
pub fn reference_blend_stencil(color: &mut [u8], stencil: &[u8]) {
    for (pixel, mask) in color.chunks_exact_mut(4).zip(stencil.chunks_exact(4)) {
        pixel[3] = if mask[0] >= STENCIL_OPAQUE_THRESHOLD {
            255
        } else {
            0
        };
    }
}

/// Runs an alpha blend implementation against the scalar reference for every
/// pixel count up to `max_pixels`, on deliberately misaligned buffers.
pub fn run_alpha_blend_unaligned_test(
    implementation: AlphaBlendFn,
    max_pixels: usize,
    impl_name: &str,
) {
    for num_pixels in 0..=max_pixels {
        let color = generate_color_test_data(num_pixels);
        let opacity = generate_opacity_test_data(num_pixels);

        // Add 1 extra byte at the start to create misaligned buffers.
        let mut color_unaligned = vec![0u8; color.len() + 1];
        color_unaligned[1..].copy_from_slice(&color);
        let mut opacity_unaligned = vec![0u8; opacity.len() + 1];
        opacity_unaligned[1..].copy_from_slice(&opacity);

        let mut expected = color.clone();
        reference_blend_alpha(&mut expected, &opacity);

        unsafe {
            implementation(
                color_unaligned.as_mut_ptr().add(1),
                opacity_unaligned.as_ptr().add(1),
                num_pixels,
            );
        }

        assert_eq!(
            &color_unaligned[1..],
            &expected[..],
            "{impl_name} produced different results than reference for {num_pixels} pixels"
        );
    }
}

/// Runs a stencil masked alpha blend implementation against the scalar
/// reference for every pixel count up to `max_pixels`, on deliberately
/// misaligned buffers.
pub fn run_alpha_stencil_blend_unaligned_test(
    implementation: AlphaStencilBlendFn,
    max_pixels: usize,
    impl_name: &str,
) {
    for num_pixels in 0..=max_pixels {
        let color = generate_color_test_data(num_pixels);
        let opacity = generate_opacity_test_data(num_pixels);
        let stencil = generate_stencil_test_data(num_pixels);

        // Add 1 extra byte at the start to create misaligned buffers.
        let mut color_unaligned = vec![0u8; color.len() + 1];
        color_unaligned[1..].copy_from_slice(&color);
        let mut opacity_unaligned = vec![0u8; opacity.len() + 1];
        opacity_unaligned[1..].copy_from_slice(&opacity);
        let mut stencil_unaligned = vec![0u8; stencil.len() + 1];
        stencil_unaligned[1..].copy_from_slice(&stencil);

        let mut expected = color.clone();
        reference_blend_alpha_stencil(&mut expected, &opacity, &stencil);

        unsafe {
            implementation(
                color_unaligned.as_mut_ptr().add(1),
                opacity_unaligned.as_ptr().add(1),
                stencil_unaligned.as_ptr().add(1),
                num_pixels,
            );
        }

        assert_eq!(
            &color_unaligned[1..],
            &expected[..],
            "{impl_name} produced different results than reference for {num_pixels} pixels"
        );
    }
}

/// Runs a stencil only blend implementation against the scalar reference for
/// every pixel count up to `max_pixels`, on deliberately misaligned buffers.
pub fn run_stencil_blend_unaligned_test(
    implementation: StencilBlendFn,
    max_pixels: usize,
    impl_name: &str,
) {
    for num_pixels in 0..=max_pixels {
        let color = generate_color_test_data(num_pixels);
        let stencil = generate_stencil_test_data(num_pixels);

        // Add 1 extra byte at the start to create misaligned buffers.
        let mut color_unaligned = vec![0u8; color.len() + 1];
        color_unaligned[1..].copy_from_slice(&color);
        let mut stencil_unaligned = vec![0u8; stencil.len() + 1];
        stencil_unaligned[1..].copy_from_slice(&stencil);

        let mut expected = color.clone();
        reference_blend_stencil(&mut expected, &stencil);

        unsafe {
            implementation(
                color_unaligned.as_mut_ptr().add(1),
                stencil_unaligned.as_ptr().add(1),
                num_pixels,
            );
        }

        assert_eq!(
            &color_unaligned[1..],
            &expected[..],
            "{impl_name} produced different results than reference for {num_pixels} pixels"
        );
    }
}
