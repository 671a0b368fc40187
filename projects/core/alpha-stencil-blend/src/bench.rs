//! Benchmark functions re-exported for external benchmarks.
//!
//! This module re-exposes internal kernel functions that were changed to `pub(crate)` visibility
//! so that external benchmarks can still access them when the `bench` feature is enabled.
#![allow(clippy::missing_safety_doc)]
#![cfg(not(tarpaulin_include))]
#![allow(missing_docs)]

/// Re-exported benchmark functions for the alpha blend
pub mod alpha {
    // Portable implementations
    pub unsafe fn u32(color_ptr: *mut u8, opacity_ptr: *const u8, num_pixels: usize) {
        crate::blend::alpha::portable32::u32(color_ptr, opacity_ptr, num_pixels)
    }

    pub unsafe fn u32_unroll_4(color_ptr: *mut u8, opacity_ptr: *const u8, num_pixels: usize) {
        crate::blend::alpha::portable32::u32_unroll_4(color_ptr, opacity_ptr, num_pixels)
    }

    // SSE2 implementations
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn blend_sse2(color_ptr: *mut u8, opacity_ptr: *const u8, num_pixels: usize) {
        crate::blend::alpha::sse2::blend_sse2(color_ptr, opacity_ptr, num_pixels)
    }

    // AVX2 implementations
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn blend_avx2(color_ptr: *mut u8, opacity_ptr: *const u8, num_pixels: usize) {
        crate::blend::alpha::avx2::blend_avx2(color_ptr, opacity_ptr, num_pixels)
    }
}

/// Re-exported benchmark functions for the stencil masked alpha blend
pub mod alpha_stencil {
    // Portable implementations
    pub unsafe fn u32(
        color_ptr: *mut u8,
        opacity_ptr: *const u8,
        stencil_ptr: *const u8,
        num_pixels: usize,
    ) {
        crate::blend::alpha_stencil::portable32::u32(
            color_ptr,
            opacity_ptr,
            stencil_ptr,
            num_pixels,
        )
    }

    pub unsafe fn u32_unroll_4(
        color_ptr: *mut u8,
        opacity_ptr: *const u8,
        stencil_ptr: *const u8,
        num_pixels: usize,
    ) {
        crate::blend::alpha_stencil::portable32::u32_unroll_4(
            color_ptr,
            opacity_ptr,
            stencil_ptr,
            num_pixels,
        )
    }

    // SSE2 implementations
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn blend_sse2(
        color_ptr: *mut u8,
        opacity_ptr: *const u8,
        stencil_ptr: *const u8,
        num_pixels: usize,
    ) {
        crate::blend::alpha_stencil::sse2::blend_sse2(
            color_ptr,
            opacity_ptr,
            stencil_ptr,
            num_pixels,
        )
    }
}

/// Re-exported benchmark functions for the stencil only blend
pub mod stencil {
    // Portable implementations
    pub unsafe fn u32(color_ptr: *mut u8, stencil_ptr: *const u8, num_pixels: usize) {
        crate::blend::stencil::portable32::u32(color_ptr, stencil_ptr, num_pixels)
    }

    pub unsafe fn u32_unroll_4(color_ptr: *mut u8, stencil_ptr: *const u8, num_pixels: usize) {
        crate::blend::stencil::portable32::u32_unroll_4(color_ptr, stencil_ptr, num_pixels)
    }

    // SSE2 implementations
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn blend_sse2(color_ptr: *mut u8, stencil_ptr: *const u8, num_pixels: usize) {
        crate::blend::stencil::sse2::blend_sse2(color_ptr, stencil_ptr, num_pixels)
    }
}
