//! In-place alpha channel compositing over interleaved RGBA8888 buffers.
//!
//! ## Buffer layout
//!
//! Every buffer handled here is a run of 4 byte pixels sharing one pixel count:
//!
//! ```text
//! Offset:  0         4         8         12
//!          [R G B A] [R G B A] [R G B A] ...
//! ```
//!
//! A pixel loaded as a little-endian `u32` places its channels at:
//!
//! ```text
//! bits  0..8   red
//! bits  8..16  green
//! bits 16..24  blue
//! bits 24..32  alpha
//! ```
//!
//! ## Word combine
//!
//! The alpha blend keeps the low 24 bits of the colour word and fills the top
//! byte from the opacity source's green channel, shifted from bits 8..16 up to
//! bits 24..32:
//!
//! ```text
//! new_color = (color & 0x00FFFFFF) | ((opacity << 16) & 0xFF000000)
//! ```
//!
//! The stencil variants additionally derive a per-pixel select mask from bit 7
//! of the stencil word's red byte, which is set exactly when red >= 128:
//!
//! ```text
//! keep      = 0 - ((stencil >> 7) & 1)            // all ones or all zeroes
//! new_color = (color & 0x00FFFFFF) | (alpha_word & keep)
//! ```
//!
//! where `alpha_word` is the shifted opacity green (alpha + stencil mode) or
//! `0xFF000000` (stencil only mode).
//!
//! ## Loop structure
//!
//! Portable kernels process the bulk of the buffer in groups of 16 pixels
//! (4 unrolled iterations of 4 word combines), then finish the 0..=15
//! remainder one word at a time. SIMD variants consume 16 (SSE2) or 32 (AVX2)
//! pixels per iteration and delegate their remainder to the portable kernel,
//! so every entry point is correct for any pixel count, including 0.

pub(crate) mod alpha;
pub(crate) mod alpha_stencil;
pub mod safe;
pub(crate) mod stencil;

pub use alpha::blend_alpha;
pub use alpha_stencil::blend_alpha_stencil;
pub use safe::{
    blend_alpha_safe, blend_alpha_stencil_safe, blend_safe, blend_stencil_safe,
    BlendValidationError,
};
pub use stencil::blend_stencil;
