#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod blend;
pub mod cpu_detect;
pub mod pixel;

#[cfg(feature = "bench")]
pub mod bench;

/// C API functions for blend operations (enabled with c-exports feature)
#[cfg(feature = "c-exports")]
pub mod c_api;

// Re-export main functions from the blend module
pub use blend::{
    blend_alpha, blend_alpha_safe, blend_alpha_stencil, blend_alpha_stencil_safe, blend_safe,
    blend_stencil, blend_stencil_safe, BlendValidationError,
};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
