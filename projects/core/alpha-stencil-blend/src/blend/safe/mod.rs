//! Slice based wrappers around the raw blend kernels.
//!
//! These validate buffer lengths before dispatching to the unsafe pointer
//! entry points, so callers get a [`BlendValidationError`] instead of
//! undefined behaviour when a buffer is too short or misshapen.

pub(crate) mod blend;
pub(crate) mod blend_modes;

pub use blend::blend as blend_safe;
pub use blend_modes::{
    blend_alpha as blend_alpha_safe, blend_alpha_stencil as blend_alpha_stencil_safe,
    blend_stencil as blend_stencil_safe, BlendValidationError,
};
