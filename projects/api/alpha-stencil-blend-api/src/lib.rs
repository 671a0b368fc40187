#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Safe, high-level API for in-place alpha and stencil compositing of
//! RGBA8888 pixel buffers.
//!
//! This crate provides a safe wrapper around the low-level blend kernels,
//! with automatic validation, error handling, and a builder for callers
//! that decide their blend sources at runtime.
//!
//! # Examples
//!
//! Note: `vec` zeroes its buffer on allocation, leaving performance on the
//! table. These examples use `vec` only to keep the demonstrations short.
//!
//! ```ignore
//! use alpha_stencil_blend_api::{blend_alpha, blend_stencil};
//!
//! let mut color = vec![0u8; 4 * 100]; // 100 RGBA8888 pixels
//! let opacity = vec![0u8; 4 * 100];
//!
//! // Copy the opacity source's green bytes into the colour alpha bytes.
//! blend_alpha(&mut color, &opacity)?;
//!
//! // Or harden alpha to opaque/transparent from a stencil.
//! let stencil = vec![255u8; 4 * 100];
//! blend_stencil(&mut color, &stencil)?;
//! ```

// Module declarations
pub mod blend;
pub mod blend_builder;
pub mod error;

// Re-export main functionality at crate root
pub use blend::{blend, blend_alpha, blend_alpha_stencil, blend_stencil};
pub use blend_builder::BlendBuilder;
pub use error::BlendError;

// Re-export the pixel model so callers don't need the core crate for it.
pub use alpha_stencil_blend::pixel::Rgba8888;
