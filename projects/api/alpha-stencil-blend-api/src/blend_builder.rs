//! Builder pattern implementation for blend configuration.

use crate::error::BlendError;

/// Blend configuration builder.
///
/// Holds the optional opacity source and stencil for a blend, so callers
/// that decide their sources at runtime can configure once and apply to any
/// number of colour buffers.
///
/// With only an opacity source, alpha bytes come from the opacity green
/// channel. With both sources, the stencil masks that copy. With only a
/// stencil, alpha bytes become 255 or 0. With neither, applying is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct BlendBuilder<'buf> {
    opacity_source: Option<&'buf [u8]>,
    stencil: Option<&'buf [u8]>,
}

impl<'buf> BlendBuilder<'buf> {
    /// Create a new blend builder with no sources configured.
    pub fn new() -> Self {
        Self {
            opacity_source: None,
            stencil: None,
        }
    }

    /// Set the opacity source.
    ///
    /// Each colour pixel's alpha byte is replaced by the green byte of the
    /// matching pixel in this buffer.
    pub fn opacity_source(mut self, opacity: &'buf [u8]) -> Self {
        self.opacity_source = Some(opacity);
        self
    }

    /// Set the stencil.
    ///
    /// Pixels whose stencil red byte is below 128 get their alpha byte forced
    /// to 0. Without an opacity source, the remaining pixels become fully
    /// opaque (255) instead.
    pub fn stencil(mut self, stencil: &'buf [u8]) -> Self {
        self.stencil = Some(stencil);
        self
    }

    /// Apply the configured blend to a colour buffer.
    ///
    /// # Parameters
    /// - `color`: The RGBA8888 colour buffer, rewritten in place
    ///
    /// # Returns
    /// Ok(()) on success, or an error on failure.
    ///
    /// # Errors
    /// Returns [`BlendError`] if a buffer fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # use alpha_stencil_blend_api::BlendBuilder;
    /// let mut color = vec![0u8; 4 * 100]; // 100 RGBA8888 pixels
    /// let opacity = vec![0u8; 4 * 100];
    /// let stencil = vec![255u8; 4 * 100];
    ///
    /// let builder = BlendBuilder::new()
    ///     .opacity_source(&opacity)
    ///     .stencil(&stencil);
    ///
    /// builder.apply(&mut color)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn apply(&self, color: &mut [u8]) -> Result<(), BlendError> {
        crate::blend::blend(color, self.opacity_source, self.stencil)
    }
}

impl Default for BlendBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
