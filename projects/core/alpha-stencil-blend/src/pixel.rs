//! The RGBA8888 pixel model shared by all blend kernels.

/// Number of bytes in one interleaved RGBA8888 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Mask selecting the R, G and B bytes of a pixel loaded as a little-endian [`u32`].
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Mask selecting the alpha byte of a pixel loaded as a little-endian [`u32`].
pub const ALPHA_MASK: u32 = 0xFF00_0000;

/// Stencil red values at or above this threshold keep the pixel visible.
///
/// Values below it force the blended alpha to 0, hiding the pixel.
pub const STENCIL_OPAQUE_THRESHOLD: u8 = 128;

/// Represents a single RGBA8888 pixel as stored in the blend buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Rgba8888 {
    /// Constructs a new [`Rgba8888`] from the specified red, green, blue, and alpha components.
    ///
    /// Each parameter represents the intensity of its corresponding colour channel (0-255).
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_stencil_blend::pixel::Rgba8888;
    ///
    /// let pixel = Rgba8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the pixel as a little-endian [`u32`] word, matching how the
    /// blend kernels load pixels from memory.
    ///
    /// Red occupies bits 0..8, green bits 8..16, blue bits 16..24 and alpha
    /// bits 24..32.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_stencil_blend::pixel::Rgba8888;
    ///
    /// let pixel = Rgba8888::new(0x11, 0x22, 0x33, 0x44);
    /// assert_eq!(pixel.to_le_u32(), 0x4433_2211);
    /// ```
    #[inline]
    pub fn to_le_u32(&self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Constructs a [`Rgba8888`] from a little-endian [`u32`] word, the
    /// inverse of [`to_le_u32`](Self::to_le_u32).
    #[inline]
    pub fn from_le_u32(value: u32) -> Self {
        let [r, g, b, a] = value.to_le_bytes();
        Self { r, g, b, a }
    }
}
