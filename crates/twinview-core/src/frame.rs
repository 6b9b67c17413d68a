use std::sync::Arc;

use image::RgbaImage;

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A fully decoded RGBA8 image.
///
/// Pixel storage is reference counted, so cloning a `DecodedImage` (e.g. when
/// taking a store snapshot) never copies pixels.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pixels: Arc<RgbaImage>,
    /// Human-readable origin of the image (file name, "memory", ...).
    pub label: String,
}

impl DecodedImage {
    pub fn new(pixels: RgbaImage, label: impl Into<String>) -> Self {
        Self {
            pixels: Arc::new(pixels),
            label: label.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width(), self.height())
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}
