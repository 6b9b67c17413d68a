use std::io::{Cursor, Read};

use image::ImageFormat;

use crate::error::{Result, ViewerError};
use crate::frame::DecodedImage;

/// Turns an opened byte stream into a displayable image.
///
/// Implementations must be callable from a background thread; the load
/// pipeline decodes before it touches the image store.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, reader: &mut dyn Read, label: &str) -> Result<DecodedImage>;
}

/// Decoder backed by the `image` crate. Handles every raster format enabled in
/// the workspace `image` features (JPEG, PNG, GIF, BMP, WebP).
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterDecoder;

impl ImageDecoder for RasterDecoder {
    fn decode(&self, reader: &mut dyn Read, label: &str) -> Result<DecodedImage> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        decode_bytes(&bytes, label)
    }
}

/// Decode an in-memory encoded image. The format is sniffed from the content,
/// not from any file extension.
pub fn decode_bytes(bytes: &[u8], label: &str) -> Result<DecodedImage> {
    let img = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ViewerError::InvalidDimensions { width, height });
    }
    Ok(DecodedImage::new(rgba, label))
}

/// Guess the container format from the leading bytes.
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}
