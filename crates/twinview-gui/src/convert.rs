use twinview_core::frame::DecodedImage;

/// Convert a decoded RGBA8 image to an egui ColorImage.
pub fn image_to_color_image(image: &DecodedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        image.as_rgba(),
    )
}
