//! Image placement inside the viewport.
//!
//! Two modes:
//! - fit: largest scale that shows the whole image, centered. Pan is ignored.
//! - stepped: scale from a ladder with two steps per octave
//!   (1, 1.41, 2, 2.83, 4, ... and 0.71, 0.5, 0.35, ... below 1), centered
//!   and then shifted by the live pan offset.
//!
//! Neither scale nor offset is clamped; the image may be zoomed arbitrarily
//! or panned fully out of view.

use std::f32::consts::SQRT_2;

use crate::frame::ImageSize;
use crate::gesture::Point;

/// Viewport size in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Affine placement: image pixel `(u, v)` lands at
/// `(origin_x + scale * u, origin_y + scale * v)` in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl PlacedRect {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

impl Placement {
    /// Where the whole image ends up.
    pub fn image_rect(&self, image: ImageSize) -> PlacedRect {
        PlacedRect {
            min_x: self.origin_x,
            min_y: self.origin_y,
            max_x: self.origin_x + self.scale * image.width as f32,
            max_y: self.origin_y + self.scale * image.height as f32,
        }
    }

    /// Map a viewport position back to image pixel coordinates.
    pub fn to_image(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.origin_x) / self.scale, (y - self.origin_y) / self.scale)
    }
}

/// Scale for a ladder step: `2^(level/2)`, times √2 on odd levels.
/// Negative levels use floor division, so -1 → 0.707, -2 → 0.5.
pub fn step_scale(level: i32) -> f32 {
    let octave = 2f32.powi(level.div_euclid(2));
    if level.rem_euclid(2) == 1 {
        octave * SQRT_2
    } else {
        octave
    }
}

/// Largest scale at which the whole image fits. 1.0 for degenerate sizes.
pub fn fit_scale(image: ImageSize, viewport: ViewportSize) -> f32 {
    if image.is_empty() || viewport.is_empty() {
        return 1.0;
    }
    let sx = viewport.width / image.width as f32;
    let sy = viewport.height / image.height as f32;
    sx.min(sy)
}

/// Compute where to draw `image` inside `viewport`.
///
/// `live_offset` is the committed pan plus any in-progress drag delta; it is
/// ignored in fit mode.
pub fn compute_transform(
    image: ImageSize,
    viewport: ViewportSize,
    zoom_to_fit: bool,
    zoom_level: i32,
    live_offset: Point,
) -> Placement {
    let scale = if zoom_to_fit {
        fit_scale(image, viewport)
    } else {
        step_scale(zoom_level)
    };

    let mut origin_x = (viewport.width - scale * image.width as f32) / 2.0;
    let mut origin_y = (viewport.height - scale * image.height as f32) / 2.0;
    if !zoom_to_fit {
        origin_x += live_offset.x as f32;
        origin_y += live_offset.y as f32;
    }

    Placement {
        scale,
        origin_x,
        origin_y,
    }
}
