use crate::gesture::{NavigationIntent, Point};

/// Persistent navigation state of one viewer surface.
///
/// While `zoom_to_fit` is set, `zoom_level` stays 0 and `pan_offset` stays at
/// the origin; fit mode recomputes placement from the current sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerState {
    pub zoom_to_fit: bool,
    /// Step on the √2 zoom ladder, 0 = 100%.
    pub zoom_level: i32,
    /// Committed pan in screen pixels.
    pub pan_offset: Point,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            zoom_to_fit: true,
            zoom_level: 0,
            pan_offset: Point::ZERO,
        }
    }
}

impl ViewerState {
    /// Back to fit mode (new image loaded).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Double-click: flip between fit and 100%, dropping any pan.
    pub fn toggle_fit(&mut self) {
        self.zoom_to_fit = !self.zoom_to_fit;
        self.zoom_level = 0;
        self.pan_offset = Point::ZERO;
    }

    /// Move along the zoom ladder. Leaving fit mode starts from level 0.
    pub fn step_zoom(&mut self, steps: i32) {
        if steps == 0 {
            return;
        }
        if self.zoom_to_fit {
            self.zoom_to_fit = false;
            self.zoom_level = 0;
            self.pan_offset = Point::ZERO;
        }
        self.zoom_level = self.zoom_level.saturating_add(steps);
    }

    /// Commit a pan. Ignored in fit mode.
    pub fn pan_by(&mut self, delta: Point) {
        if !self.zoom_to_fit {
            self.pan_offset = self.pan_offset.offset_by(delta);
        }
    }

    /// Apply one frame's intent: pan, then zoom, then the end-of-frame toggle.
    ///
    /// The toggle flips the mode the frame started in, so a scroll that left
    /// fit mode earlier in the same frame does not cancel a double-click.
    pub fn apply(&mut self, intent: &NavigationIntent) {
        let was_fit = self.zoom_to_fit;
        self.pan_by(intent.pan_delta);
        self.step_zoom(intent.zoom_delta);
        if intent.toggle_fit {
            self.zoom_to_fit = was_fit;
            self.toggle_fit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fit() {
        let s = ViewerState::default();
        assert!(s.zoom_to_fit);
        assert_eq!(s.zoom_level, 0);
        assert_eq!(s.pan_offset, Point::ZERO);
    }

    #[test]
    fn test_pan_ignored_in_fit_mode() {
        let mut s = ViewerState::default();
        s.pan_by(Point::new(10, 10));
        assert_eq!(s.pan_offset, Point::ZERO);
    }

    #[test]
    fn test_zoom_leaves_fit_mode() {
        let mut s = ViewerState::default();
        s.step_zoom(-2);
        assert!(!s.zoom_to_fit);
        assert_eq!(s.zoom_level, -2);
    }

    #[test]
    fn test_toggle_uses_mode_at_frame_start() {
        let mut s = ViewerState::default();
        s.apply(&NavigationIntent {
            pan_delta: Point::ZERO,
            zoom_delta: 1,
            toggle_fit: true,
        });
        assert!(!s.zoom_to_fit);
        assert_eq!(s.zoom_level, 0);
    }

    #[test]
    fn test_zoom_saturates() {
        let mut s = ViewerState {
            zoom_to_fit: false,
            zoom_level: i32::MAX - 1,
            pan_offset: Point::ZERO,
        };
        s.step_zoom(5);
        assert_eq!(s.zoom_level, i32::MAX);
    }
}
