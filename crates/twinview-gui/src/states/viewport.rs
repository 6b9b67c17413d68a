use twinview_core::config::GestureConfig;
use twinview_core::frame::ImageSize;
use twinview_core::gesture::GestureInterpreter;
use twinview_core::view::ViewerState;

use crate::input::InputTranslator;

/// Viewer surface display state.
pub struct ViewportState {
    pub view: ViewerState,
    pub gestures: GestureInterpreter,
    pub input: InputTranslator,
    pub texture: Option<egui::TextureHandle>,
    /// Size of the image the texture was built from.
    pub image_size: Option<ImageSize>,
    /// Store generation the texture was built from.
    pub generation: u64,
    pub viewing_label: String,
}

impl ViewportState {
    pub fn new(gesture: GestureConfig) -> Self {
        Self {
            view: ViewerState::default(),
            gestures: GestureInterpreter::new(gesture),
            input: InputTranslator::default(),
            texture: None,
            image_size: None,
            generation: 0,
            viewing_label: String::new(),
        }
    }

    /// New image: back to fit mode and forget any half-finished drag.
    pub fn reset_view(&mut self) {
        self.view.reset();
        self.gestures.cancel_drag();
    }
}
