use twinview_core::frame::ImageSize;
use twinview_core::load::LoadOutcome;

/// Control panel state.
#[derive(Default)]
pub struct UIState {
    /// Label and size of the image the store currently holds.
    pub current: Option<(String, ImageSize)>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Track what the store holds after a load was applied, and log it.
    pub fn record(&mut self, outcome: &LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded { label, size } => {
                self.current = Some((label.clone(), *size));
            }
            LoadOutcome::Cleared { .. } => {
                self.current = None;
            }
            LoadOutcome::Unchanged { .. } => {}
        }
        self.add_log(outcome.to_string());
    }
}
