pub mod state;
pub mod transform;

pub use state::ViewerState;
pub use transform::{compute_transform, fit_scale, step_scale, PlacedRect, Placement, ViewportSize};
