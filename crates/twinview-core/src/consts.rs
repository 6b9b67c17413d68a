/// Two presses closer together than this (milliseconds) form a double-click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 300;

/// Scroll events closer together than this (milliseconds) are treated as
/// duplicates of the previous wheel tick and dropped.
pub const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 50;

/// Extensions offered by the file picker.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Initial inner size of the viewer window.
pub const DEFAULT_VIEWER_SIZE: [f32; 2] = [1024.0, 768.0];

/// Initial inner size of the control panel window.
pub const DEFAULT_CONTROL_SIZE: [f32; 2] = [320.0, 240.0];

/// Tolerance used when comparing computed placements.
pub const EPSILON: f32 = 1e-4;
