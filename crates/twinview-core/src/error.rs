use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("File picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Surface terminated: {0}")]
    SurfaceTerminated(String),
}

/// Failure of the choose-and-open step. Never changes viewer state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("cancelled by user")]
    Cancelled,

    #[error("{0}")]
    Failed(String),
}

impl ViewerError {
    /// Whether this error came from the picker rather than from decoding.
    pub fn is_picker(&self) -> bool {
        matches!(self, Self::Picker(_))
    }
}

impl From<toml::de::Error> for ViewerError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
