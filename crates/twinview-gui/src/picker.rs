use twinview_core::error::PickerError;
use twinview_core::io::source::{FileSource, OpenedFile, PathSource};

/// Native "open file" dialog. Blocks the calling thread until the user picks
/// or cancels, so it only ever runs on a loader thread.
pub struct DialogSource;

impl FileSource for DialogSource {
    fn open(&mut self, extensions: &[String]) -> Result<OpenedFile, PickerError> {
        let path = rfd::FileDialog::new()
            .add_filter("Images", extensions)
            .pick_file()
            .ok_or(PickerError::Cancelled)?;
        tracing::debug!(path = %path.display(), "file chosen");
        PathSource::new(path).open(extensions)
    }
}
