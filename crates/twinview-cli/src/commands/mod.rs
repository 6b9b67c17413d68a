pub mod config;
pub mod info;
pub mod place;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use twinview_core::config::ViewerConfig;
use twinview_core::io::source::{FileSource, PathSource};

/// Config from `--config`, or the defaults.
pub fn load_config(path: Option<&PathBuf>) -> Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ViewerConfig::default()),
    }
}

/// Open `path` the same way the viewer does (extension check included) and
/// read it fully. Returns the display label and the encoded bytes.
pub fn read_image_file(path: &Path, extensions: &[String]) -> Result<(String, Vec<u8>)> {
    let mut opened = PathSource::new(path).open(extensions)?;
    let mut bytes = Vec::new();
    opened
        .reader
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((opened.label, bytes))
}
