use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use twinview_core::io::decode::decode_bytes;
use twinview_core::view::{compute_transform, ViewerState, ViewportSize};

use super::{load_config, read_image_file};
use crate::summary::print_placement_summary;

#[derive(Args)]
pub struct PlaceArgs {
    /// Input image file
    pub file: PathBuf,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: ViewportSize,

    /// Zoom ladder step (0 = 1:1, each step is x1.41). Fit mode if omitted.
    #[arg(long, allow_hyphen_values = true)]
    pub level: Option<i32>,

    /// Viewer config (for the allowed extensions)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &PlaceArgs) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let (label, bytes) = read_image_file(&args.file, &config.loading.extensions)?;
    let image = decode_bytes(&bytes, &label)?;

    let state = match args.level {
        Some(level) => ViewerState {
            zoom_to_fit: false,
            zoom_level: level,
            ..ViewerState::default()
        },
        None => ViewerState::default(),
    };

    let placement = compute_transform(
        image.size(),
        args.viewport,
        state.zoom_to_fit,
        state.zoom_level,
        state.pan_offset,
    );
    tracing::debug!(?placement, "computed placement");

    print_placement_summary(&label, image.size(), args.viewport, &state, &placement);
    Ok(())
}

fn parse_viewport(s: &str) -> Result<ViewportSize> {
    let Some((w, h)) = s.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got '{s}'");
    };
    let width: f32 = w.trim().parse()?;
    let height: f32 = h.trim().parse()?;
    if width <= 0.0 || height <= 0.0 {
        bail!("viewport must be positive, got {width}x{height}");
    }
    Ok(ViewportSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_viewport() {
        let v = parse_viewport("400x300").unwrap();
        assert_eq!(v, ViewportSize::new(400.0, 300.0));
        assert!(parse_viewport("400X300").is_ok());
    }

    #[test]
    fn rejects_bad_viewport() {
        assert!(parse_viewport("400").is_err());
        assert!(parse_viewport("0x300").is_err());
        assert!(parse_viewport("ax3").is_err());
    }
}
