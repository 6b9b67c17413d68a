use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use twinview_core::io::decode::{decode_bytes, detect_format};

use super::{load_config, read_image_file};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Viewer config (for the allowed extensions)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let (label, bytes) = read_image_file(&args.file, &config.loading.extensions)?;

    let format = detect_format(&bytes);
    let image = decode_bytes(&bytes, &label)?;

    println!("File:        {}", args.file.display());
    match format {
        Some(format) => println!("Format:      {:?}", format),
        None => println!("Format:      unknown"),
    }
    println!("Dimensions:  {}", image.size());
    println!("Encoded:     {:.1} KB", bytes.len() as f64 / 1024.0);

    let decoded_mb = image.as_rgba().len() as f64 / (1024.0 * 1024.0);
    println!("Decoded:     {:.1} MB (RGBA8)", decoded_mb);

    Ok(())
}
