use anyhow::{Context, Result};
use clap::Parser;
use redkeep::config::{BatchConfig, DEFAULT_FIXED_HUE_VALUE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Image augmentation that keeps red and pink pixels", long_about = None)]
struct Args {
    /// Path to the directory containing input images
    #[arg(long, alias = "input_folder")]
    input_folder: PathBuf,

    /// Path to the directory where output images will be saved
    /// (currently ignored: images are overwritten in the input folder)
    #[arg(long, alias = "output_folder")]
    output_folder: PathBuf,

    /// Fixed hue value to add for augmentation (not applied)
    #[arg(
        long,
        alias = "fixed_hue_value",
        default_value_t = DEFAULT_FIXED_HUE_VALUE,
        allow_negative_numbers = true
    )]
    fixed_hue_value: i32,

    /// Grayscale strength, 0.0 (none) to 1.0 (full)
    #[arg(long, default_value_t = 1.0)]
    alpha: f32,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl From<Args> for BatchConfig {
    fn from(args: Args) -> Self {
        Self {
            input_folder: args.input_folder,
            output_folder: args.output_folder,
            fixed_hue_value: args.fixed_hue_value,
            alpha: args.alpha,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    tracing::info!("redkeep starting");
    tracing::info!("Input: {}", args.input_folder.display());
    tracing::info!("Grayscale alpha: {}", args.alpha);

    let config = BatchConfig::from(args);
    let summary = redkeep::run(&config).context("Batch aborted")?;

    tracing::info!(
        "{} image(s): {} pixel(s) kept, {} transformed",
        summary.images,
        summary.kept_pixels,
        summary.transformed_pixels
    );

    Ok(())
}
