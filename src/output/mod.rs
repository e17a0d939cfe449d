mod in_place;

pub use in_place::InPlaceWriter;

use anyhow::Result;
use image::RgbImage;
use std::path::Path;

/// Trait for output destinations
pub trait OutputSink {
    /// Write a processed image for the file at `path`
    fn write_image(&mut self, path: &Path, image: &RgbImage) -> Result<()>;

    /// Number of images written so far
    fn written(&self) -> usize;
}
