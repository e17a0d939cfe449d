use super::OutputSink;
use anyhow::{Context, Result};
use image::RgbImage;
use std::path::Path;

/// Writes each image back over the file it was loaded from
///
/// The encoder is chosen from the path's extension. No backup is kept.
#[derive(Debug, Default)]
pub struct InPlaceWriter {
    written: usize,
}

impl InPlaceWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for InPlaceWriter {
    fn write_image(&mut self, path: &Path, image: &RgbImage) -> Result<()> {
        image
            .save(path)
            .with_context(|| format!("Failed to save image to {}", path.display()))?;

        self.written += 1;
        Ok(())
    }

    fn written(&self) -> usize {
        self.written
    }
}
