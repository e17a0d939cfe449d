mod folder;

pub use folder::{is_candidate, FolderSource, EXTENSIONS};

use anyhow::Result;
use image::RgbImage;
use std::path::PathBuf;

/// A decoded image together with the path it was read from
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    pub pixels: RgbImage,
}

/// Trait for batch image sources
pub trait ImageSource {
    /// Load the next image, or `None` once the source is exhausted
    fn next_image(&mut self) -> Option<Result<SourceImage>>;

    /// Number of images not yet returned
    fn remaining(&self) -> usize;
}
