mod grayscale;

pub use grayscale::{luma, Grayscale};

use image::RgbImage;

/// Trait for whole-image colour augmentations
pub trait Augmenter {
    /// Produce a transformed copy of `image` with identical dimensions
    fn augment(&self, image: &RgbImage) -> RgbImage;

    /// Short label used in log output
    fn name(&self) -> &str;
}
