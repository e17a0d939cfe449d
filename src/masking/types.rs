use crate::error::{Error, Result};
use image::RgbImage;

fn check_len(len: usize, width: u32, height: u32) -> Result<()> {
    if len != width as usize * height as usize {
        return Err(Error::BufferSize { len, width, height });
    }
    Ok(())
}

/// Normalized hue per pixel, row-major, values in [0, 1)
#[derive(Debug, Clone, PartialEq)]
pub struct HueMap {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl HueMap {
    pub fn new(width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        check_len(values.len(), width, height)?;
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Values produced one per pixel of a `width`x`height` image
    pub(crate) fn from_pixels(width: u32, height: u32, values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        Self {
            width,
            height,
            values,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Boolean selector: true where the original pixel must survive compositing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    selected: Vec<bool>,
}

impl Mask {
    pub fn new(width: u32, height: u32, selected: Vec<bool>) -> Result<Self> {
        check_len(selected.len(), width, height)?;
        Ok(Self {
            width,
            height,
            selected,
        })
    }

    /// Build a mask by applying `predicate` to every hue in `hues`
    pub fn from_hue_map<F>(hues: &HueMap, predicate: F) -> Self
    where
        F: Fn(f32) -> bool,
    {
        let (width, height) = hues.dimensions();
        Self {
            width,
            height,
            selected: hues.values().iter().map(|&h| predicate(h)).collect(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.selected[y as usize * self.width as usize + x as usize]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.selected
    }

    pub fn count_selected(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Inclusive interval on the normalized hue axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRange {
    pub low: f32,
    pub high: f32,
}

impl HueRange {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, hue: f32) -> bool {
        hue >= self.low && hue <= self.high
    }
}

/// Trait for mask builders
/// Allows swapping the hue classifier for another pixel selector
pub trait MaskBuilder {
    /// Classify every pixel of `image`
    ///
    /// # Returns
    /// * Mask with the same dimensions as `image`
    fn build(&self, image: &RgbImage) -> Mask;

    /// Short label used in log output
    fn name(&self) -> &str;
}
