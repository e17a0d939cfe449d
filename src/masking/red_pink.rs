use super::hue::hue_map;
use super::types::{HueRange, Mask, MaskBuilder};
use image::RgbImage;

/// Hue ranges selected by default: reds, pinks, and a narrower red band
///
/// The last range is contained in the first. It is kept as a separate entry.
pub const RED_PINK_RANGES: [HueRange; 3] = [
    HueRange::new(0.0, 0.1),
    HueRange::new(0.9, 1.0),
    HueRange::new(0.0, 0.05),
];

/// Masking predicate over a single normalized hue
pub fn is_red_or_pink(hue: f32) -> bool {
    RED_PINK_RANGES.iter().any(|range| range.contains(hue))
}

/// Hue-threshold mask builder
///
/// A pixel is selected when its hue falls inside any of the configured ranges.
#[derive(Debug, Clone)]
pub struct HueMaskBuilder {
    ranges: Vec<HueRange>,
}

impl HueMaskBuilder {
    pub fn new(ranges: Vec<HueRange>) -> Self {
        Self { ranges }
    }

    /// Builder selecting reds and pinks
    pub fn red_and_pink() -> Self {
        Self::new(RED_PINK_RANGES.to_vec())
    }

    pub fn ranges(&self) -> &[HueRange] {
        &self.ranges
    }

    pub fn is_selected(&self, hue: f32) -> bool {
        self.ranges.iter().any(|range| range.contains(hue))
    }
}

impl Default for HueMaskBuilder {
    fn default() -> Self {
        Self::red_and_pink()
    }
}

impl MaskBuilder for HueMaskBuilder {
    fn build(&self, image: &RgbImage) -> Mask {
        let _span = tracing::debug_span!("hue_mask").entered();

        let hues = hue_map(image);
        let mask = Mask::from_hue_map(&hues, |h| self.is_selected(h));

        tracing::debug!(
            "Selected {} of {} pixels",
            mask.count_selected(),
            mask.len()
        );

        mask
    }

    fn name(&self) -> &str {
        "hue"
    }
}
