mod hue;
mod red_pink;
pub mod types;

pub use hue::{hue_map, normalized_hue};
pub use red_pink::{is_red_or_pink, HueMaskBuilder, RED_PINK_RANGES};
pub use types::{HueMap, HueRange, Mask, MaskBuilder};

/// Create the default mask builder (red and pink hues)
pub fn create_default_builder() -> Box<dyn MaskBuilder> {
    Box::new(HueMaskBuilder::default())
}
