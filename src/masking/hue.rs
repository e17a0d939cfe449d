use super::types::HueMap;
use image::{Rgb, RgbImage};
use palette::{encoding, Hsv, IntoColor, Srgb};

/// Normalized hue of one 8-bit RGB pixel
///
/// Channels are scaled to [0, 1] and converted to HSV. The hue angle is
/// returned as a fraction of a full turn, in [0, 1). Achromatic pixels
/// (r == g == b) have hue 0.0.
///
/// The conversion runs in f64 and is rounded to f32 once, so hues that are
/// exact fractions such as 0.9 or 0.1 land on the same f32 as the literal.
pub fn normalized_hue(pixel: &Rgb<u8>) -> f32 {
    let [r, g, b] = pixel.0;
    if r == g && g == b {
        return 0.0;
    }

    let rgb = Srgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
    let hsv: Hsv<encoding::Srgb, f64> = rgb.into_color();

    let hue = (hsv.hue.into_positive_degrees() / 360.0) as f32;
    // A negative angle a hair below zero can round up to a full turn
    if hue >= 1.0 {
        0.0
    } else {
        hue
    }
}

/// Convert an RGB image into its hue map
pub fn hue_map(image: &RgbImage) -> HueMap {
    let _span = tracing::debug_span!("hue_map").entered();

    let (width, height) = image.dimensions();
    let values: Vec<f32> = image.pixels().map(normalized_hue).collect();

    HueMap::from_pixels(width, height, values)
}
