use super::Augmenter;
use image::{Rgb, RgbImage};

/// BT.601 luma of an RGB pixel, rounded to the nearest level
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    let r = pixel[0] as f32;
    let g = pixel[1] as f32;
    let b = pixel[2] as f32;

    (0.299 * r + 0.587 * g + 0.114 * b).round().clamp(0.0, 255.0) as u8
}

/// Desaturation blended with the original by `alpha`
///
/// `alpha = 1.0` replaces every pixel with its luma; `alpha = 0.0` leaves the
/// image untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grayscale {
    alpha: f32,
}

impl Grayscale {
    pub fn new(alpha: f32) -> Self {
        let alpha = if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self { alpha }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    fn blend(&self, channel: u8, gray: u8) -> u8 {
        (self.alpha * gray as f32 + (1.0 - self.alpha) * channel as f32)
            .round()
            .clamp(0.0, 255.0) as u8
    }
}

impl Default for Grayscale {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Augmenter for Grayscale {
    fn augment(&self, image: &RgbImage) -> RgbImage {
        let _span = tracing::debug_span!("grayscale", alpha = self.alpha).entered();

        let mut output = image.clone();
        for pixel in output.pixels_mut() {
            let gray = luma(pixel);
            pixel.0 = pixel.0.map(|c| self.blend(c, gray));
        }
        output
    }

    fn name(&self) -> &str {
        "grayscale"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_of_primaries() {
        assert_eq!(luma(&Rgb([255, 0, 0])), 76);
        assert_eq!(luma(&Rgb([0, 255, 0])), 150);
        assert_eq!(luma(&Rgb([0, 0, 255])), 29);
        assert_eq!(luma(&Rgb([255, 255, 255])), 255);
        assert_eq!(luma(&Rgb([0, 0, 0])), 0);
    }

    #[test]
    fn full_alpha_desaturates() {
        let image = RgbImage::from_pixel(2, 2, Rgb([0, 255, 0]));
        let out = Grayscale::default().augment(&image);
        assert_eq!(out.dimensions(), (2, 2));
        assert!(out.pixels().all(|p| *p == Rgb([150, 150, 150])));
    }

    #[test]
    fn zero_alpha_is_identity() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 40, y as u8 * 90, 17]));
        let out = Grayscale::new(0.0).augment(&image);
        assert_eq!(out, image);
    }

    #[test]
    fn half_alpha_lands_between_original_and_gray() {
        let image = RgbImage::from_pixel(1, 1, Rgb([0, 255, 0]));
        let out = Grayscale::new(0.5).augment(&image);
        // 0.5 * 150 + 0.5 * {0, 255, 0}
        assert_eq!(*out.get_pixel(0, 0), Rgb([75, 203, 75]));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Grayscale::new(3.0).alpha(), 1.0);
        assert_eq!(Grayscale::new(-1.0).alpha(), 0.0);
        assert_eq!(Grayscale::new(f32::NAN).alpha(), 1.0);
    }
}
