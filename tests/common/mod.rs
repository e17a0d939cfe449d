use image::{Rgb, RgbImage};
use std::path::Path;

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const PINK: Rgb<u8> = Rgb([255, 0, 128]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

/// 4x1 strip: red, pink, green, blue
pub fn swatch_strip() -> RgbImage {
    let colours = [RED, PINK, GREEN, BLUE];
    RgbImage::from_fn(4, 1, |x, _| colours[x as usize])
}

pub fn write_png(dir: &Path, name: &str, image: &RgbImage) {
    image.save(dir.join(name)).unwrap();
}

pub fn read_rgb(path: &Path) -> RgbImage {
    image::open(path).unwrap().to_rgb8()
}
