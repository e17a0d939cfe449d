use crate::error::{Error, Result};
use crate::masking::Mask;
use image::RgbImage;

/// Merge `original` back into `transformed` wherever `mask` is set
///
/// Unmasked pixels keep their transformed value. All three inputs must
/// share the same dimensions.
pub fn composite(original: &RgbImage, transformed: &RgbImage, mask: &Mask) -> Result<RgbImage> {
    let expected = original.dimensions();
    ensure_dimensions("transformed image", expected, transformed.dimensions())?;
    ensure_dimensions("mask", expected, mask.dimensions())?;

    let mut output = transformed.clone();
    for ((out, src), &keep) in output
        .pixels_mut()
        .zip(original.pixels())
        .zip(mask.as_slice())
    {
        if keep {
            *out = *src;
        }
    }

    Ok(output)
}

fn ensure_dimensions(what: &'static str, expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}
