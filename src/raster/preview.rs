use std::path::Path;

use image::{Rgb, RgbImage};

use crate::color::Color;
use crate::error::Error;

pub const SWATCH_SIZE: u32 = 50;

/// Lays the colors out left to right as square swatches.
pub fn render_palette_strip(colors: &[Color], swatch_size: u32) -> crate::Result<RgbImage> {
    if colors.is_empty() {
        return Err(Error::EmptyPalettePreview);
    }
    if swatch_size == 0 {
        return Err(Error::InvalidSwatchSize(swatch_size));
    }
    let width = u32::try_from(colors.len())
        .ok()
        .and_then(|count| swatch_size.checked_mul(count))
        .filter(|width| {
            (*width as usize)
                .checked_mul(swatch_size as usize)
                .and_then(|area| area.checked_mul(3))
                .is_some()
        })
        .ok_or(Error::PalettePreviewTooLarge(colors.len(), swatch_size))?;
    Ok(RgbImage::from_fn(width, swatch_size, |x, _| {
        Rgb::from(colors[(x / swatch_size) as usize])
    }))
}

/// The image format is chosen from the extension of `file_path`.
pub fn save_palette_preview(colors: &[Color], file_path: &Path) -> crate::Result<()> {
    let strip = render_palette_strip(colors, SWATCH_SIZE)?;
    strip
        .save(file_path)
        .map_err(|e| Error::FailedToWritePalettePreview(file_path.display().to_string(), e))
}
