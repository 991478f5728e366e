use std::collections::BTreeMap;

use image::{DynamicImage, RgbImage};

use super::{normalize, ReductionOptions};
use crate::color::Color;

/// Reduces an image to its most frequent exact pixel values.
///
/// Colors are grouped by exact equality, there is no binning: two colors
/// differing by one in a single channel are counted separately. The result is
/// ordered by descending count; equal counts are ordered by ascending
/// `(red, green, blue)`.
pub struct PixelReducer {
    options: ReductionOptions,
}

impl PixelReducer {
    pub fn new(options: ReductionOptions) -> Self {
        Self { options }
    }

    /// Returns at most `num_colors` colors. Fewer are returned when the
    /// normalized image does not contain that many distinct colors.
    pub fn extract(&self, image: &DynamicImage, num_colors: usize) -> crate::Result<Vec<Color>> {
        let normalized = normalize(image, &self.options)?;
        let colors = rank_colors(&normalized, num_colors);
        log::debug!(
            "Ranked {} of the requested {} colors",
            colors.len(),
            num_colors
        );
        Ok(colors)
    }
}

impl Default for PixelReducer {
    fn default() -> Self {
        Self::new(ReductionOptions::default())
    }
}

/// Occurrence count per distinct color, keyed in ascending RGB order.
fn count_colors(image: &RgbImage) -> BTreeMap<Color, usize> {
    let mut counts = BTreeMap::new();
    for pixel in image.pixels() {
        *counts.entry(Color::from(pixel)).or_insert(0) += 1;
    }
    counts
}

pub fn rank_colors(image: &RgbImage, num_colors: usize) -> Vec<Color> {
    let mut counted: Vec<(Color, usize)> = count_colors(image).into_iter().collect();
    // stable, so ties keep the ascending RGB order of the map
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
        .into_iter()
        .take(num_colors)
        .map(|(color, _)| color)
        .collect()
}
