use std::path::Path;

use clap::builder::PossibleValue;
use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::error::Error;
use crate::Arguments;

pub mod preview;
pub mod reducer;

pub const CANONICAL_RESOLUTION: u32 = 150;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResamplingFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ValueEnum for ResamplingFilter {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Nearest,
            Self::Triangle,
            Self::CatmullRom,
            Self::Gaussian,
            Self::Lanczos3,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Nearest => Some(PossibleValue::new("Nearest")),
            Self::Triangle => Some(PossibleValue::new("Triangle")),
            Self::CatmullRom => Some(PossibleValue::new("CatmullRom")),
            Self::Gaussian => Some(PossibleValue::new("Gaussian")),
            Self::Lanczos3 => Some(PossibleValue::new("Lanczos3")),
        }
    }
}

impl From<ResamplingFilter> for FilterType {
    fn from(value: ResamplingFilter) -> Self {
        match value {
            ResamplingFilter::Nearest => FilterType::Nearest,
            ResamplingFilter::Triangle => FilterType::Triangle,
            ResamplingFilter::CatmullRom => FilterType::CatmullRom,
            ResamplingFilter::Gaussian => FilterType::Gaussian,
            ResamplingFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// How an image is brought to the working resolution before its colors are
/// counted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReductionOptions {
    pub width: u32,
    pub height: u32,
    pub filter: ResamplingFilter,
}

impl Default for ReductionOptions {
    fn default() -> Self {
        Self {
            width: CANONICAL_RESOLUTION,
            height: CANONICAL_RESOLUTION,
            filter: ResamplingFilter::CatmullRom,
        }
    }
}

impl From<&Arguments> for ReductionOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            width: value.working_resolution,
            height: value.working_resolution,
            filter: value.resampling_filter,
        }
    }
}

pub fn open_input_image(file_path: &Path) -> crate::Result<DynamicImage> {
    image::open(file_path)
        .map_err(|e| Error::UnableToOpenInputImage(file_path.display().to_string(), e))
}

/// Converts any pixel encoding to plain RGB and resizes it to the working
/// resolution. Alpha is dropped, grayscale is expanded.
pub fn normalize(image: &DynamicImage, options: &ReductionOptions) -> crate::Result<RgbImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::EmptyImage(image.width(), image.height()));
    }
    if options.width == 0 || options.height == 0 {
        return Err(Error::InvalidWorkingResolution(
            options.width,
            options.height,
        ));
    }
    let rgb = image.to_rgb8();
    if rgb.dimensions() == (options.width, options.height) {
        return Ok(rgb);
    }
    log::debug!(
        "Resizing {}x{} image to {}x{} using {:?}",
        rgb.width(),
        rgb.height(),
        options.width,
        options.height,
        options.filter
    );
    Ok(imageops::resize(
        &rgb,
        options.width,
        options.height,
        options.filter.into(),
    ))
}
