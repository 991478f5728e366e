use std::path::PathBuf;

pub use cli::CLIParser;
pub use color::{Color, ColorAdjustment};
pub use color_table::{save_color_table, ColorTableWriter, COLOR_MODEL_HEADER};
pub use error::{Error, ErrorKind};
pub use raster::{reducer::PixelReducer, ReductionOptions, ResamplingFilter};
use raster::{open_input_image, preview::save_palette_preview};

mod cli;
mod color;
mod color_table;
mod error;
mod logger;
pub mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    number_of_colors: usize,
    working_resolution: u32,
    resampling_filter: ResamplingFilter,
    color_adjustments: Vec<ColorAdjustment>,
    preview_file: Option<PathBuf>,
}

impl Arguments {
    pub fn output_file(&self) -> &PathBuf {
        &self.output_file
    }
}

/// Extracts the dominant colors of the input image, applies the requested
/// adjustments and writes them as a color table. Returns the colors written.
pub fn generate_color_table(arguments: &Arguments) -> Result<Vec<Color>> {
    let image = open_input_image(&arguments.input_file)?;
    let reducer = PixelReducer::new(ReductionOptions::from(arguments));
    let mut colors = reducer.extract(&image, arguments.number_of_colors)?;
    logger::log_palette(&colors);
    for adjustment in &arguments.color_adjustments {
        adjustment.apply(&mut colors)?;
    }
    save_color_table(&colors, &arguments.output_file)?;
    if let Some(preview_file) = &arguments.preview_file {
        save_palette_preview(&colors, preview_file)?;
    }
    Ok(colors)
}
