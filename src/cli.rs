use crate::color::ColorAdjustment;
use crate::raster::{ResamplingFilter, CANONICAL_RESOLUTION};
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

const DEFAULT_OUTPUT_FILE: &str = "colors.cpt";
const DEFAULT_NUMBER_OF_COLORS: &str = "5";
const MAX_NUMBER_OF_COLORS: i64 = 20;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_number_of_colors_argument(command);
        let command = Self::register_working_resolution_argument(command);
        let command = Self::register_resampling_filter_argument(command);
        let command = Self::register_color_adjustments_argument(command);
        Self::register_preview_file_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_number_of_colors_argument(command: Command) -> Command {
        command.arg(Self::create_number_of_colors_argument())
    }

    fn register_working_resolution_argument(command: Command) -> Command {
        command.arg(Self::create_working_resolution_argument())
    }

    fn register_resampling_filter_argument(command: Command) -> Command {
        command.arg(Self::create_resampling_filter_argument())
    }

    fn register_color_adjustments_argument(command: Command) -> Command {
        command.arg(Self::create_color_adjustments_argument())
    }

    fn register_preview_file_argument(command: Command) -> Command {
        command.arg(Self::create_preview_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input image")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to the CPT output file")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_OUTPUT_FILE)
    }

    fn create_number_of_colors_argument() -> Arg {
        arg!(number_of_colors: -n --colors <COUNT> "Number of dominant colors to extract")
            .default_value(DEFAULT_NUMBER_OF_COLORS)
            .value_parser(value_parser!(u8).range(1..=MAX_NUMBER_OF_COLORS))
    }

    fn create_working_resolution_argument() -> Arg {
        arg!(working_resolution: -s --size <PIXELS> "Side length the image is resized to before counting")
            .default_value(CANONICAL_RESOLUTION.to_string())
            .value_parser(value_parser!(u32).range(1..))
    }

    fn create_resampling_filter_argument() -> Arg {
        arg!(resampling_filter: -f --filter <FILTER> "Resampling filter used for resizing")
            .default_value("CatmullRom")
            .value_parser(value_parser!(ResamplingFilter))
    }

    fn create_color_adjustments_argument() -> Arg {
        arg!(color_adjustments: -a --adjust <ADJUSTMENT> "Replace an extracted color, given as INDEX=R,G,B")
            .action(ArgAction::Append)
            .value_parser(value_parser!(ColorAdjustment))
    }

    fn create_preview_file_argument() -> Arg {
        arg!(preview_file: -p --preview <PATH> "Path to a palette preview image")
            .value_parser(value_parser!(PathBuf))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            number_of_colors: Self::extract_number_of_colors_argument(matches),
            working_resolution: Self::extract_working_resolution_argument(matches),
            resampling_filter: Self::extract_resampling_filter_argument(matches),
            color_adjustments: Self::extract_color_adjustments_argument(matches),
            preview_file: Self::extract_preview_file_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Output file must be provided, but was unset.")
            .clone()
    }

    fn extract_number_of_colors_argument(matches: &ArgMatches) -> usize {
        let number_of_colors = matches
            .get_one::<u8>("number_of_colors")
            .expect("Number of colors must be provided, but was unset.");
        usize::from(*number_of_colors)
    }

    fn extract_working_resolution_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("working_resolution")
            .expect("Working resolution must be provided, but was unset.")
            .to_owned()
    }

    fn extract_resampling_filter_argument(matches: &ArgMatches) -> ResamplingFilter {
        matches
            .get_one::<ResamplingFilter>("resampling_filter")
            .expect("Resampling filter must be provided, but was unset.")
            .to_owned()
    }

    fn extract_color_adjustments_argument(matches: &ArgMatches) -> Vec<ColorAdjustment> {
        matches
            .get_many::<ColorAdjustment>("color_adjustments")
            .map(|adjustments| adjustments.copied().collect())
            .unwrap_or_default()
    }

    fn extract_preview_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("preview_file").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
