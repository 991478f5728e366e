use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The image could not be turned into an RGB pixel buffer, or the request
    /// made against it is invalid.
    Input,
    /// A destination could not be written.
    Io,
}

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputImage(String, image::ImageError),
    EmptyImage(u32, u32),
    InvalidWorkingResolution(u32, u32),
    ColorIndexOutOfRange(usize, usize),
    EmptyPalettePreview,
    InvalidSwatchSize(u32),
    PalettePreviewTooLarge(usize, u32),
    UnableToCreateTemporaryFile(String, std::io::Error),
    FailedToWriteColorTable(std::io::Error),
    UnableToPersistColorTable(String, std::io::Error),
    FailedToWritePalettePreview(String, image::ImageError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnableToOpenInputImage(..)
            | Self::EmptyImage(..)
            | Self::InvalidWorkingResolution(..)
            | Self::ColorIndexOutOfRange(..)
            | Self::EmptyPalettePreview
            | Self::InvalidSwatchSize(..)
            | Self::PalettePreviewTooLarge(..) => ErrorKind::Input,
            Self::UnableToCreateTemporaryFile(..)
            | Self::FailedToWriteColorTable(..)
            | Self::UnableToPersistColorTable(..)
            | Self::FailedToWritePalettePreview(..) => ErrorKind::Io,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputImage(path, error) => {
                write!(f, "Unable to open input image '{}': {}", path, error)
            }
            Self::EmptyImage(width, height) => {
                write!(
                    f,
                    "Input image of size {}x{} contains no pixels",
                    width, height
                )
            }
            Self::InvalidWorkingResolution(width, height) => {
                write!(
                    f,
                    "Working resolution {}x{} is invalid. Both dimensions must be at least 1.",
                    width, height
                )
            }
            Self::ColorIndexOutOfRange(index, length) => {
                write!(
                    f,
                    "Color index {} is out of range for a palette of {} colors",
                    index, length
                )
            }
            Self::EmptyPalettePreview => {
                write!(f, "Palette preview requires at least one color")
            }
            Self::InvalidSwatchSize(swatch_size) => {
                write!(
                    f,
                    "Palette preview swatch size {} is invalid. It must be at least 1.",
                    swatch_size
                )
            }
            Self::PalettePreviewTooLarge(number_of_colors, swatch_size) => {
                write!(
                    f,
                    "Palette preview of {} colors with swatch size {} is too large",
                    number_of_colors, swatch_size
                )
            }
            Self::UnableToCreateTemporaryFile(directory, error) => {
                write!(
                    f,
                    "Unable to create temporary file in '{}': {}",
                    directory, error
                )
            }
            Self::FailedToWriteColorTable(error) => {
                write!(f, "Failed to write color table: {}", error)
            }
            Self::UnableToPersistColorTable(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWritePalettePreview(path, error) => {
                write!(f, "Failed to write palette preview '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};

    #[test]
    fn input_failures_are_input_errors() {
        assert_eq!(Error::EmptyImage(0, 10).kind(), ErrorKind::Input);
        assert_eq!(Error::ColorIndexOutOfRange(4, 2).kind(), ErrorKind::Input);
    }

    #[test]
    fn write_failures_are_io_errors() {
        let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(Error::FailedToWriteColorTable(error).kind(), ErrorKind::Io);
    }

    #[test]
    fn display_names_the_offending_path() {
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let message =
            Error::UnableToPersistColorTable("/no/such/dir/colors.cpt".to_owned(), error)
                .to_string();
        assert!(message.contains("/no/such/dir/colors.cpt"), "was {}", message);
    }
}
