use std::fmt::Display;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::color::Color;
use crate::error::Error;

pub const COLOR_MODEL_HEADER: &str = "# COLOR_MODEL = RGB";

/// Writes colors as a CPT color table.
///
/// Every color becomes a zero width segment: its position in the list is
/// written as both the start and the end stop, each followed by the color.
///
/// ```text
/// # COLOR_MODEL = RGB
/// 0 255 0 0 0 255 0 0
/// 1 0 0 255 1 0 0 255
/// ```
pub struct ColorTableWriter<W: Write> {
    writer: W,
}

impl<W: Write> ColorTableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Components are written as plain decimals without any range check.
    pub fn write_color_table<T>(&mut self, colors: &[Color<T>]) -> crate::Result<()>
    where
        T: Copy + Display,
    {
        writeln!(self.writer, "{}", COLOR_MODEL_HEADER).map_err(Error::FailedToWriteColorTable)?;
        for (index, color) in colors.iter().enumerate() {
            writeln!(self.writer, "{} {} {} {}", index, color, index, color)
                .map_err(Error::FailedToWriteColorTable)?;
        }
        self.writer.flush().map_err(Error::FailedToWriteColorTable)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Replaces the file at `file_path` with a color table of `colors`.
///
/// The table is written to a temporary file next to the destination, which is
/// then renamed over it. On failure the destination is left as it was. An
/// existing destination keeps its permissions, a symlink is followed and its
/// target is replaced.
pub fn save_color_table<T>(colors: &[Color<T>], file_path: &Path) -> crate::Result<()>
where
    T: Copy + Display,
{
    let destination = fs::canonicalize(file_path).unwrap_or_else(|_| file_path.to_path_buf());
    let directory = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temporary_file = create_temporary_file(directory).map_err(|e| {
        Error::UnableToCreateTemporaryFile(directory.display().to_string(), e)
    })?;
    if let Ok(metadata) = fs::metadata(&destination) {
        temporary_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(Error::FailedToWriteColorTable)?;
    }
    ColorTableWriter::new(BufWriter::new(&mut temporary_file)).write_color_table(colors)?;
    temporary_file
        .as_file()
        .sync_all()
        .map_err(Error::FailedToWriteColorTable)?;
    temporary_file
        .persist(&destination)
        .map_err(|e| Error::UnableToPersistColorTable(file_path.display().to_string(), e.error))?;
    log::info!(
        "Wrote {} colors to '{}'",
        colors.len(),
        file_path.display()
    );
    Ok(())
}

/// Mode 0o666 restricted by the umask, the same as a file created by `File::create`.
#[cfg(unix)]
fn create_temporary_file(directory: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(directory)
}

#[cfg(not(unix))]
fn create_temporary_file(directory: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(directory)
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::{save_color_table, ColorTableWriter, COLOR_MODEL_HEADER};
    use crate::color::Color;
    use crate::error::ErrorKind;

    fn write_to_string<T: Copy + std::fmt::Display>(colors: &[Color<T>]) -> String {
        let mut writer = ColorTableWriter::new(Vec::new());
        writer.write_color_table(colors).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn write_red_and_blue() {
        let colors = [Color::new(255_u8, 0, 0), Color::new(0, 0, 255)];
        assert_eq!(
            write_to_string(&colors),
            "# COLOR_MODEL = RGB\n0 255 0 0 0 255 0 0\n1 0 0 255 1 0 0 255\n"
        );
    }

    #[test]
    fn write_header_only_for_empty_list() {
        let colors: [Color<u8>; 0] = [];
        assert_eq!(write_to_string(&colors), format!("{}\n", COLOR_MODEL_HEADER));
    }

    #[test]
    fn write_out_of_range_components_verbatim() {
        let colors = [Color::new(-1_i32, 256, 1000)];
        assert_eq!(
            write_to_string(&colors),
            "# COLOR_MODEL = RGB\n0 -1 256 1000 0 -1 256 1000\n"
        );
    }

    #[test]
    fn write_is_deterministic() {
        let colors: Vec<Color> = (0..20_u8).map(|i| Color::new(i, 255 - i, i / 2)).collect();
        assert_eq!(write_to_string(&colors), write_to_string(&colors));
    }

    #[test]
    fn write_entries_in_input_order() {
        let colors: Vec<Color> = (0..12_u8).rev().map(|i| Color::new(i, i, i)).collect();
        let table = write_to_string(&colors);
        let mut lines = table.lines();
        assert_eq!(lines.next(), Some(COLOR_MODEL_HEADER));
        for (index, line) in lines.enumerate() {
            let values: Vec<u32> = line
                .split(' ')
                .map(|value| value.parse().unwrap())
                .collect();
            let component = 11 - index as u32;
            let stop = [index as u32, component, component, component];
            assert_eq!(values[..4], stop);
            assert_eq!(values[4..], stop);
        }
    }

    #[test]
    fn save_creates_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("colors.cpt");
        save_color_table(&[Color::new(1_u8, 2, 3)], &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# COLOR_MODEL = RGB\n0 1 2 3 0 1 2 3\n"
        );
    }

    #[test]
    fn save_overwrites_previous_table() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("colors.cpt");
        let first = [
            Color::new(1_u8, 1, 1),
            Color::new(2, 2, 2),
            Color::new(3, 3, 3),
        ];
        save_color_table(&first, &path).unwrap();
        save_color_table(&[Color::new(9_u8, 9, 9)], &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# COLOR_MODEL = RGB\n0 9 9 9 0 9 9 9\n"
        );
        assert_eq!(fs::read_dir(directory.path()).unwrap().count(), 1);
    }

    #[test]
    fn save_into_missing_directory() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing").join("colors.cpt");
        let error = save_color_table(&[Color::new(1_u8, 2, 3)], &path).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(!path.exists());
    }

    #[test]
    fn save_over_directory_keeps_directory() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("colors.cpt");
        fs::create_dir(&path).unwrap();
        let error = save_color_table(&[Color::new(1_u8, 2, 3)], &path).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(path.is_dir());
    }

    #[cfg(unix)]
    mod unix {
        use std::fs;
        use std::os::unix::fs::{symlink, PermissionsExt};

        use super::super::save_color_table;
        use crate::color::Color;

        fn mode(path: &std::path::Path) -> u32 {
            fs::metadata(path).unwrap().permissions().mode() & 0o777
        }

        #[test]
        fn save_keeps_permissions_of_existing_table() {
            let directory = tempfile::tempdir().unwrap();
            let path = directory.path().join("colors.cpt");
            fs::write(&path, "old\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
            save_color_table(&[Color::new(1_u8, 2, 3)], &path).unwrap();
            assert_eq!(mode(&path), 0o644);
            fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
            save_color_table(&[Color::new(4_u8, 5, 6)], &path).unwrap();
            assert_eq!(mode(&path), 0o640);
        }

        #[test]
        fn save_new_table_with_default_file_permissions() {
            let directory = tempfile::tempdir().unwrap();
            let reference_path = directory.path().join("reference.txt");
            fs::write(&reference_path, "reference\n").unwrap();
            let path = directory.path().join("colors.cpt");
            save_color_table(&[Color::new(1_u8, 2, 3)], &path).unwrap();
            assert_eq!(mode(&path), mode(&reference_path));
        }

        #[test]
        fn save_through_symlink_replaces_target() {
            let directory = tempfile::tempdir().unwrap();
            let target = directory.path().join("target.cpt");
            let link = directory.path().join("link.cpt");
            fs::write(&target, "old\n").unwrap();
            symlink(&target, &link).unwrap();
            save_color_table(&[Color::new(1_u8, 2, 3)], &link).unwrap();
            assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
            assert_eq!(
                fs::read_to_string(&target).unwrap(),
                "# COLOR_MODEL = RGB\n0 1 2 3 0 1 2 3\n"
            );
        }
    }
}
