use std::fmt::Display;
use std::str::FromStr;

/// An RGB triple. Components are independent, any of them can be replaced
/// without touching the other two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color<T = u8> {
    red: T,
    green: T,
    blue: T,
}

impl<T: Copy> Color<T> {
    pub fn new(red: T, green: T, blue: T) -> Self {
        Color { red, green, blue }
    }

    pub fn red(&self) -> T {
        self.red
    }

    pub fn green(&self) -> T {
        self.green
    }

    pub fn blue(&self) -> T {
        self.blue
    }

    pub fn set_red(&mut self, red: T) {
        self.red = red;
    }

    pub fn set_green(&mut self, green: T) {
        self.green = green;
    }

    pub fn set_blue(&mut self, blue: T) {
        self.blue = blue;
    }

    pub fn with_red(self, red: T) -> Self {
        Color { red, ..self }
    }

    pub fn with_green(self, green: T) -> Self {
        Color { green, ..self }
    }

    pub fn with_blue(self, blue: T) -> Self {
        Color { blue, ..self }
    }
}

impl Color<u8> {
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<image::Rgb<u8>> for Color<u8> {
    fn from(value: image::Rgb<u8>) -> Self {
        let [red, green, blue] = value.0;
        Color { red, green, blue }
    }
}

impl From<&image::Rgb<u8>> for Color<u8> {
    fn from(value: &image::Rgb<u8>) -> Self {
        Color::from(*value)
    }
}

impl From<Color<u8>> for image::Rgb<u8> {
    fn from(value: Color<u8>) -> Self {
        image::Rgb([value.red, value.green, value.blue])
    }
}

impl<T: Display> Display for Color<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color<u8> {
    type Err = String;

    /// Parses `r,g,b` with every component in `0..=255`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split(',')
            .map(|component| {
                component
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| format!("'{}' is not a color component in 0..=255", component))
            })
            .collect::<Result<Vec<u8>, String>>()?;
        match components[..] {
            [red, green, blue] => Ok(Color { red, green, blue }),
            _ => Err(format!(
                "Expected 3 color components, but got {}.",
                components.len()
            )),
        }
    }
}

/// Replacement of the color at `index` of a ranked palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorAdjustment {
    pub index: usize,
    pub color: Color<u8>,
}

impl ColorAdjustment {
    pub fn apply(&self, colors: &mut [Color<u8>]) -> crate::Result<()> {
        let length = colors.len();
        let target = colors
            .get_mut(self.index)
            .ok_or(crate::Error::ColorIndexOutOfRange(self.index, length))?;
        *target = self.color;
        Ok(())
    }
}

impl FromStr for ColorAdjustment {
    type Err = String;

    /// Parses `<index>=<r>,<g>,<b>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, color) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected <INDEX>=<R>,<G>,<B>, but got '{}'", s))?;
        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a color index", index))?;
        let color = color.parse::<Color<u8>>()?;
        Ok(ColorAdjustment { index, color })
    }
}
