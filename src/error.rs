use std::error::Error;
use std::fmt::{Display, Formatter};

/// A color name is not part of the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    /// Palette name.
    pub palette: String,
    /// Requested color name.
    pub name: String,
}

impl NotFoundError {
    pub fn new(palette: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            palette: palette.into(),
            name: name.into(),
        }
    }
}

impl Display for NotFoundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "color {:?} not found in palette {:?}",
            self.name, self.palette
        )
    }
}

impl Error for NotFoundError {}

#[derive(Debug)]
pub struct LoadPaletteErr(pub String);

impl Display for LoadPaletteErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "load palette failed: {}", self.0)
    }
}

impl Error for LoadPaletteErr {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorErr(pub String);

impl Display for ParseColorErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color: {:?}", self.0)
    }
}

impl Error for ParseColorErr {}
