//!
//! Deluxe color palettes.
//!
//! Five palettes with 8, 16, 32, 48 and 64 named colors, meant
//! for a color-picker. Each larger palette starts out with variants of
//! the hues of the smaller ones.
//!
//! Every palette can be used
//! * by single color: [palettes::deluxe08::RED]
//! * as a whole: [palettes::DELUXE08]. This gives the colors and
//!   the names as two lists with the same order.
//! * by [PaletteId] with the free functions [get_color], [colors],
//!   [names] and [index_of].
//!
//! ## Usage
//!
//! ```rust
//! use deluxe_palette::{get_color, names, PaletteId};
//!
//! let red = get_color(PaletteId::Deluxe08, "red").expect("red");
//! assert_eq!(red.to_hex(), "#E53935");
//! assert_eq!(names(PaletteId::Deluxe08).len(), 8);
//! ```
//!
//! Palettes can be stored/loaded with [store_palette]/[load_palette],
//! and shown with the [Swatches](swatch::Swatches) widget.

use log::{debug, warn};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

mod error;
mod pal_io;
mod palette;
pub mod palettes;
mod rgba;
pub mod swatch;

pub use error::{LoadPaletteErr, NotFoundError, ParseColorErr};
pub use pal_io::{load_palette, store_palette};
pub use palette::{NamedColor, Palette, PaletteIter};
pub use rgba::Rgba;

/// Identifies one of the built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaletteId {
    Deluxe08 = 0,
    Deluxe16,
    Deluxe32,
    Deluxe48,
    Deluxe64,
}

static PALETTES: [Palette; 5] = [
    palettes::DELUXE08,
    palettes::DELUXE16,
    palettes::DELUXE32,
    palettes::DELUXE48,
    palettes::DELUXE64,
];

impl PaletteId {
    pub const LEN: usize = 5;

    /// All palettes, smallest first.
    pub const ALL: [PaletteId; PaletteId::LEN] = [
        PaletteId::Deluxe08,
        PaletteId::Deluxe16,
        PaletteId::Deluxe32,
        PaletteId::Deluxe48,
        PaletteId::Deluxe64,
    ];

    /// Declared number of colors.
    pub const fn size(self) -> usize {
        match self {
            PaletteId::Deluxe08 => 8,
            PaletteId::Deluxe16 => 16,
            PaletteId::Deluxe32 => 32,
            PaletteId::Deluxe48 => 48,
            PaletteId::Deluxe64 => 64,
        }
    }

    /// Palette name. Same as [Palette::name].
    pub const fn name(self) -> &'static str {
        match self {
            PaletteId::Deluxe08 => "Deluxe 08",
            PaletteId::Deluxe16 => "Deluxe 16",
            PaletteId::Deluxe32 => "Deluxe 32",
            PaletteId::Deluxe48 => "Deluxe 48",
            PaletteId::Deluxe64 => "Deluxe 64",
        }
    }

    pub fn from_name(n: &str) -> Option<Self> {
        match n {
            "Deluxe 08" => Some(PaletteId::Deluxe08),
            "Deluxe 16" => Some(PaletteId::Deluxe16),
            "Deluxe 32" => Some(PaletteId::Deluxe32),
            "Deluxe 48" => Some(PaletteId::Deluxe48),
            "Deluxe 64" => Some(PaletteId::Deluxe64),
            _ => {
                debug!("no palette named {:?}", n);
                None
            }
        }
    }

    /// Palette with exactly the given number of colors.
    pub fn from_size(size: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.size() == size)
    }

    /// The palette data.
    pub fn palette(self) -> &'static Palette {
        &PALETTES[self as usize]
    }
}

impl Display for PaletteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Find a color by name.
pub fn get_color(id: PaletteId, name: &str) -> Result<Rgba, NotFoundError> {
    id.palette().color(name)
}

/// All colors of the palette in canonical order.
pub fn colors(id: PaletteId) -> &'static [Rgba] {
    id.palette().colors()
}

/// All color names of the palette. Same order as [colors].
pub fn names(id: PaletteId) -> &'static [Cow<'static, str>] {
    id.palette().names()
}

/// Position of the named color in [colors] and [names].
pub fn index_of(id: PaletteId, name: &str) -> Result<usize, NotFoundError> {
    id.palette().index_of(name)
}

/// List of all built-in palettes.
pub fn deluxe_palettes() -> Vec<&'static str> {
    PaletteId::ALL.iter().map(|v| v.name()).collect()
}

/// Get a Palette by name.
pub fn create_palette(name: &str) -> Option<Palette> {
    match PaletteId::from_name(name) {
        Some(id) => Some(id.palette().clone()),
        None => {
            warn!("unknown palette {:?}", name);
            None
        }
    }
}
