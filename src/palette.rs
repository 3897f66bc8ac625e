#[cfg(feature = "serde")]
use crate::error::LoadPaletteErr;
use crate::error::NotFoundError;
use crate::rgba::Rgba;
use std::borrow::Cow;
use std::iter::FusedIterator;

/// One entry of a palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColor<'a> {
    pub name: &'a str,
    pub color: Rgba,
}

/// Color palette.
///
/// Holds the colors and their names as two parallel lists.
/// `colors[n]` is the color named `names[n]`.
///
/// The built-in palettes are const values, see [palettes](crate::palettes).
/// Loaded palettes use the owned variants of the Cow's.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PaletteData")
)]
pub struct Palette {
    /// Name of the color palette.
    pub name: Cow<'static, str>,
    /// Colors in canonical order.
    pub colors: Cow<'static, [Rgba]>,
    /// Color names in the same order as the colors.
    /// Names are unique within one palette.
    pub names: Cow<'static, [Cow<'static, str>]>,
}

/// Unchecked serde form of a Palette.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PaletteData {
    name: String,
    colors: Vec<Rgba>,
    names: Vec<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<PaletteData> for Palette {
    type Error = LoadPaletteErr;

    fn try_from(v: PaletteData) -> Result<Self, Self::Error> {
        let pal = Palette {
            name: Cow::Owned(v.name),
            colors: Cow::Owned(v.colors),
            names: Cow::Owned(v.names.into_iter().map(Cow::Owned).collect()),
        };
        pal.verify().map_err(LoadPaletteErr)?;
        Ok(pal)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            name: Cow::Borrowed(""),
            colors: Cow::Borrowed(&[]),
            names: Cow::Borrowed(&[]),
        }
    }
}

impl Palette {
    /// Create a palette from (name, color) pairs.
    pub fn from_entries<S: Into<String>>(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = (S, Rgba)>,
    ) -> Self {
        let mut colors = Vec::new();
        let mut names = Vec::new();
        for (n, c) in entries {
            names.push(Cow::Owned(n.into()));
            colors.push(c);
        }
        Self {
            name: Cow::Owned(name.into()),
            colors: Cow::Owned(colors),
            names: Cow::Owned(names),
        }
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colors in canonical order.
    pub fn colors(&self) -> &[Rgba] {
        self.colors.as_ref()
    }

    /// All names in canonical order.
    pub fn names(&self) -> &[Cow<'static, str>] {
        self.names.as_ref()
    }

    /// Position of the named color.
    pub fn try_index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|v| v.as_ref() == name)
    }

    /// Position of the named color.
    pub fn index_of(&self, name: &str) -> Result<usize, NotFoundError> {
        self.try_index_of(name)
            .ok_or_else(|| NotFoundError::new(self.name.as_ref(), name))
    }

    /// Find a color by name.
    pub fn try_color(&self, name: &str) -> Option<Rgba> {
        self.try_index_of(name)
            .and_then(|n| self.colors.get(n).copied())
    }

    /// Find a color by name.
    pub fn color(&self, name: &str) -> Result<Rgba, NotFoundError> {
        self.try_color(name)
            .ok_or_else(|| NotFoundError::new(self.name.as_ref(), name))
    }

    /// Entry at the given position.
    pub fn get(&self, n: usize) -> Option<NamedColor<'_>> {
        match (self.names.get(n), self.colors.get(n)) {
            (Some(name), Some(color)) => Some(NamedColor {
                name: name.as_ref(),
                color: *color,
            }),
            _ => None,
        }
    }

    /// Iterate all entries.
    pub fn iter(&self) -> PaletteIter<'_> {
        PaletteIter { pal: self, n: 0 }
    }

    /// Checks the structural invariants.
    ///
    /// * colors and names have the same length.
    /// * all channels are in `0.0..=1.0`.
    /// * names are unique and not empty.
    pub(crate) fn verify(&self) -> Result<(), String> {
        if self.colors.len() != self.names.len() {
            return Err(format!(
                "{} colors but {} names",
                self.colors.len(),
                self.names.len()
            ));
        }
        for (n, name) in self.names.iter().enumerate() {
            if name.is_empty() {
                return Err(format!("empty name at {}", n));
            }
            if self.names[..n].contains(name) {
                return Err(format!("duplicate name {:?}", name));
            }
            if !self.colors[n].is_normalized() {
                return Err(format!(
                    "color {:?} out of range {:?}",
                    name,
                    self.colors[n].as_array()
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct PaletteIter<'a> {
    pal: &'a Palette,
    n: usize,
}

impl<'a> Iterator for PaletteIter<'a> {
    type Item = NamedColor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.pal.get(self.n)?;
        self.n += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.pal.colors.len().min(self.pal.names.len());
        let n = len.saturating_sub(self.n);
        (n, Some(n))
    }
}

impl ExactSizeIterator for PaletteIter<'_> {}

impl FusedIterator for PaletteIter<'_> {}

impl<'a> IntoIterator for &'a Palette {
    type Item = NamedColor<'a>;
    type IntoIter = PaletteIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
