//!
//! Renders a palette as a grid of color swatches.
//!
//! The swatches are laid out left to right and wrap after
//! `columns` swatches. The state keeps the area of each swatch,
//! which can be used to find the swatch under the mouse.
//!
//! ```rust
//! use deluxe_palette::palettes::DELUXE16;
//! use deluxe_palette::swatch::{Swatches, SwatchesState};
//! use ratatui_core::buffer::Buffer;
//! use ratatui_core::layout::{Position, Rect};
//! use ratatui_core::widgets::StatefulWidget;
//!
//! let area = Rect::new(0, 0, 40, 6);
//! let mut buf = Buffer::empty(area);
//! let mut state = SwatchesState::new();
//!
//! Swatches::new(&DELUXE16)
//!     .columns(8)
//!     .render(area, &mut buf, &mut state);
//!
//! assert_eq!(state.item_at(Position::new(6, 1)), Some(1));
//! ```

use crate::palette::Palette;
use crate::rgba::Rgba;
use ratatui_core::buffer::Buffer;
use ratatui_core::layout::{Position, Rect};
use ratatui_core::style::{Color, Style};
use ratatui_core::widgets::StatefulWidget;

/// Swatch grid for one palette.
#[derive(Debug, Clone)]
pub struct Swatches<'a> {
    palette: &'a Palette,
    columns: u16,
    width: u16,
    height: u16,
    spacing: u16,
    labels: bool,
    style: Style,
    select_style: Option<Style>,
}

/// State for the swatch grid.
#[derive(Debug, Default, Clone)]
pub struct SwatchesState {
    /// Complete area.
    /// __read only__. renewed for each render.
    pub area: Rect,
    /// Area of each swatch. Swatches that don't fit
    /// get an empty area.
    /// __read only__. renewed for each render.
    pub swatch_areas: Vec<Rect>,
    /// Selected swatch.
    /// __read+write__
    pub selected: Option<usize>,
}

impl<'a> Swatches<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            columns: 8,
            width: 4,
            height: 2,
            spacing: 1,
            labels: false,
            style: Default::default(),
            select_style: None,
        }
    }

    /// Number of swatches per row.
    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Size of one swatch.
    pub fn swatch_size(mut self, width: u16, height: u16) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Gap between swatches, both horizontal and vertical.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Show the color name inside the swatch.
    pub fn labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Base style.
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }

    /// Style for the selection marker.
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.select_style = Some(style.into());
        self
    }

    /// Area for the n-th swatch. Empty if it doesn't fit the area.
    fn layout(&self, area: Rect, n: usize) -> Rect {
        let col = n % self.columns as usize;
        let row = n / self.columns as usize;

        let x = (area.x as usize)
            .saturating_add(col.saturating_mul(self.width as usize + self.spacing as usize));
        let y = (area.y as usize)
            .saturating_add(row.saturating_mul(self.height as usize + self.spacing as usize));

        if x.saturating_add(self.width as usize) > area.right() as usize
            || y.saturating_add(self.height as usize) > area.bottom() as usize
        {
            Rect::default()
        } else {
            Rect::new(x as u16, y as u16, self.width, self.height)
        }
    }
}

impl StatefulWidget for Swatches<'_> {
    type State = SwatchesState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;
        state.swatch_areas.clear();
        if let Some(selected) = state.selected {
            if selected >= self.palette.len() {
                state.selected = None;
            }
        }

        buf.set_style(area, self.style);

        let select_style = self.select_style.unwrap_or(Style::new().fg(Color::White));

        for (n, c) in self.palette.iter().enumerate() {
            let swatch_area = self.layout(area, n);
            state.swatch_areas.push(swatch_area);
            if swatch_area.is_empty() {
                continue;
            }

            buf.set_style(swatch_area, Style::new().bg(Color::from(c.color)));

            if self.labels {
                let text_style = Style::new().fg(c.color.text_color());
                buf.set_stringn(
                    swatch_area.x,
                    swatch_area.bottom() - 1,
                    c.name,
                    swatch_area.width as usize,
                    text_style,
                );
            }
            if state.selected == Some(n) {
                buf.set_stringn(swatch_area.x, swatch_area.y, "*", 1, select_style);
            }
        }
    }
}

impl SwatchesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of swatches at the last render.
    pub fn len(&self) -> usize {
        self.swatch_areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatch_areas.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, select: Option<usize>) {
        self.selected = select;
    }

    /// Select the next swatch.
    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(n) => Some((n + 1).min(self.len() - 1)),
        };
    }

    /// Select the previous swatch.
    pub fn prev(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(n) => Some(n.saturating_sub(1)),
        };
    }

    /// Swatch at the given screen position.
    pub fn item_at(&self, pos: Position) -> Option<usize> {
        self.swatch_areas.iter().position(|v| v.contains(pos))
    }

    /// Color of the selected swatch.
    pub fn selected_color(&self, palette: &Palette) -> Option<Rgba> {
        self.selected
            .and_then(|n| palette.get(n))
            .map(|v| v.color)
    }
}
