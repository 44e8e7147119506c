//! Turns views into terminal text.
//!
//! Style tags produced by the highlighters are mapped onto a palette that depends on the theme, and
//! the font scale controls how much vertical space separates entries.

mod tools;
mod trip;

pub use tools::{render_converter, render_prefs};
pub use trip::{
    render_expenses, render_itinerary, render_members, render_overview, render_preparation,
};

use crate::overview::{style, Segment, Styled};
use crate::prefs::{FontScale, Theme};
use crossterm::style::{Color, Stylize};

/// Colors and spacing for one rendering.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Painter {
    theme: Theme,
    font_scale: FontScale,
    color: bool,
}

impl Painter {
    pub fn new(theme: Theme, font_scale: FontScale, color: bool) -> Self {
        Self {
            theme,
            font_scale,
            color,
        }
    }

    /// No colors, normal spacing.
    pub fn plain() -> Self {
        Self::new(Theme::Light, FontScale::Normal, false)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    /// Blank lines between entries.
    pub fn spacing(&self) -> usize {
        match self.font_scale {
            FontScale::Normal => 0,
            FontScale::Large => 1,
            FontScale::Extra => 2,
        }
    }

    fn color_of(&self, tag: &str) -> Option<Color> {
        let dark = self.theme.is_dark();
        let color = match tag {
            style::BRAND => pick(dark, Color::Cyan, Color::DarkCyan),
            style::ACCENT => pick(dark, Color::Yellow, Color::DarkYellow),
            style::MUTED => pick(dark, Color::Grey, Color::DarkGrey),
            style::ALERT => pick(dark, Color::Red, Color::DarkRed),
            _ => return None,
        };
        Some(color)
    }

    /// Paints `text` with the color of a style tag. Unknown tags leave the text unstyled.
    pub fn paint(&self, text: &str, tag: &str) -> String {
        match self.color_of(tag) {
            Some(color) if self.color => text.with(color).to_string(),
            _ => text.to_string(),
        }
    }

    /// A bold heading in the brand color.
    pub fn heading(&self, text: &str) -> String {
        match self.color_of(style::BRAND) {
            Some(color) if self.color => text.with(color).bold().to_string(),
            _ => text.to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn styled(&self, pieces: &[Styled<'_>]) -> String {
        pieces
            .iter()
            .map(|piece| match piece.style {
                Some(tag) => self.paint(piece.text, tag),
                None => piece.text.to_string(),
            })
            .collect()
    }

    /// Links are shown as their label followed by the address.
    pub fn segments(&self, segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|segment| match segment {
                Segment::Text { text } => text.clone(),
                Segment::Link { label, url } => {
                    let label = if self.color {
                        label.as_str().underlined().to_string()
                    } else {
                        label.clone()
                    };
                    format!("{label} <{}>", self.paint(url, style::MUTED))
                }
            })
            .collect()
    }
}

fn pick(dark: bool, on_dark: Color, on_light: Color) -> Color {
    if dark {
        on_dark
    } else {
        on_light
    }
}

/// A growing block of output lines.
#[derive(Debug)]
pub(crate) struct Doc<'a> {
    painter: &'a Painter,
    out: String,
}

impl<'a> Doc<'a> {
    pub(crate) fn new(painter: &'a Painter) -> Self {
        Self {
            painter,
            out: String::new(),
        }
    }

    pub(crate) fn painter(&self) -> &'a Painter {
        self.painter
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    pub(crate) fn indented(&mut self, depth: usize, text: impl AsRef<str>) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.line(text);
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    /// The separation between entries, which grows with the font scale.
    pub(crate) fn gap(&mut self) {
        for _ in 0..self.painter.spacing() {
            self.blank();
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
