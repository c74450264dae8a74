use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::color::Color,
    foundation::error::{DiagramError, DiagramResult},
};

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::rgba(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
}

/// Named colors emphasis states map onto.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Main foreground color; used for lit content.
    pub primary: Color,
    /// Secondary foreground color.
    pub secondary: Color,
    /// Scene background.
    pub background: Color,
    /// Accent color.
    pub accent: Color,
    /// Color of muted content.
    pub dimmed: Color,
}

impl Theme {
    /// Dark slate palette.
    pub const DARK: Self = Self {
        primary: rgb8(0xd6, 0xdc, 0xe5),
        secondary: rgb8(0xad, 0xb9, 0xca),
        background: rgb8(0x22, 0x2a, 0x35),
        accent: rgb8(0x84, 0x97, 0xb0),
        dimmed: rgb8(0x33, 0x3f, 0x50),
    };

    /// The [`Theme::DARK`] palette.
    pub fn dark() -> Self {
        Self::DARK
    }

    /// Parse a theme from a JSON reader; missing colors fall back to [`Theme::DARK`].
    pub fn from_reader<R: std::io::Read>(r: R) -> DiagramResult<Self> {
        serde_json::from_reader(r).map_err(|e| DiagramError::serde(format!("parse theme JSON: {e}")))
    }

    /// Parse a theme from a JSON string.
    pub fn from_json_str(s: &str) -> DiagramResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a theme from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DiagramResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| DiagramError::validation(format!("open theme '{}': {e}", path.display())))?;
        Self::from_reader(BufReader::new(f))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emphasis/theme.rs"]
mod tests;
