use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Border glyph family.
///
/// `Rounded` is the default and draws the light square-cornered box
/// (`┌─┐`) that earlier releases emitted under the `round` key, so it shares
/// glyphs with `Single`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    #[default]
    Rounded,
    Double,
    Single,
    Ascii,
}

/// The six glyphs needed to draw a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

const LIGHT: BorderGlyphs = BorderGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

const DOUBLE: BorderGlyphs = BorderGlyphs {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

const ASCII: BorderGlyphs = BorderGlyphs {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
};

impl BorderStyle {
    pub const ALL: [BorderStyle; 4] = [
        BorderStyle::Rounded,
        BorderStyle::Double,
        BorderStyle::Single,
        BorderStyle::Ascii,
    ];

    pub const fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderStyle::Rounded | BorderStyle::Single => LIGHT,
            BorderStyle::Double => DOUBLE,
            BorderStyle::Ascii => ASCII,
        }
    }

    /// Parse a style name, case-insensitively. Unknown names yield `Rounded`.
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "double" | "double-line" => BorderStyle::Double,
            "single" | "single-line" => BorderStyle::Single,
            "ascii" => BorderStyle::Ascii,
            _ => BorderStyle::Rounded,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Rounded => "rounded",
            BorderStyle::Double => "double",
            BorderStyle::Single => "single",
            BorderStyle::Ascii => "ascii",
        }
    }
}

impl From<&str> for BorderStyle {
    fn from(name: &str) -> Self {
        Self::parse_lossy(name)
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BorderStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BorderStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&name))
    }
}
