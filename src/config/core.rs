use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::render::BorderStyle;
use crate::width::WidthStrategy;

/// Presentation options for a rendered box.
///
/// JSON keys are camelCase (`borderStyle`, `widthStrategy`). Missing keys and
/// explicit `null` values take the defaults below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxOptions {
    /// Blank rows inserted above and below the content.
    #[serde(deserialize_with = "null_as_default")]
    pub padding: usize,
    #[serde(deserialize_with = "null_as_default")]
    pub border_style: BorderStyle,
    /// Leading spaces on every output row.
    #[serde(deserialize_with = "null_as_default")]
    pub indent: usize,
    #[serde(deserialize_with = "null_as_default")]
    pub width_strategy: WidthStrategy,
}

impl BoxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the ASCII-only convenience box.
    pub fn ascii() -> Self {
        Self::default().with_border_style(BorderStyle::Ascii)
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_width_strategy(mut self, strategy: WidthStrategy) -> Self {
        self.width_strategy = strategy;
        self
    }

    /// Resolve an optional options value, falling back to defaults.
    pub fn resolve(options: Option<&Self>) -> Self {
        options.copied().unwrap_or_default()
    }

    /// Parse options from JSON. A top-level `null` yields the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: Option<Self> = serde_json::from_str(json)?;
        Ok(parsed.unwrap_or_default())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
