//! Terminal display width estimation.
//!
//! Columns are counted after stripping ANSI escapes, using a static table of
//! wide code-point ranges plus a handful of pictographs that common terminal
//! emulators draw double-width.

mod core;
mod table;

pub use self::core::{
    WidthStrategy, char_width, display_width, display_width_bytes, max_width,
};
pub use table::{WIDE_PICTOGRAPHS, WIDE_RANGES, ZERO_WIDTH};
