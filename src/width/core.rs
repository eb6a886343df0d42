use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use super::table::{WIDE_PICTOGRAPHS, WIDE_RANGES, ZERO_WIDTH};
use crate::ansi::strip_ansi_cow;

/// Everything below the first wide range is narrow unless it is a control
/// code or one of the exact-match entries.
const FIRST_WIDE: u32 = 0x1100;

/// Column width of a single code point: 0, 1, or 2.
pub fn char_width(ch: char) -> usize {
    let cp = ch as u32;
    if is_control(cp) {
        return 0;
    }
    if ZERO_WIDTH.binary_search(&ch).is_ok() {
        return 0;
    }
    if WIDE_PICTOGRAPHS.binary_search(&ch).is_ok() {
        return 2;
    }
    if cp >= FIRST_WIDE && in_wide_range(cp) {
        return 2;
    }
    1
}

fn is_control(cp: u32) -> bool {
    cp < 0x20 || cp == 0x7F
}

fn in_wide_range(cp: u32) -> bool {
    WIDE_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    strip_ansi_cow(text).chars().map(char_width).sum()
}

/// Display width of raw terminal bytes; invalid UTF-8 counts as U+FFFD.
pub fn display_width_bytes(bytes: &[u8]) -> usize {
    display_width(&String::from_utf8_lossy(bytes))
}

/// Widest line in `lines`, or 0 when there are none.
pub fn max_width<I>(lines: I) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| display_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Selects how line widths are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthStrategy {
    /// Built-in range table with forced-wide pictographs.
    #[default]
    Table,
    /// Same escape stripping and control handling, with per-char widths
    /// taken from the `unicode-width` tables.
    Unicode,
}

impl WidthStrategy {
    pub fn measure(self, text: &str) -> usize {
        match self {
            WidthStrategy::Table => display_width(text),
            WidthStrategy::Unicode => strip_ansi_cow(text)
                .chars()
                .filter(|ch| !is_control(*ch as u32))
                .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
                .sum(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WidthStrategy::Table => "table",
            WidthStrategy::Unicode => "unicode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width_matches_length() {
        for s in ["", "A", "hello world", "0123456789!@#$%^&*()", "~"] {
            assert_eq!(display_width(s), s.len(), "width of {s:?}");
        }
    }

    #[test]
    fn wide_glyphs() {
        assert_eq!(display_width("中"), 2);
        assert_eq!(display_width("中文"), 4);
        assert_eq!(display_width("한글"), 4);
        assert_eq!(display_width("ｈｉ"), 4);
        assert_eq!(display_width("🚀"), 2);
        assert_eq!(display_width("🧪"), 2);
        assert_eq!(display_width("𠀀"), 2);
    }

    #[test]
    fn forced_pictographs_are_wide() {
        assert_eq!(display_width("✓"), 2);
        assert_eq!(display_width("☑"), 2);
        assert_eq!(display_width("✅"), 2);
        assert_eq!(display_width("⚠"), 2);
        assert_eq!(display_width("❌"), 2);
    }

    #[test]
    fn variation_selector_adds_nothing() {
        assert_eq!(char_width('\u{FE0F}'), 0);
        assert_eq!(display_width("❤\u{FE0F}"), display_width("❤"));
        assert_eq!(display_width("⚠\u{FE0F} careful"), 2 + 8);
    }

    #[test]
    fn non_emoji_presentation_blocks_stay_narrow() {
        assert_eq!(char_width('\u{1F1E6}'), 1); // regional indicator A
        assert_eq!(char_width('\u{1F170}'), 1); // negative squared latin A
        assert_eq!(char_width('\u{1FA00}'), 1); // chess symbol
        assert_eq!(char_width('\u{1F18E}'), 2);
        assert_eq!(char_width('\u{1F600}'), 2);
    }

    #[test]
    fn controls_are_zero_width() {
        assert_eq!(display_width("a\tb\r\n"), 2);
        assert_eq!(display_width("\x07\x7f"), 0);
        assert_eq!(char_width('\0'), 0);
    }

    #[test]
    fn narrow_symbols_default_to_one() {
        assert_eq!(display_width("é"), 1);
        assert_eq!(display_width("─│┌"), 3);
        assert_eq!(display_width("\u{3000}"), 2);
        assert_eq!(display_width("\u{303F}"), 1);
    }

    #[test]
    fn ansi_wrapping_does_not_change_width() {
        for s in ["plain", "中文 mix", "✓ done", ""] {
            let wrapped = format!("\x1b[1;38;5;208m{s}\x1b[0m");
            assert_eq!(display_width(&wrapped), display_width(s));
        }
    }

    #[test]
    fn invalid_utf8_measured_permissively() {
        assert_eq!(display_width_bytes(b"ok\xff"), 3);
        assert_eq!(display_width_bytes("中".as_bytes()), 2);
    }

    #[test]
    fn max_width_over_lines() {
        assert_eq!(max_width(["a", "中文字", "\x1b[31mred\x1b[0m"]), 6);
        assert_eq!(max_width(Vec::<String>::new()), 0);
    }

    #[test]
    fn unicode_strategy_uses_library_tables() {
        assert_eq!(WidthStrategy::Unicode.measure("\x1b[32m中文\x1b[0m"), 4);
        assert_eq!(WidthStrategy::Unicode.measure("ab\x1b[2Jcd"), 2);
        assert_eq!(WidthStrategy::Table.measure("ab\x1b[2Jcd"), 2);
    }

    #[test]
    fn unicode_strategy_skips_controls() {
        assert_eq!(WidthStrategy::Unicode.measure("a\tb\nc\x07"), 3);
        assert_eq!(WidthStrategy::Unicode.measure("\x7f"), 0);
        assert_eq!(
            WidthStrategy::Unicode.measure("a\tb"),
            WidthStrategy::Table.measure("a\tb")
        );
    }
}
