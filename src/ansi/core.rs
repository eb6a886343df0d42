use std::borrow::Cow;

/// Escape control code that opens every ANSI sequence.
pub const ESC: char = '\x1b';

/// Final byte of an SGR (color/style) sequence.
pub const SGR_TERMINATOR: char = 'm';

/// Returns `true` when `text` contains at least one escape control code.
pub fn contains_ansi(text: &str) -> bool {
    text.contains(ESC)
}

/// Remove every `ESC ... m` run from `text`.
///
/// Only SGR-shaped sequences are recognized. Anything else that starts with
/// ESC (cursor movement, screen clears) keeps the scanner in escape state
/// until the next `m` or the end of input, dropping the visible text in
/// between.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == ESC {
            in_escape = true;
            continue;
        }
        if in_escape {
            if ch == SGR_TERMINATOR {
                in_escape = false;
            }
            continue;
        }
        out.push(ch);
    }

    out
}

/// Borrowing variant of [`strip_ansi`] that skips the copy for plain lines.
pub fn strip_ansi_cow(text: &str) -> Cow<'_, str> {
    if contains_ansi(text) {
        Cow::Owned(strip_ansi(text))
    } else {
        Cow::Borrowed(text)
    }
}

/// Strip all escape sequences (CSI, OSC, SGR) using a VT parser.
pub fn strip_ansi_complete(text: &str) -> String {
    if !contains_ansi(text) {
        return text.to_string();
    }
    let clean = strip_ansi_escapes::strip(text);
    String::from_utf8_lossy(&clean).into_owned()
}
