//! Static width data. Every slice is sorted so lookups can binary search.

/// Pictographs forced to two columns regardless of their East-Asian-width
/// class. Terminals draw these wide even where Unicode calls them ambiguous
/// or neutral.
pub static WIDE_PICTOGRAPHS: &[char] = &[
    '\u{2139}',  // ℹ information source
    '\u{23F1}',  // ⏱ stopwatch
    '\u{2611}',  // ☑ ballot box with check
    '\u{2699}',  // ⚙ gear
    '\u{26A0}',  // ⚠ warning sign
    '\u{2705}',  // ✅ white heavy check mark
    '\u{2713}',  // ✓ check mark
    '\u{2714}',  // ✔ heavy check mark
    '\u{2716}',  // ✖ heavy multiplication x
    '\u{2717}',  // ✗ ballot x
    '\u{2718}',  // ✘ heavy ballot x
    '\u{274C}',  // ❌ cross mark
    '\u{2764}',  // ❤ heavy black heart
    '\u{1F4E6}', // 📦 package
    '\u{1F527}', // 🔧 wrench
    '\u{1F680}', // 🚀 rocket
    '\u{1F9EA}', // 🧪 test tube
];

/// Code points that attach to the preceding glyph without taking a column.
pub static ZERO_WIDTH: &[char] = &[
    '\u{FE0F}', // emoji presentation selector
];

/// Inclusive code-point ranges occupying two columns: East-Asian wide and
/// fullwidth blocks plus emoji-presentation symbols.
pub static WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F), // Hangul Jamo initial consonants
    (0x231A, 0x231B), // watch, hourglass
    (0x2329, 0x232A), // angle brackets
    (0x23E9, 0x23EC),
    (0x23F0, 0x23F0),
    (0x23F3, 0x23F3),
    (0x25FD, 0x25FE),
    (0x2614, 0x2615),
    (0x2648, 0x2653), // zodiac
    (0x267F, 0x267F),
    (0x2693, 0x2693),
    (0x26A1, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CE),
    (0x26D4, 0x26D4),
    (0x26EA, 0x26EA),
    (0x26F2, 0x26F3),
    (0x26F5, 0x26F5),
    (0x26FA, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2705, 0x2705),
    (0x270A, 0x270B),
    (0x2728, 0x2728),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x2E80, 0x303E), // CJK radicals, Kangxi, CJK symbols and punctuation
    (0x3041, 0x33FF), // kana, bopomofo, Hangul compatibility, CJK compatibility
    (0x3400, 0x4DBF), // CJK extension A
    (0x4E00, 0x9FFF), // CJK unified ideographs
    (0xA000, 0xA4CF), // Yi
    (0xA960, 0xA97F), // Hangul Jamo extended-A
    (0xAC00, 0xD7A3), // Hangul syllables
    (0xF900, 0xFAFF), // CJK compatibility ideographs
    (0xFE10, 0xFE19), // vertical forms
    (0xFE30, 0xFE6F), // CJK compatibility and small forms
    (0xFF00, 0xFF60), // fullwidth forms
    (0xFFE0, 0xFFE6), // fullwidth signs
    (0x16FE0, 0x16FE4),
    (0x17000, 0x18CFF), // Tangut
    (0x1B000, 0x1B2FF), // kana supplement and extensions
    (0x1F004, 0x1F004), // mahjong red dragon
    (0x1F0CF, 0x1F0CF), // joker
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A), // squared words
    (0x1F200, 0x1F2FF), // enclosed ideographic supplement
    (0x1F300, 0x1F64F), // misc symbols and pictographs, emoticons
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F7E0, 0x1F7EB), // colored circles and squares
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-A
    (0x20000, 0x2FFFD), // supplementary ideographic plane
    (0x30000, 0x3FFFD), // tertiary ideographic plane
];
