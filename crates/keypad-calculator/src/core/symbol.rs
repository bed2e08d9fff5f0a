//! Display glyphs for operator characters

/// Maps a single character to its display glyph
#[must_use]
pub const fn symbol_for(ch: char) -> char {
    match ch {
        '/' => '\u{00F7}',
        '-' => '\u{2212}',
        '*' => '\u{00D7}',
        other => other,
    }
}

/// Replaces `/`, `-` and `*` with `÷`, `−` and `×`; everything else passes through.
///
/// Only used for display and button matching. The expression buffer keeps
/// the ASCII operators.
#[must_use]
pub fn format_symbols(text: &str) -> String {
    text.chars().map(symbol_for).collect()
}
