//! Decorative glyphs excluded from text selection.
//!
//! Items draw borders, bullets and status icons that are part of the layout
//! rather than the content. Selection never highlights or copies them, and
//! paragraph detection treats them as blank.

use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// Glyphs that never count as selectable text.
pub static IGNORED_GLYPHS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "│", "┃", "▌", "▐", "▎", "●", "○", "◆", "◇", "■", "□", "✓", "✔", "✗", "✘", "×", "⋯",
        "…", "⚠", "→", "←", "↳", "⏵", "❯", "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
    ]
    .into_iter()
    .collect()
});

/// Whether a grapheme is a decorative glyph.
pub fn is_ignored(grapheme: &str) -> bool {
    IGNORED_GLYPHS.contains(grapheme)
}

/// Whether a line holds nothing but whitespace and decorative glyphs.
pub fn is_blank(line: &str) -> bool {
    line.graphemes(true)
        .all(|g| is_ignored(g) || g.chars().all(char::is_whitespace))
}
