//! Word and paragraph boundary search over plain rendered text.
//!
//! Columns are display columns (a wide grapheme spans two), lines are
//! rendered-buffer line indices. Returned bounds are inclusive.

use super::glyphs;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display-column bounds of the word under `col` in `line`.
///
/// Words are the segments of the Unicode word-boundary algorithm, so
/// punctuation runs form their own segments. Returns `None` when `col`
/// lands on whitespace or past the end of the line.
///
/// ```
/// use vlist::selection::word_bounds;
/// assert_eq!(word_bounds("foo bar baz", 6), Some((4, 6)));
/// assert_eq!(word_bounds("foo bar baz", 3), None);
/// ```
pub fn word_bounds(line: &str, col: usize) -> Option<(usize, usize)> {
    let mut start = 0;
    for segment in line.split_word_bounds() {
        let width = segment.width();
        if width == 0 {
            continue;
        }
        if col < start + width {
            if segment.chars().all(char::is_whitespace) {
                return None;
            }
            return Some((start, start + width - 1));
        }
        start += width;
    }
    None
}

/// Line bounds of the paragraph containing `line`.
///
/// A paragraph is a maximal run of non-blank lines; lines holding only
/// whitespace and decorative glyphs are blank. `text_at` returns the plain
/// text of a line in `0..line_count`. Returns `None` when `line` is out of
/// range or blank.
pub fn paragraph_bounds<'a, F>(line_count: usize, line: usize, text_at: F) -> Option<(usize, usize)>
where
    F: Fn(usize) -> &'a str,
{
    if line >= line_count {
        return None;
    }
    let is_blank = |index: usize| glyphs::is_blank(text_at(index));
    if is_blank(line) {
        return None;
    }

    let mut start = line;
    while start > 0 && !is_blank(start - 1) {
        start -= 1;
    }
    let mut end = line;
    while end + 1 < line_count && !is_blank(end + 1) {
        end += 1;
    }
    Some((start, end))
}
