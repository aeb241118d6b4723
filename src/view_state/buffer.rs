//! Flattened rendered buffer with a line-offset index.
//!
//! Holds the styled lines of every materialized item (gaps included) in item
//! order, together with their plain text joined by `'\n'` and the byte offset
//! at which each line starts. Line-range extraction is an O(1) slice of the
//! plain text.
//!
//! # Invariants
//! - `line_offsets.len() == lines.len()`
//! - `line_offsets[0] == 0` when non-empty
//! - `text[line_offsets[i]..]` starts with the plain text of line `i`

use super::types::LineRange;
use ratatui::text::Line;

/// Concatenated output of the materialized items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedBuffer {
    lines: Vec<Line<'static>>,
    text: String,
    line_offsets: Vec<usize>,
}

impl RenderedBuffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from styled lines.
    pub fn from_lines(lines: Vec<Line<'static>>) -> Self {
        let mut buffer = Self::new();
        buffer.lines.reserve(lines.len());
        buffer.line_offsets.reserve(lines.len());
        for line in lines {
            buffer.push_line(line);
        }
        buffer
    }

    /// Number of lines (the total rendered height).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.text.clear();
        self.line_offsets.clear();
    }

    /// Keep only the first `len` lines.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.lines.len() {
            return;
        }
        if len == 0 {
            self.clear();
            return;
        }
        // Drop the separator before line `len` as well.
        self.text.truncate(self.line_offsets[len] - 1);
        self.line_offsets.truncate(len);
        self.lines.truncate(len);
    }

    /// Append one styled line.
    pub fn push_line(&mut self, line: Line<'static>) {
        if !self.lines.is_empty() {
            self.text.push('\n');
        }
        self.line_offsets.push(self.text.len());
        for span in &line.spans {
            self.text.push_str(&span.content);
        }
        self.lines.push(line);
    }

    /// Append `count` blank lines.
    pub fn push_blank(&mut self, count: usize) {
        for _ in 0..count {
            self.push_line(Line::default());
        }
    }

    /// Insert `front` before the current content.
    pub fn prepend(&mut self, mut front: Vec<Line<'static>>) {
        if front.is_empty() {
            return;
        }
        front.append(&mut self.lines);
        *self = Self::from_lines(front);
    }

    /// Plain text of the inclusive line range `[start, end]`, lines joined by
    /// `'\n'`.
    ///
    /// Out-of-range requests clamp to the buffer: an `end` past the last line
    /// stops at the last line, a `start` past it (or after `end`) yields `""`.
    pub fn get_lines(&self, start: usize, end: usize) -> &str {
        if self.line_offsets.is_empty() || start >= self.line_offsets.len() {
            return "";
        }
        let end = end.min(self.line_offsets.len() - 1);
        if start > end {
            return "";
        }
        let start_offset = self.line_offsets[start];
        let end_offset = match self.line_offsets.get(end + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };
        &self.text[start_offset..end_offset.min(self.text.len())]
    }

    /// Styled lines of `range`, clamped to the buffer.
    pub fn styled(&self, range: LineRange) -> &[Line<'static>] {
        if range.start >= self.lines.len() {
            return &[];
        }
        let end = range.end.min(self.lines.len() - 1);
        &self.lines[range.start..=end]
    }

    /// Plain text of line `index`.
    pub fn line_text(&self, index: usize) -> Option<&str> {
        (index < self.lines.len()).then(|| self.get_lines(index, index))
    }

    /// Plain text of the whole buffer.
    pub fn text(&self) -> &str {
        &self.text
    }
}
