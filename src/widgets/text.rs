//! Focusable paragraph of word-wrapped text.

use crate::model::{Command, Focusable, Item};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Marker drawn in front of every line of the focused item.
pub const FOCUS_MARKER: &str = "▌ ";

/// Padding drawn in front of unfocused lines, as wide as [`FOCUS_MARKER`].
const PADDING: &str = "  ";

/// Paragraph item. Wraps at word boundaries to the list width and shows a
/// gutter marker while focused.
///
/// Pressing `y` while the item is focused toggles dimmed rendering, so the
/// demo has something to forward keys to.
#[derive(Debug, Clone)]
pub struct TextItem {
    id: String,
    text: String,
    width: u16,
    focused: bool,
    dimmed: bool,
}

impl TextItem {
    /// Create a text item.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            width: 0,
            focused: false,
            dimmed: false,
        }
    }

    /// Raw, unwrapped text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the item is drawn dimmed.
    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(PADDING.width())
    }
}

impl Item for TextItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn view(&self) -> Text<'static> {
        let mut style = Style::new();
        if self.dimmed {
            style = style.add_modifier(Modifier::DIM);
        }
        let (gutter, gutter_style) = if self.focused {
            (FOCUS_MARKER, Style::new().fg(Color::Cyan))
        } else {
            (PADDING, Style::new())
        };

        let lines: Vec<Line<'static>> = self
            .text
            .split('\n')
            .flat_map(|line| wrap(line, self.content_width()))
            .map(|row| {
                Line::from(vec![
                    Span::styled(gutter, gutter_style),
                    Span::styled(row, style),
                ])
            })
            .collect();
        Text::from(lines)
    }

    fn set_size(&mut self, width: u16, _height: u16) -> Option<Command> {
        self.width = width;
        None
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.code == KeyCode::Char('y') {
            self.dimmed = !self.dimmed;
        }
        None
    }

    fn focusable(&self) -> Option<&dyn Focusable> {
        Some(self)
    }

    fn focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for TextItem {
    fn focus(&mut self) -> Option<Command> {
        self.focused = true;
        None
    }

    fn blur(&mut self) -> Option<Command> {
        self.focused = false;
        None
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Break `line` into rows at most `width` columns wide.
///
/// Breaks fall between word-boundary segments; whitespace at a break is
/// dropped. A segment wider than `width` is split between graphemes. A width
/// of zero disables wrapping. An empty line yields one empty row.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.width() <= width {
        return vec![line.to_owned()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for segment in line.split_word_bounds() {
        let segment_width = segment.width();
        let is_space = segment.chars().all(char::is_whitespace);

        if row_width + segment_width <= width {
            row.push_str(segment);
            row_width += segment_width;
            continue;
        }
        if is_space {
            rows.push(std::mem::take(&mut row).trim_end().to_owned());
            row_width = 0;
            continue;
        }
        if row_width > 0 && segment_width <= width {
            rows.push(std::mem::take(&mut row).trim_end().to_owned());
            row.push_str(segment);
            row_width = segment_width;
            continue;
        }
        for grapheme in segment.graphemes(true) {
            let grapheme_width = grapheme.width();
            if row_width + grapheme_width > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push_str(grapheme);
            row_width += grapheme_width;
        }
    }
    if !row.is_empty() {
        rows.push(row.trim_end().to_owned());
    }
    rows
}
