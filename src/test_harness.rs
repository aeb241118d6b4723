//! Shared fixtures for unit tests.
//!
//! `TestItem` renders its text verbatim (one line per `'\n'`-separated
//! segment), so buffer contents are easy to predict. Focus only changes the
//! style, never the text.

use crate::integration;
use crate::list::VirtualList;
use crate::model::{Animated, Command, Focusable, Item};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};

/// Configurable item for list tests.
#[derive(Debug, Clone)]
pub struct TestItem {
    id: String,
    text: String,
    focusable: bool,
    focused: bool,
    animating: bool,
    frame: usize,
    size: (u16, u16),
}

impl TestItem {
    /// Focusable item showing `text`.
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_owned(),
            text: text.to_owned(),
            focusable: true,
            focused: false,
            animating: false,
            frame: 0,
            size: (0, 0),
        }
    }

    /// Non-focusable item, like a section header.
    pub fn header(id: &str, text: &str) -> Self {
        Self {
            focusable: false,
            ..Self::new(id, text)
        }
    }

    /// Focusable item `height` lines tall: `"<id>:0"`, `"<id>:1"`, ...
    pub fn tall(id: &str, height: usize) -> Self {
        let text = (0..height)
            .map(|i| format!("{id}:{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(id, &text)
    }

    /// Animated item; its view ends with the current frame number.
    pub fn spinner(id: &str, text: &str) -> Self {
        Self {
            animating: true,
            ..Self::new(id, text)
        }
    }

    /// Text shown by the item.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the shown text.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    /// Last size propagated by the list.
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Stop animating.
    pub fn stop(&mut self) {
        self.animating = false;
    }
}

impl Item for TestItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn view(&self) -> Text<'static> {
        let style = if self.focused {
            Style::new().add_modifier(Modifier::BOLD)
        } else {
            Style::new()
        };
        let mut lines: Vec<Line<'static>> = self
            .text
            .split('\n')
            .map(|l| Line::styled(l.to_owned(), style))
            .collect();
        if self.animating {
            lines.push(Line::raw(format!("frame {}", self.frame)));
        }
        Text::from(lines)
    }

    fn set_size(&mut self, width: u16, height: u16) -> Option<Command> {
        self.size = (width, height);
        None
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if let KeyCode::Char(c) = key.code {
            self.text.push(c);
        }
        None
    }

    fn focusable(&self) -> Option<&dyn Focusable> {
        self.focusable.then_some(self as &dyn Focusable)
    }

    fn focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        if self.focusable {
            Some(self)
        } else {
            None
        }
    }

    fn animated(&self) -> Option<&dyn Animated> {
        Some(self)
    }

    fn animated_mut(&mut self) -> Option<&mut dyn Animated> {
        Some(self)
    }
}

impl Focusable for TestItem {
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

impl Animated for TestItem {
    fn is_animating(&self) -> bool {
        self.animating
    }

    fn tick(&mut self) -> Option<Command> {
        self.frame += 1;
        None
    }
}

/// `count` single-line focusable items with ids `"0"`, `"1"`, ... and text
/// `"item <n>"`.
pub fn numbered(count: usize) -> Vec<TestItem> {
    (0..count)
        .map(|i| TestItem::new(&i.to_string(), &format!("item {i}")))
        .collect()
}

/// Sized, initialised list with every pending command drained.
pub fn loaded_list(
    items: Vec<TestItem>,
    config: crate::config::ListConfig,
    width: u16,
    height: u16,
) -> VirtualList<TestItem> {
    let mut list = VirtualList::new(items, config);
    let cmd = list.set_size(width, height);
    integration::drain(&mut list, cmd);
    let cmd = list.init();
    integration::drain(&mut list, cmd);
    list
}

/// Convert a ratatui buffer to a string, one row per line, trailing spaces
/// trimmed and trailing empty rows dropped.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut rows = Vec::new();
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..area.right() {
            row.push_str(buffer[(x, y)].symbol());
        }
        rows.push(row.trim_end().to_owned());
    }
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows.join("\n")
}
