//! Section header.

use crate::model::{Command, Item};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

/// Non-focusable title line followed by a rule across the list width.
///
/// Keyboard navigation skips headers; moving up to the item right below a
/// leading header scrolls the header back into view.
#[derive(Debug, Clone)]
pub struct HeaderItem {
    id: String,
    title: String,
    width: u16,
}

impl HeaderItem {
    /// Create a header.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width: 0,
        }
    }

    /// Header title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Item for HeaderItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn view(&self) -> Text<'static> {
        let title = Line::from(Span::styled(
            self.title.clone(),
            Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        let rule_width = usize::from(self.width).max(self.title.width());
        let rule = Line::styled("─".repeat(rule_width), Style::new().fg(Color::DarkGray));
        Text::from(vec![title, rule])
    }

    fn set_size(&mut self, width: u16, _height: u16) -> Option<Command> {
        self.width = width;
        None
    }
}
