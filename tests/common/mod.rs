//! Shared fixtures for black-box list tests.

#![allow(dead_code)] // Each test binary uses a different subset

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use vlist::config::ListConfig;
use vlist::integration::drain;
use vlist::model::{Command, Focusable, Item};
use vlist::VirtualList;

/// Plain item: one line per `'\n'`-separated segment of its text.
#[derive(Debug, Clone)]
pub struct Note {
    id: String,
    text: String,
    focusable: bool,
    focused: bool,
}

impl Note {
    /// Focusable note.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            focusable: true,
            focused: false,
        }
    }

    /// Non-focusable note.
    pub fn header(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            focusable: false,
            ..Self::new(id, text)
        }
    }

    /// Focusable note `height` lines tall.
    pub fn tall(id: impl Into<String>, height: usize) -> Self {
        let id = id.into();
        let text = (0..height)
            .map(|i| format!("{id}:{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(id, text)
    }
}

impl Item for Note {
    fn id(&self) -> &str {
        &self.id
    }

    fn view(&self) -> Text<'static> {
        let style = if self.focused {
            Style::new().add_modifier(Modifier::REVERSED)
        } else {
            Style::new()
        };
        Text::from(
            self.text
                .split('\n')
                .map(|line| Line::styled(line.to_owned(), style))
                .collect::<Vec<_>>(),
        )
    }

    fn set_size(&mut self, _width: u16, _height: u16) -> Option<Command> {
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
}

impl Focusable for Note {
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

/// `count` single-line notes with ids `"0"`, `"1"`, ... and text `"item <n>"`.
pub fn numbered(count: usize) -> Vec<Note> {
    (0..count)
        .map(|i| Note::new(i.to_string(), format!("item {i}")))
        .collect()
}

/// Sized, initialised list with every follow-up command drained.
pub fn loaded(items: Vec<Note>, config: ListConfig, width: u16, height: u16) -> VirtualList<Note> {
    let mut list = VirtualList::new(items, config);
    let command = list.set_size(width, height);
    drain(&mut list, command);
    let command = list.init();
    drain(&mut list, command);
    list
}

/// Run a mutator's command to completion.
pub fn settle(list: &mut VirtualList<Note>, command: Option<Command>) {
    drain(list, command);
}

/// Plain text of the lines in the viewport.
pub fn visible_text(list: &VirtualList<Note>) -> Vec<String> {
    list.visible_lines().iter().map(ToString::to_string).collect()
}
