//! Animated "working" item.

use crate::model::{Animated, Command, Focusable, Item};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// Braille dot animation frames.
pub const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph shown once the work is done.
const DONE: &str = "✓";

/// One-line status with a spinner while running.
///
/// The spinner advances on every list tick until the item is finished, then
/// stays on a check mark and stops asking for ticks. `Enter` toggles between
/// the two states.
#[derive(Debug, Clone)]
pub struct SpinnerItem {
    id: String,
    label: String,
    frame: usize,
    running: bool,
    focused: bool,
}

impl SpinnerItem {
    /// Create a running spinner.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            frame: 0,
            running: true,
            focused: false,
        }
    }

    /// Stop the animation.
    pub fn finish(&mut self) {
        self.running = false;
    }

    /// Index of the current animation frame.
    pub fn frame(&self) -> usize {
        self.frame
    }
}

impl Item for SpinnerItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn view(&self) -> Text<'static> {
        let (glyph, color) = if self.running {
            (FRAMES[self.frame % FRAMES.len()], Color::Magenta)
        } else {
            (DONE, Color::Green)
        };
        let label_style = if self.focused {
            Style::new().fg(Color::Cyan)
        } else {
            Style::new()
        };
        Text::from(Line::from(vec![
            Span::styled(format!("{glyph} "), Style::new().fg(color)),
            Span::styled(self.label.clone(), label_style),
        ]))
    }

    fn set_size(&mut self, _width: u16, _height: u16) -> Option<Command> {
        None
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> Option<Command> {
        if key.code == crossterm::event::KeyCode::Enter {
            self.running = !self.running;
        }
        None
    }

    fn focusable(&self) -> Option<&dyn Focusable> {
        Some(self)
    }

    fn focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }

    fn animated(&self) -> Option<&dyn Animated> {
        Some(self)
    }

    fn animated_mut(&mut self) -> Option<&mut dyn Animated> {
        Some(self)
    }
}

impl Focusable for SpinnerItem {
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

impl Animated for SpinnerItem {
    fn is_animating(&self) -> bool {
        self.running
    }

    fn tick(&mut self) -> Option<Command> {
        self.frame = self.frame.wrapping_add(1);
        None
    }
}
