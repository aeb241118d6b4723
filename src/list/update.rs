//! Event routing and mouse selection.

use super::VirtualList;
use crate::model::item::is_animating;
use crate::model::{Command, Item, ListAction, ListEvent};
use crate::selection::{paragraph_bounds, word_bounds, SelectionRect};
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;
use tracing::trace;

impl<T: Item> VirtualList<T> {
    /// Handle one input event.
    pub fn update(&mut self, event: ListEvent) -> Option<Command> {
        match event {
            ListEvent::Key(key) => self.handle_key(key),
            ListEvent::Mouse(mouse) => self.handle_mouse(mouse),
            ListEvent::Tick => self.handle_tick(),
            ListEvent::ContinueRender { generation } => self.continue_render(generation),
        }
    }

    /// Run a list action directly, bypassing key bindings.
    pub fn apply(&mut self, action: ListAction) -> Option<Command> {
        let height = usize::from(self.area.height);
        let step = self.config.scroll_step;
        match action {
            ListAction::Down => self.move_down(step),
            ListAction::Up => self.move_up(step),
            ListAction::DownOneItem => self.select_item_below(),
            ListAction::UpOneItem => self.select_item_above(),
            ListAction::HalfPageDown => self.move_down(height / 2),
            ListAction::HalfPageUp => self.move_up(height / 2),
            ListAction::PageDown => self.move_down(height),
            ListAction::PageUp => self.move_up(height),
            ListAction::End => self.go_to_bottom(),
            ListAction::Home => self.go_to_top(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if !self.focused || key.kind == KeyEventKind::Release {
            return None;
        }
        if let Some(action) = self.keymap.get(key) {
            trace!(?action, "key action");
            return self.apply(action);
        }
        let index = self.selected_index()?;
        let forwarded = self.store.get_mut(index)?.handle_key(key);
        let refreshed = self.refresh_item(index);
        Command::batch([forwarded, refreshed])
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Command> {
        if !self.config.enable_mouse {
            return None;
        }
        let col = i32::from(mouse.column) - i32::from(self.area.x);
        let row = i32::from(mouse.row) - i32::from(self.area.y);
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_down(self.config.scroll_step),
            MouseEventKind::ScrollUp => self.move_up(self.config.scroll_step),
            MouseEventKind::Down(MouseButton::Left) => {
                let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
                    return None;
                };
                if col >= self.area.width || row >= self.area.height {
                    return None;
                }
                match self.clicks.register(mouse.column, mouse.row, Instant::now()) {
                    1 => self.start_selection(i32::from(col), i32::from(row)),
                    2 => self.select_word(col, row),
                    _ => self.select_paragraph(row),
                }
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.extend_selection(col, row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.stop_selection();
                None
            }
            _ => None,
        }
    }

    /// Advance every animating item one frame. Free when nothing animates.
    fn handle_tick(&mut self) -> Option<Command> {
        if !self.store.iter().any(|item| is_animating(item)) {
            return None;
        }
        let animating: Vec<usize> = self
            .store
            .iter()
            .enumerate()
            .filter(|(_, item)| is_animating(*item))
            .map(|(index, _)| index)
            .collect();
        let mut commands = Vec::with_capacity(animating.len() * 2);
        for index in animating {
            let ticked = self
                .store
                .get_mut(index)
                .and_then(|item| item.animated_mut())
                .and_then(|animated| animated.tick());
            commands.push(ticked);
            commands.push(self.refresh_item(index));
        }
        Command::batch(commands)
    }

    // ===== Mouse selection =====

    /// Begin a drag selection at a list-relative cell.
    pub fn start_selection(&mut self, col: i32, row: i32) {
        trace!(col, row, "selection start");
        self.selection.start(col, row);
    }

    /// Move the free end of an in-progress drag.
    pub fn extend_selection(&mut self, col: i32, row: i32) {
        self.selection.extend(col, row);
    }

    /// Finish the drag, keeping what is selected.
    pub fn stop_selection(&mut self) {
        self.selection.stop();
    }

    /// Drop the mouse selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Replace the mouse selection with a finished rectangle.
    pub fn set_selection(&mut self, rect: SelectionRect) {
        self.selection.set(rect);
    }

    /// Select the word under a list-relative cell.
    ///
    /// Landing on whitespace or past the end of the text clears the
    /// selection. A single-cell word cannot be represented and clears it too.
    pub fn select_word(&mut self, col: u16, row: u16) {
        let bounds = self
            .buffer_line_at(row)
            .and_then(|line| self.renderer.buffer().line_text(line))
            .and_then(|text| word_bounds(text, usize::from(col)));
        let row = i32::from(row);
        match bounds.map(|(start, end)| (to_col(start), to_col(end))) {
            Some((start, end)) if start != end => {
                self.selection.set(SelectionRect::new(start, row, end, row));
                trace!(start, end, row, "word selected");
            }
            _ => self.selection.clear(),
        }
    }

    /// Select the paragraph around a list-relative row, across the full
    /// width. A blank row leaves the selection untouched.
    ///
    /// The paragraph may extend past the viewport; the rectangle then reaches
    /// outside it and only the visible part is drawn.
    pub fn select_paragraph(&mut self, row: u16) {
        let Some(line) = self.buffer_line_at(row) else {
            return;
        };
        let Some(view) = self.visible_range() else {
            return;
        };
        let buffer = self.renderer.buffer();
        let Some((start, end)) =
            paragraph_bounds(buffer.len(), line, |index| buffer.line_text(index).unwrap_or(""))
        else {
            return;
        };
        let start_row = to_col(start) - to_col(view.start);
        let end_row = to_col(end) - to_col(view.start);
        let last_col = i32::from(self.area.width) - 1;
        self.selection
            .set(SelectionRect::new(0, start_row, last_col, end_row));
        trace!(start, end, "paragraph selected");
    }

    /// Buffer line shown at a viewport row.
    fn buffer_line_at(&self, row: u16) -> Option<usize> {
        let view = self.visible_range()?;
        let line = view.start + usize::from(row);
        view.contains(line).then_some(line)
    }
}

fn to_col(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
