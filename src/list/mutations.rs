//! Item mutations.
//!
//! Each mutator patches the store, marks the first affected index dirty and
//! re-renders, so only the buffer tail from that index on is rebuilt.

use super::VirtualList;
use crate::model::{Command, Item};
use crate::view_state::Direction;
use tracing::{debug, warn};

impl<T: Item> VirtualList<T> {
    /// Add an item at the end.
    ///
    /// In backward direction at the bottom (offset 0) the list follows the
    /// new item and selects it. Scrolled up, the offset grows by the new
    /// lines so the visible content does not move. Duplicate identifiers are
    /// ignored.
    pub fn append_item(&mut self, mut item: T) -> Option<Command> {
        if self.store.contains(item.id()) {
            warn!(id = item.id(), "ignoring append of duplicate item id");
            return None;
        }
        let init = item.init();
        let resize = self.resize_item(&mut item);
        let id = item.id().to_owned();
        let index = self.store.push(item)?;
        self.renderer.mark_dirty(index);
        let rendered = self.render();

        let follow = match self.scroll.direction {
            Direction::Backward if self.scroll.offset == 0 => self.go_to_bottom(),
            Direction::Backward => {
                self.shift_for_inserted(&id);
                None
            }
            Direction::Forward => None,
        };
        debug!(id, index, "appended item");
        Command::sequence([init, resize, rendered, follow])
    }

    /// Add an item at the front.
    ///
    /// Mirror image of [`VirtualList::append_item`]: in forward direction at
    /// the top the list jumps to the new item, scrolled down the offset
    /// compensates.
    pub fn prepend_item(&mut self, mut item: T) -> Option<Command> {
        if self.store.contains(item.id()) {
            warn!(id = item.id(), "ignoring prepend of duplicate item id");
            return None;
        }
        let init = item.init();
        let resize = self.resize_item(&mut item);
        let id = item.id().to_owned();
        if !self.store.prepend(item) {
            return None;
        }
        self.renderer.mark_dirty(0);
        let rendered = self.render();

        let follow = match self.scroll.direction {
            Direction::Forward if self.scroll.offset == 0 => self.go_to_top(),
            Direction::Forward => {
                self.shift_for_inserted(&id);
                None
            }
            Direction::Backward => None,
        };
        debug!(id, "prepended item");
        Command::batch([init, resize, rendered, follow])
    }

    /// Replace the item with identifier `id`.
    ///
    /// The replacement may carry a different identifier as long as it does
    /// not collide with another item. Unknown ids are ignored.
    pub fn update_item(&mut self, id: &str, item: T) -> Option<Command> {
        let index = self.store.position(id)?;
        let new_id = item.id().to_owned();
        if let Err(rejected) = self.store.replace(index, item) {
            warn!(id, new_id = rejected.id(), "ignoring update");
            return None;
        }
        if new_id != id {
            if self.selected.as_deref() == Some(id) {
                self.selected = Some(new_id.clone());
            }
            if self.focused_item.as_deref() == Some(id) {
                self.focused_item = Some(new_id);
            }
        }
        debug!(id, index, "updated item");
        self.refresh_renamed_item(index, id)
    }

    /// Remove the item with identifier `id`.
    ///
    /// If it was selected, the item right before it becomes selected, or
    /// nothing if it was the first.
    pub fn delete_item(&mut self, id: &str) -> Option<Command> {
        let (index, _) = self.store.remove(id)?;
        self.renderer.invalidate(id);
        self.renderer.mark_dirty(index);
        if self.focused_item.as_deref() == Some(id) {
            self.focused_item = None;
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = index
                .checked_sub(1)
                .and_then(|previous| self.store.get(previous))
                .map(|item| item.id().to_owned());
        }
        debug!(id, index, "deleted item");
        let command = self.render();
        self.clamp_offset();
        command
    }

    /// Replace every item, initialise the new ones and render from scratch.
    pub fn set_items(&mut self, items: Vec<T>) -> Option<Command> {
        self.store.set_all(items);
        self.focused_item = None;
        let mut commands = Vec::with_capacity(self.store.len() + 1);
        for index in 0..self.store.len() {
            if let Some(item) = self.store.get_mut(index) {
                commands.push(item.init());
            }
        }
        debug!(items = self.store.len(), "replaced all items");
        commands.push(self.reset(None));
        Command::batch(commands)
    }

    fn resize_item(&self, item: &mut T) -> Option<Command> {
        let (width, height) = self.size();
        if width > 0 && height > 0 {
            item.set_size(width, height)
        } else {
            None
        }
    }

    /// Grow the offset by the lines an inserted item added before the anchor.
    fn shift_for_inserted(&mut self, id: &str) {
        let Some(height) = self.renderer.rendered(id).map(|entry| entry.height) else {
            return;
        };
        let mut lines = height;
        if self.store.len() > 1 {
            lines += self.renderer.gap();
        }
        self.scroll.set(
            self.scroll.offset + lines,
            self.renderer.total_height(),
            usize::from(self.area.height),
        );
    }
}

#[cfg(test)]
#[path = "mutations_tests.rs"]
mod tests;
