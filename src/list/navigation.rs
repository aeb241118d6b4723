//! Scrolling and keyboard selection.
//!
//! Two different "in view" tests are used on purpose. Explicit item
//! navigation scrolls until the new item is fully visible. Passive
//! re-selection while scrolling by lines only kicks in once the selected
//! item's midpoint has left the viewport.

use super::VirtualList;
use crate::model::item::is_focusable;
use crate::model::{Command, Item};
use crate::view_state::layout::max_offset;
use crate::view_state::Direction;
use tracing::trace;

impl<T: Item> VirtualList<T> {
    /// Scroll the content up by `lines` (towards the end of the list).
    pub fn move_down(&mut self, lines: usize) -> Option<Command> {
        let moved = match self.scroll.direction {
            Direction::Forward => self.scroll.increment(
                lines,
                self.renderer.total_height(),
                usize::from(self.area.height),
            ),
            Direction::Backward => self.scroll.decrement(lines),
        };
        if moved == 0 {
            return None;
        }
        self.selection.shift(-screen_lines(moved));
        trace!(moved, offset = self.scroll.offset, "moved down");
        self.change_selection_when_scrolling()
    }

    /// Scroll the content down by `lines` (towards the start of the list).
    pub fn move_up(&mut self, lines: usize) -> Option<Command> {
        let moved = match self.scroll.direction {
            Direction::Forward => self.scroll.decrement(lines),
            Direction::Backward => self.scroll.increment(
                lines,
                self.renderer.total_height(),
                usize::from(self.area.height),
            ),
        };
        if moved == 0 {
            return None;
        }
        self.selection.shift(screen_lines(moved));
        trace!(moved, offset = self.scroll.offset, "moved up");
        self.change_selection_when_scrolling()
    }

    /// Select the previous focusable item and scroll it fully into view.
    ///
    /// When the new item is the second one and the first is not focusable
    /// (a section header), the viewport jumps to the top edge so the header
    /// shows too.
    pub fn select_item_above(&mut self) -> Option<Command> {
        let Some(index) = self.selected_index() else {
            return self.select_default();
        };
        let target = self.first_selectable_above(index)?;
        if target == 1 && self.first_selectable_above(target).is_none() {
            self.reveal_top();
        }
        self.select_index(target)
    }

    /// Select the next focusable item and scroll it fully into view.
    pub fn select_item_below(&mut self) -> Option<Command> {
        let Some(index) = self.selected_index() else {
            return self.select_default();
        };
        let target = self.first_selectable_below(Some(index))?;
        self.select_index(target)
    }

    /// Select item `id`. An unknown identifier falls back to the default
    /// selection on the next render.
    pub fn set_selected(&mut self, id: impl Into<String>) -> Option<Command> {
        self.selected = Some(id.into());
        self.render()
    }

    /// Jump to the first item, switching to forward direction.
    pub fn go_to_top(&mut self) -> Option<Command> {
        self.jump_to(Direction::Forward)
    }

    /// Jump to the last item, switching to backward direction.
    pub fn go_to_bottom(&mut self) -> Option<Command> {
        self.jump_to(Direction::Backward)
    }

    fn jump_to(&mut self, direction: Direction) -> Option<Command> {
        self.scroll.offset = 0;
        self.selected = None;
        if self.scroll.direction != direction {
            self.scroll.direction = direction;
            self.renderer.unload();
        }
        self.set_default_selected();
        trace!(?direction, "jump");
        self.render()
    }

    fn select_default(&mut self) -> Option<Command> {
        self.selected = None;
        self.set_default_selected();
        self.render()
    }

    fn select_index(&mut self, index: usize) -> Option<Command> {
        let id = self.store.get(index)?.id().to_owned();
        trace!(id, "select item");
        self.selected = Some(id);
        self.moving_by_item = true;
        self.render()
    }

    /// Put the first buffer line at the top of the viewport.
    fn reveal_top(&mut self) {
        self.scroll.offset = match self.scroll.direction {
            Direction::Forward => 0,
            Direction::Backward => max_offset(
                self.renderer.total_height(),
                usize::from(self.area.height),
            ),
        };
    }

    /// Hand the selection to an item in view once the selected item has
    /// mostly scrolled out.
    ///
    /// Searches in the direction the content moved: past the viewport top
    /// the first item below whose start is visible wins, past the bottom the
    /// first item above whose end is visible. An item filling the whole
    /// viewport always wins.
    pub(crate) fn change_selection_when_scrolling(&mut self) -> Option<Command> {
        let id = self.selected.clone()?;
        let span = self.item_span(&id)?;
        let view = self.visible_range()?;
        if span.start <= view.start && span.end >= view.end {
            return None;
        }
        if view.contains_range(span) {
            return None;
        }

        let middle = span.start + span.len() / 2;
        let mut index = self.store.position(&id)?;
        let scrolled_past_top = if middle < view.start {
            true
        } else if middle > view.end {
            false
        } else {
            return None;
        };

        for _ in 0..self.store.len() {
            index = if scrolled_past_top {
                self.first_selectable_below(Some(index))?
            } else {
                self.first_selectable_above(index)?
            };
            let Some(candidate) = self
                .store
                .get(index)
                .and_then(|item| self.item_span(item.id()))
            else {
                continue;
            };
            let fills = candidate.start <= view.start && candidate.end >= view.end;
            let edge = if scrolled_past_top {
                candidate.start
            } else {
                candidate.end
            };
            if fills || view.contains(edge) {
                return self.select_index_passively(index);
            }
        }
        None
    }

    fn select_index_passively(&mut self, index: usize) -> Option<Command> {
        let id = self.store.get(index)?.id().to_owned();
        trace!(id, "selection follows scroll");
        self.selected = Some(id);
        self.render()
    }

    /// Nearest focusable item before `index`. Starting from the first item
    /// with wrap-around enabled, the search restarts at the end.
    pub(crate) fn first_selectable_above(&self, index: usize) -> Option<usize> {
        let items = self.store.as_slice();
        let end = index.min(items.len());
        let found = items[..end].iter().rposition(|item| is_focusable(item));
        if found.is_none() && index == 0 && self.config.wrap_navigation {
            return items.iter().rposition(|item| is_focusable(item));
        }
        found
    }

    /// Nearest focusable item after `index` (`None` searches from the
    /// start). Starting from the last item with wrap-around enabled, the
    /// search restarts at the beginning.
    pub(crate) fn first_selectable_below(&self, index: Option<usize>) -> Option<usize> {
        let items = self.store.as_slice();
        let start = index.map_or(0, |index| index + 1);
        let found = items
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, item)| is_focusable(*item))
            .map(|(position, _)| position);
        let at_end = index.is_some_and(|index| index + 1 == items.len());
        if found.is_none() && at_end && self.config.wrap_navigation {
            return items.iter().position(|item| is_focusable(item));
        }
        found
    }
}

/// Scrolled line count as a signed screen distance.
fn screen_lines(lines: usize) -> i32 {
    i32::try_from(lines).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
