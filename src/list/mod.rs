//! The virtualized list.
//!
//! [`VirtualList`] ties the item store, the incremental renderer, scroll
//! state, keyboard selection and mouse selection together. All mutation goes
//! through `&mut self` from a single event loop; follow-up work (item
//! commands, the deferred continuation render) is returned as a [`Command`].
//!
//! # Module Structure
//!
//! - `navigation`: scrolling, item-to-item selection, jumps
//! - `mutations`: append, prepend, update, delete, replace-all
//! - `update`: event routing (keys, mouse, ticks, continuations)
//! - `widget`: drawing into a ratatui buffer and text extraction

mod mutations;
mod navigation;
mod update;
mod widget;

use crate::config::{KeyMap, ListConfig};
use crate::model::{Command, Item, ListEvent};
use crate::selection::{ClickTracker, Selection};
use crate::store::ItemStore;
use crate::view_state::{Direction, LineRange, RenderProgress, RenderedBuffer, Renderer, ScrollState};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use tracing::trace;

/// Scrollable list of [`Item`]s that only renders what it must.
///
/// # Invariants
/// - `0 <= offset <= max(0, total_height - viewport_height)` after every
///   public mutator.
/// - `selected`, when set, names an existing item except transiently between
///   a removal and the next render.
pub struct VirtualList<T: Item> {
    config: ListConfig,
    keymap: KeyMap,
    area: Rect,
    focused: bool,
    scroll: ScrollState,
    store: ItemStore<T>,
    renderer: Renderer,
    selected: Option<String>,
    focused_item: Option<String>,
    moving_by_item: bool,
    selection: Selection,
    clicks: ClickTracker,
    selection_style: Style,
}

impl<T: Item> VirtualList<T> {
    /// Build a list. Nothing renders until the list has a size and
    /// [`VirtualList::init`] or a mutator runs.
    pub fn new(items: Vec<T>, config: ListConfig) -> Self {
        Self {
            keymap: KeyMap::default(),
            area: Rect::default(),
            focused: config.focused,
            scroll: ScrollState::new(config.direction),
            store: ItemStore::new(items),
            renderer: Renderer::new(config.gap),
            selected: config.selected_item.clone(),
            focused_item: None,
            moving_by_item: false,
            selection: Selection::default(),
            clicks: ClickTracker::default(),
            selection_style: Style::new().fg(Color::Black).bg(Color::Cyan),
            config,
        }
    }

    /// Replace the key bindings.
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Style applied to selected cells.
    pub fn with_selection_style(mut self, style: Style) -> Self {
        self.selection_style = style;
        self
    }

    /// Initialise every item and run the first render.
    pub fn init(&mut self) -> Option<Command> {
        let mut commands = Vec::with_capacity(self.store.len() + 1);
        for index in 0..self.store.len() {
            if let Some(item) = self.store.get_mut(index) {
                commands.push(item.init());
            }
        }
        commands.push(self.render());
        Command::batch(commands)
    }

    // ===== Accessors =====

    /// Items in order.
    pub fn items(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Item with identifier `id`.
    pub fn item(&self, id: &str) -> Option<&T> {
        self.store.get_by_id(id)
    }

    /// Identifier of the keyboard-selected item.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The keyboard-selected item.
    pub fn selected_item(&self) -> Option<&T> {
        self.selected.as_deref().and_then(|id| self.store.get_by_id(id))
    }

    /// Whether the list holds keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Viewport size as `(width, height)`.
    pub fn size(&self) -> (u16, u16) {
        (self.area.width, self.area.height)
    }

    /// Screen area last assigned with [`VirtualList::set_area`].
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Scroll offset from the direction's anchor.
    pub fn offset(&self) -> usize {
        self.scroll.offset
    }

    /// Render direction.
    pub fn direction(&self) -> Direction {
        self.scroll.direction
    }

    /// Lines in the rendered buffer.
    pub fn total_height(&self) -> usize {
        self.renderer.total_height()
    }

    /// Render progress of the buffer.
    pub fn progress(&self) -> RenderProgress {
        self.renderer.progress()
    }

    /// The rendered buffer.
    pub fn rendered(&self) -> &RenderedBuffer {
        self.renderer.buffer()
    }

    /// Buffer line range currently visible.
    pub fn visible_range(&self) -> Option<LineRange> {
        self.scroll
            .visible(usize::from(self.area.height), self.renderer.total_height())
    }

    /// Buffer lines occupied by item `id`, if it is laid out.
    pub fn item_span(&self, id: &str) -> Option<LineRange> {
        self.renderer.rendered(id).and_then(|entry| entry.span())
    }

    /// The mouse selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether any text is selected with the mouse.
    pub fn has_selection(&self) -> bool {
        self.selection.has_selection()
    }

    // ===== Geometry and focus =====

    /// Set the viewport size.
    ///
    /// A width change re-sizes every item and re-renders from scratch; a
    /// height change only re-clamps the offset.
    pub fn set_size(&mut self, width: u16, height: u16) -> Option<Command> {
        let old_width = self.area.width;
        self.area.width = width;
        self.area.height = height;
        if old_width != width {
            return self.reset(self.selected.clone());
        }
        if !self.renderer.is_loaded() {
            return self.render();
        }
        self.clamp_offset();
        None
    }

    /// Place the list on screen. Mouse coordinates are taken relative to the
    /// area's origin.
    pub fn set_area(&mut self, area: Rect) -> Option<Command> {
        self.area.x = area.x;
        self.area.y = area.y;
        self.set_size(area.width, area.height)
    }

    /// Switch render direction, re-anchoring at the new direction's end.
    pub fn set_direction(&mut self, direction: Direction) -> Option<Command> {
        if self.scroll.direction == direction {
            return None;
        }
        self.scroll = ScrollState::new(direction);
        self.renderer.unload();
        self.render()
    }

    /// Give the list keyboard focus; the selected item is focused too.
    pub fn focus(&mut self) -> Option<Command> {
        self.focused = true;
        self.render()
    }

    /// Take keyboard focus away; the selected item is blurred too.
    pub fn blur(&mut self) -> Option<Command> {
        self.focused = false;
        self.render()
    }

    // ===== Rendering core =====

    /// Bring the buffer, focus state and scroll position up to date.
    ///
    /// From an unloaded state this runs a lazy first pass and returns a
    /// [`ListEvent::ContinueRender`] message when items remain.
    pub(crate) fn render(&mut self) -> Option<Command> {
        if self.area.width == 0 || self.area.height == 0 {
            return None;
        }
        if self.store.is_empty() {
            if self.renderer.is_loaded() {
                self.renderer.unload();
            }
            self.scroll.offset = 0;
            return None;
        }

        let unloaded = !self.renderer.is_loaded();
        let selection_gone = self
            .selected
            .as_deref()
            .is_some_and(|id| !self.store.contains(id));
        if unloaded || selection_gone {
            self.set_default_selected();
        }
        let focus_change = if self.focused {
            self.focus_selected_item()
        } else {
            self.blur_selected_item()
        };

        if unloaded {
            let pending = self.renderer.first_pass(
                self.store.as_slice(),
                self.scroll.direction,
                usize::from(self.area.height),
            );
            self.clamp_offset();
            if let Some(generation) = pending {
                return Command::batch([
                    focus_change,
                    Some(Command::message(ListEvent::ContinueRender { generation })),
                ]);
            }
        } else {
            self.renderer.sync(self.store.as_slice());
            self.clamp_offset();
        }
        if self.focused {
            self.scroll_to_selection();
        }
        focus_change
    }

    /// Finish a lazy render started by a first pass.
    pub(crate) fn continue_render(&mut self, generation: u64) -> Option<Command> {
        if !self.renderer.continue_pass(self.store.as_slice(), generation) {
            return None;
        }
        self.clamp_offset();
        if self.focused {
            self.scroll_to_selection();
        }
        None
    }

    /// Drop every rendered line and re-render, re-sizing every item.
    fn reset(&mut self, selected: Option<String>) -> Option<Command> {
        self.renderer.reset();
        self.scroll.offset = 0;
        self.selected = selected;
        let (width, height) = self.size();
        let mut commands = Vec::with_capacity(self.store.len() + 1);
        if width > 0 && height > 0 {
            for index in 0..self.store.len() {
                if let Some(item) = self.store.get_mut(index) {
                    commands.push(item.set_size(width, height));
                }
            }
        }
        commands.push(self.render());
        Command::batch(commands)
    }

    /// Re-render item `index` after its content changed in place.
    ///
    /// When the item sits before the scroll anchor and its height changed,
    /// the offset absorbs the difference so the visible content stays put.
    pub(crate) fn refresh_item(&mut self, index: usize) -> Option<Command> {
        let id = self.store.get(index)?.id().to_owned();
        self.refresh_renamed_item(index, &id)
    }

    /// Like [`Self::refresh_item`], for an item that was rendered under
    /// `previous_id`. The old placement is what the offset is compensated
    /// against.
    pub(crate) fn refresh_renamed_item(
        &mut self,
        index: usize,
        previous_id: &str,
    ) -> Option<Command> {
        let id = self.store.get(index)?.id().to_owned();
        let before = self
            .renderer
            .rendered(previous_id)
            .and_then(|entry| entry.span().map(|span| (span, entry.height)));
        let total = self.renderer.total_height();
        let anchor_line = match self.scroll.direction {
            Direction::Forward => self.scroll.offset,
            Direction::Backward => total.saturating_sub(1).saturating_sub(self.scroll.offset),
        };

        self.renderer.invalidate(previous_id);
        self.renderer.invalidate(&id);
        self.renderer.mark_dirty(index);
        let command = self.render();

        if let Some((old_span, old_height)) = before {
            let before_anchor = match self.scroll.direction {
                Direction::Forward => anchor_line > old_span.start,
                Direction::Backward => anchor_line < old_span.end,
            };
            let new_height = self.renderer.rendered(&id).map(|entry| entry.height);
            if let (true, Some(new_height)) = (before_anchor, new_height) {
                let offset = (self.scroll.offset + new_height).saturating_sub(old_height);
                self.scroll.set(
                    offset,
                    self.renderer.total_height(),
                    usize::from(self.area.height),
                );
            }
        }
        command
    }

    fn clamp_offset(&mut self) {
        self.scroll
            .clamp(self.renderer.total_height(), usize::from(self.area.height));
    }

    // ===== Keyboard selection and focus =====

    /// Select the first focusable item (forward) or the last (backward) when
    /// the current selection is unset or gone.
    fn set_default_selected(&mut self) {
        if self
            .selected
            .as_deref()
            .is_some_and(|id| self.store.contains(id))
        {
            return;
        }
        let index = match self.scroll.direction {
            Direction::Forward => self.first_selectable_below(None),
            Direction::Backward => self.first_selectable_above(self.store.len()),
        };
        self.selected = index
            .and_then(|index| self.store.get(index))
            .map(|item| item.id().to_owned());
        trace!(selected = ?self.selected, "default selection");
    }

    /// Position of the selected item.
    fn selected_index(&self) -> Option<usize> {
        self.selected.as_deref().and_then(|id| self.store.position(id))
    }

    /// Move input focus to the selected item, blurring the previous holder.
    fn focus_selected_item(&mut self) -> Option<Command> {
        let previous = self.focused_item.take();
        let mut commands = Vec::with_capacity(2);
        if let Some(previous) = previous.filter(|id| Some(id) != self.selected.as_ref()) {
            commands.push(self.set_item_focus(&previous, false));
        }
        if let Some(id) = self.selected.clone() {
            commands.push(self.set_item_focus(&id, true));
            self.focused_item = Some(id);
        }
        Command::batch(commands)
    }

    /// Blur whichever item holds input focus.
    fn blur_selected_item(&mut self) -> Option<Command> {
        let mut commands = Vec::with_capacity(2);
        if let Some(previous) = self.focused_item.take() {
            commands.push(self.set_item_focus(&previous, false));
        }
        if let Some(id) = self.selected.clone() {
            commands.push(self.set_item_focus(&id, false));
        }
        Command::batch(commands)
    }

    /// Focus or blur item `id`. Its cached render is dropped when the state
    /// actually changes.
    fn set_item_focus(&mut self, id: &str, focus: bool) -> Option<Command> {
        let index = self.store.position(id)?;
        let focusable = self.store.get_mut(index)?.focusable_mut()?;
        if focusable.is_focused() == focus {
            return None;
        }
        let command = if focus {
            focusable.focus()
        } else {
            focusable.blur()
        };
        self.renderer.invalidate(id);
        self.renderer.mark_dirty(index);
        trace!(id, focus, "item focus changed");
        command
    }

    /// Scroll so the selected item is in view.
    ///
    /// Nothing moves if the item already fills the viewport. While moving by
    /// item the whole item must be visible; otherwise either edge being
    /// visible is enough.
    fn scroll_to_selection(&mut self) {
        let moving_by_item = std::mem::take(&mut self.moving_by_item);
        let Some(id) = self.selected.clone() else {
            return;
        };
        if !self.store.contains(&id) {
            self.selected = None;
            self.set_default_selected();
            return;
        }
        let Some(span) = self.item_span(&id) else {
            return;
        };
        let Some(view) = self.visible_range() else {
            return;
        };

        if span.start <= view.start && span.end >= view.end {
            return;
        }
        if moving_by_item {
            if view.contains_range(span) {
                return;
            }
        } else if view.contains(span.start) || view.contains(span.end) {
            return;
        }

        let height = usize::from(self.area.height);
        let total = self.renderer.total_height();
        let forward = self.scroll.direction.is_forward();
        let offset = if span.len() >= height {
            if forward {
                span.start
            } else {
                total.saturating_sub(span.start + height)
            }
        } else if span.start < view.start {
            if forward {
                span.start
            } else {
                total.saturating_sub(span.start + height)
            }
        } else if span.end > view.end {
            if forward {
                (span.end + 1).saturating_sub(height)
            } else {
                total.saturating_sub(1).saturating_sub(span.end)
            }
        } else {
            return;
        };
        self.scroll.set(offset, total, height);
        trace!(id, offset = self.scroll.offset, "scrolled selection into view");
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
