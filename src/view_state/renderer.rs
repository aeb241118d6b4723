//! Incremental rendering of the item sequence into a [`RenderedBuffer`].
//!
//! Rendering happens in up to three stages:
//!
//! 1. **First pass**: items are rendered in direction order (first item
//!    onward when forward, last item backward when backward) until the
//!    accumulated height, gaps included, fills the viewport.
//! 2. **Continuation**: the remaining items are rendered and appended
//!    (forward) or prepended (backward). A continuation carries the
//!    generation of the first pass that scheduled it; a newer pass makes it a
//!    no-op.
//! 3. **Tail rebuild**: once complete, a local change (append, delete,
//!    update, focus transfer) only truncates the buffer at the end of the
//!    last unchanged item and re-lays the items after it, reusing cached
//!    renders. Before completion, a local change re-lays the partial window
//!    and leaves the continuation pending.
//!
//! The buffer always reads in item order, whatever the direction. Item
//! positions are only meaningful for items materialized in the buffer.

use super::buffer::RenderedBuffer;
use super::cache::{RenderCache, RenderedItem};
use super::types::Direction;
use crate::model::Item;
use ratatui::text::Line;
use tracing::debug;

/// How much of the item sequence is in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderProgress {
    /// Nothing laid out; the next render is a first pass.
    Unloaded,
    /// A first pass materialized `rendered` items from the `direction` end.
    Partial {
        /// Items in the buffer.
        rendered: usize,
        /// Direction of the first pass.
        direction: Direction,
    },
    /// Every item is in the buffer.
    Complete,
}

/// Owner of the render cache and the rendered buffer.
///
/// # Invariants
/// - When `Complete`, every item has a placed cache entry and the buffer is
///   the concatenation of their lines with `gap` blank lines after every item
///   except the last.
/// - `dirty_from`, when set, is the lowest item index whose rendering may be
///   out of date.
#[derive(Debug, Clone)]
pub struct Renderer {
    cache: RenderCache,
    buffer: RenderedBuffer,
    progress: RenderProgress,
    generation: u64,
    dirty_from: Option<usize>,
    gap: usize,
}

impl Renderer {
    /// Empty renderer inserting `gap` blank lines between items.
    pub fn new(gap: usize) -> Self {
        Self {
            cache: RenderCache::new(),
            buffer: RenderedBuffer::new(),
            progress: RenderProgress::Unloaded,
            generation: 0,
            dirty_from: None,
            gap,
        }
    }

    /// Blank lines between items.
    pub fn gap(&self) -> usize {
        self.gap
    }

    /// The rendered buffer.
    pub fn buffer(&self) -> &RenderedBuffer {
        &self.buffer
    }

    /// Height of the rendered buffer.
    pub fn total_height(&self) -> usize {
        self.buffer.len()
    }

    /// Current render progress.
    pub fn progress(&self) -> RenderProgress {
        self.progress
    }

    /// Generation of the latest first pass.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether any layout exists.
    pub fn is_loaded(&self) -> bool {
        self.progress != RenderProgress::Unloaded
    }

    /// Cached render of `id` if it is laid out in the buffer.
    pub fn rendered(&self, id: &str) -> Option<&RenderedItem> {
        self.cache.get(id).filter(|entry| entry.is_placed())
    }

    /// Number of cached renders.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop the cached render of `id`.
    pub fn invalidate(&mut self, id: &str) {
        self.cache.invalidate(id);
    }

    /// Record that items from `index` on may render differently.
    pub fn mark_dirty(&mut self, index: usize) {
        self.dirty_from = Some(self.dirty_from.map_or(index, |from| from.min(index)));
    }

    /// Forget the layout, keeping cached renders for reuse.
    pub fn unload(&mut self) {
        self.buffer.clear();
        self.cache.unplace_all();
        self.progress = RenderProgress::Unloaded;
        self.dirty_from = None;
        self.generation += 1;
    }

    /// Forget the layout and every cached render.
    pub fn reset(&mut self) {
        self.unload();
        self.cache.clear();
        debug!(generation = self.generation, "render state reset");
    }

    /// Lay out items from the `direction` end until `viewport_height` lines
    /// are filled.
    ///
    /// Returns the generation to pass to [`Renderer::continue_pass`] when
    /// items remain, `None` when the buffer is already complete.
    pub fn first_pass<T: Item>(
        &mut self,
        items: &[T],
        direction: Direction,
        viewport_height: usize,
    ) -> Option<u64> {
        self.buffer.clear();
        self.cache.unplace_all();
        self.dirty_from = None;
        self.generation += 1;

        let len = items.len();
        let mut accumulated = 0;
        let mut rendered = 0;
        while rendered < len && accumulated < viewport_height {
            let index = match direction {
                Direction::Forward => rendered,
                Direction::Backward => len - 1 - rendered,
            };
            let height = self.entry_for(&items[index]).height;
            accumulated += height + self.gap_after(index, len);
            rendered += 1;
        }

        let materialized = match direction {
            Direction::Forward => 0..rendered,
            Direction::Backward => len - rendered..len,
        };
        for index in materialized {
            self.place(items, index);
        }

        debug!(
            ?direction,
            rendered,
            total = len,
            lines = self.buffer.len(),
            generation = self.generation,
            "first render pass"
        );

        if rendered == len {
            self.progress = RenderProgress::Complete;
            None
        } else {
            self.progress = RenderProgress::Partial {
                rendered,
                direction,
            };
            Some(self.generation)
        }
    }

    /// Render the items the first pass left out.
    ///
    /// Forward continuations append below the existing content, backward ones
    /// prepend above it, so already laid-out lines keep their distance from
    /// the anchor. Returns `false` if `generation` is stale or nothing is
    /// pending.
    pub fn continue_pass<T: Item>(&mut self, items: &[T], generation: u64) -> bool {
        let RenderProgress::Partial {
            rendered,
            direction,
        } = self.progress
        else {
            return false;
        };
        if generation != self.generation {
            debug!(generation, current = self.generation, "ignoring stale continuation");
            return false;
        }

        let len = items.len();
        if rendered > len {
            self.full_pass(items);
            return true;
        }

        match direction {
            Direction::Forward => {
                for index in rendered..len {
                    self.place(items, index);
                }
            }
            Direction::Backward => {
                let split = len - rendered;
                let mut front = Vec::new();
                for index in 0..split {
                    let gap = self.gap_after(index, len);
                    front.extend(self.entry_for(&items[index]).lines.iter().cloned());
                    front.extend(std::iter::repeat_with(Line::default).take(gap));
                }
                self.buffer.prepend(front);
                self.recalculate_positions_from(items, 0);
            }
        }

        self.progress = RenderProgress::Complete;
        debug!(
            ?direction,
            added = len - rendered,
            lines = self.buffer.len(),
            "continuation render pass"
        );
        true
    }

    /// Lay out every item from scratch, reusing cached renders.
    pub fn full_pass<T: Item>(&mut self, items: &[T]) {
        self.buffer.clear();
        self.cache.unplace_all();
        self.dirty_from = None;
        for index in 0..items.len() {
            self.place(items, index);
        }
        self.progress = RenderProgress::Complete;
        debug!(items = items.len(), lines = self.buffer.len(), "full render pass");
    }

    /// Apply pending changes recorded with [`Renderer::mark_dirty`].
    ///
    /// A complete buffer gets a tail rebuild. A partial one re-lays the same
    /// number of items from its `direction` end and stays partial, so the
    /// pending continuation still applies and renders the rest.
    pub fn sync<T: Item>(&mut self, items: &[T]) {
        let Some(from) = self.dirty_from.take() else {
            return;
        };
        match self.progress {
            RenderProgress::Unloaded => {}
            RenderProgress::Partial {
                rendered,
                direction,
            } => self.relay_partial(items, rendered, direction),
            RenderProgress::Complete => self.rebuild_tail(items, from),
        }
    }

    fn relay_partial<T: Item>(&mut self, items: &[T], rendered: usize, direction: Direction) {
        let len = items.len();
        if rendered >= len {
            self.full_pass(items);
            return;
        }
        self.buffer.clear();
        self.cache.unplace_all();
        let window = match direction {
            Direction::Forward => 0..rendered,
            Direction::Backward => len - rendered..len,
        };
        for index in window {
            self.place(items, index);
        }
        debug!(
            ?direction,
            rendered,
            total = len,
            lines = self.buffer.len(),
            "re-laid partial render"
        );
    }

    fn rebuild_tail<T: Item>(&mut self, items: &[T], from: usize) {
        let len = items.len();
        let from = from.min(len);
        if from == 0 {
            self.full_pass(items);
            return;
        }
        let Some(prev_end) = self
            .rendered(items[from - 1].id())
            .and_then(RenderedItem::span)
            .map(|span| span.end)
        else {
            self.full_pass(items);
            return;
        };

        self.buffer.truncate(prev_end + 1);
        if from < len {
            self.buffer.push_blank(self.gap);
        }
        for index in from..len {
            self.place(items, index);
        }
        debug!(from, lines = self.buffer.len(), "rebuilt render tail");
    }

    /// Recompute `start`/`end` of every item from `from` on, without touching
    /// the buffer.
    fn recalculate_positions_from<T: Item>(&mut self, items: &[T], from: usize) {
        let mut line = match from.checked_sub(1).and_then(|prev| items.get(prev)) {
            Some(prev) => self
                .rendered(prev.id())
                .map_or(0, |entry| entry.end + 1 + self.gap),
            None => 0,
        };
        for item in items.iter().skip(from) {
            if let Some(entry) = self.cache.get_mut(item.id()) {
                line = entry.place(line) + self.gap;
            }
        }
    }

    /// Append item `index` (and the gap after it) to the buffer.
    fn place<T: Item>(&mut self, items: &[T], index: usize) {
        let gap = self.gap_after(index, items.len());
        let start = self.buffer.len();
        let entry = self.cache.get_or_render(&items[index]);
        entry.place(start);
        for line in &entry.lines {
            self.buffer.push_line(line.clone());
        }
        self.buffer.push_blank(gap);
    }

    fn entry_for<T: Item>(&mut self, item: &T) -> &RenderedItem {
        self.cache.get_or_render(item)
    }

    fn gap_after(&self, index: usize, len: usize) -> usize {
        if index + 1 < len {
            self.gap
        } else {
            0
        }
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
