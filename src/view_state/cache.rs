//! Per-item render cache.
//!
//! Entries are keyed by item identifier. An entry is created the first time an
//! item is rendered and dropped whenever the item's appearance may have
//! changed (update, resize, focus transfer, deletion). The cache is unbounded:
//! it never holds more entries than the list holds items.

use super::types::LineRange;
use crate::model::Item;
use ratatui::text::{Line, Text};
use std::collections::HashMap;

/// Memoized output of one item.
///
/// # Invariants
/// - `height == lines.len()` and `height >= 1`
/// - `end == start + height - 1`
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    /// Rendered lines, styling included.
    pub lines: Vec<Line<'static>>,
    /// Number of lines.
    pub height: usize,
    /// First buffer line occupied by the item.
    pub start: usize,
    /// Last buffer line occupied by the item.
    pub end: usize,
    placed: bool,
}

impl RenderedItem {
    /// Measure a rendered view. An empty view still occupies one blank line.
    pub fn from_text(text: Text<'static>) -> Self {
        let base = text.style;
        let mut lines: Vec<Line<'static>> = text
            .lines
            .into_iter()
            .map(|mut line| {
                line.style = base.patch(line.style);
                line
            })
            .collect();
        if lines.is_empty() {
            lines.push(Line::default());
        }
        let height = lines.len();
        Self {
            lines,
            height,
            start: 0,
            end: height - 1,
            placed: false,
        }
    }

    /// Record that the item starts at buffer line `start`. Returns the line
    /// just past the item.
    pub fn place(&mut self, start: usize) -> usize {
        self.start = start;
        self.end = start + self.height - 1;
        self.placed = true;
        self.end + 1
    }

    /// Buffer span of the item, if its position is current.
    pub fn span(&self) -> Option<LineRange> {
        self.placed.then(|| LineRange::new(self.start, self.end))
    }

    /// Whether `start`/`end` reflect the current buffer.
    pub fn is_placed(&self) -> bool {
        self.placed
    }
}

/// Identifier-keyed cache of rendered items.
#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    entries: HashMap<String, RenderedItem>,
}

impl RenderCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached entry for `id`.
    pub fn get(&self, id: &str) -> Option<&RenderedItem> {
        self.entries.get(id)
    }

    /// Mutable cached entry for `id`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut RenderedItem> {
        self.entries.get_mut(id)
    }

    /// Store an entry, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<String>, item: RenderedItem) {
        self.entries.insert(id.into(), item);
    }

    /// Entry for `item`, rendering and storing it on a miss.
    pub fn get_or_render<T: Item + ?Sized>(&mut self, item: &T) -> &mut RenderedItem {
        self.entries
            .entry(item.id().to_owned())
            .or_insert_with(|| RenderedItem::from_text(item.view()))
    }

    /// Drop the entry for `id`. Returns whether one existed.
    pub fn invalidate(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Whether an entry exists for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Mark every entry's position as stale, keeping the rendered lines.
    pub fn unplace_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.placed = false;
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
