//! Scroll offset and direction.

use super::layout::{clamp_offset, max_offset, visible_range};
use super::types::{Direction, LineRange};

/// Scroll position of the list.
///
/// `offset` counts lines from the anchor: the top of the buffer in forward
/// direction, the bottom in backward direction.
///
/// # Clamping Behavior
/// Mutators keep `0 <= offset <= max(0, total_height - viewport_height)`.
/// Requests past either end are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Lines from the anchor.
    pub offset: usize,
    /// Which end the offset is measured from.
    pub direction: Direction,
}

impl ScrollState {
    /// Scroll state at the anchor.
    pub fn new(direction: Direction) -> Self {
        Self {
            offset: 0,
            direction,
        }
    }

    /// Move the offset away from the anchor by up to `n` lines. Returns the
    /// number of lines actually moved.
    pub fn increment(&mut self, n: usize, total_height: usize, viewport_height: usize) -> usize {
        let room = max_offset(total_height, viewport_height).saturating_sub(self.offset);
        let moved = n.min(room);
        self.offset += moved;
        moved
    }

    /// Move the offset toward the anchor by up to `n` lines. Returns the number
    /// of lines actually moved.
    pub fn decrement(&mut self, n: usize) -> usize {
        let moved = n.min(self.offset);
        self.offset -= moved;
        moved
    }

    /// Re-establish the offset invariant after the buffer or viewport changed.
    pub fn clamp(&mut self, total_height: usize, viewport_height: usize) {
        self.offset = clamp_offset(self.offset, total_height, viewport_height);
    }

    /// Set the offset, clamped.
    pub fn set(&mut self, offset: usize, total_height: usize, viewport_height: usize) {
        self.offset = clamp_offset(offset, total_height, viewport_height);
    }

    /// Visible line range for this position.
    pub fn visible(&self, viewport_height: usize, total_height: usize) -> Option<LineRange> {
        visible_range(self.offset, viewport_height, self.direction, total_height)
    }
}
