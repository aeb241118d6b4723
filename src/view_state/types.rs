//! Core view-state types

use serde::Deserialize;

/// Which end of the item sequence the list is anchored to.
///
/// Line 0 of the rendered buffer is always the first item. In `Forward`
/// direction the scroll offset counts lines down from the top; in `Backward`
/// direction it counts lines up from the bottom (chat-style lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Anchored at the top.
    #[default]
    Forward,
    /// Anchored at the bottom.
    Backward,
}

impl Direction {
    /// Whether this is [`Direction::Forward`].
    pub fn is_forward(self) -> bool {
        self == Self::Forward
    }
}

/// Inclusive range of rendered-buffer lines.
///
/// # Invariants
/// - `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// First line (inclusive).
    pub start: usize,
    /// Last line (inclusive).
    pub end: usize,
}

impl LineRange {
    /// Create a range, swapping the bounds if given in reverse.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false: an inclusive range covers at least one line.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `line` lies inside the range.
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains_range(&self, other: LineRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
