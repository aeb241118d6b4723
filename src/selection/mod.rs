//! Mouse text selection.
//!
//! A selection is a rectangle in list-relative screen coordinates. It never
//! touches items or scroll state: the list maps it onto the drawn cells when
//! rendering ([`render::highlight`]) or copying ([`render::extract_text`]),
//! and translates screen rows into rendered-buffer lines for word and
//! paragraph selection ([`boundaries`]).

pub mod boundaries;
pub mod glyphs;
pub mod render;

pub use boundaries::{paragraph_bounds, word_bounds};

use std::time::{Duration, Instant};

/// Maximum delay between clicks of a double or triple click.
pub const MULTI_CLICK_TIMEOUT: Duration = Duration::from_millis(400);

/// One selection endpoint. Coordinates may fall outside the viewport after
/// scrolling; `-1` is the "unset" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionPoint {
    /// Column within the list area.
    pub col: i32,
    /// Row within the list area.
    pub line: i32,
}

/// Two selection endpoints, in the order they were set.
///
/// # Invariants
/// - Coincident endpoints mean "no selection".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRect {
    /// Where the selection started (the anchor).
    pub start: SelectionPoint,
    /// Where the selection currently ends.
    pub end: SelectionPoint,
}

impl SelectionRect {
    /// The empty selection.
    pub const NONE: Self = Self {
        start: SelectionPoint { col: -1, line: -1 },
        end: SelectionPoint { col: -1, line: -1 },
    };

    /// Rectangle from two endpoints.
    pub fn new(start_col: i32, start_line: i32, end_col: i32, end_line: i32) -> Self {
        Self {
            start: SelectionPoint {
                col: start_col,
                line: start_line,
            },
            end: SelectionPoint {
                col: end_col,
                line: end_line,
            },
        }
    }

    /// Whether the endpoints coincide.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Top-left and bottom-right corners, each axis ordered independently.
    pub fn canonical(&self) -> (SelectionPoint, SelectionPoint) {
        (
            SelectionPoint {
                col: self.start.col.min(self.end.col),
                line: self.start.line.min(self.end.line),
            },
            SelectionPoint {
                col: self.start.col.max(self.end.col),
                line: self.start.line.max(self.end.line),
            },
        )
    }
}

impl Default for SelectionRect {
    fn default() -> Self {
        Self::NONE
    }
}

/// Selection rectangle plus drag state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    rect: SelectionRect,
    active: bool,
}

impl Selection {
    /// Begin a drag at a point. The selection stays empty until extended.
    pub fn start(&mut self, col: i32, line: i32) {
        self.rect = SelectionRect::new(col, line, col, line);
        self.active = true;
    }

    /// Move the free endpoint of an in-progress drag.
    pub fn extend(&mut self, col: i32, line: i32) {
        if !self.active {
            return;
        }
        self.rect.end = SelectionPoint { col, line };
    }

    /// Finish the drag, keeping the selected rectangle.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.rect = SelectionRect::NONE;
        self.active = false;
    }

    /// Replace the rectangle with a finished selection.
    pub fn set(&mut self, rect: SelectionRect) {
        self.rect = rect;
        self.active = false;
    }

    /// Current rectangle.
    pub fn rect(&self) -> SelectionRect {
        self.rect
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether anything is selected.
    pub fn has_selection(&self) -> bool {
        !self.rect.is_empty()
    }

    /// Follow content that moved `lines` rows on screen (negative is up).
    ///
    /// A finished selection moves as a whole. During a drag only the anchor
    /// moves; the free endpoint stays under the pointer.
    pub fn shift(&mut self, lines: i32) {
        if self.active {
            self.rect.start.line += lines;
        } else if self.has_selection() {
            self.rect.start.line += lines;
            self.rect.end.line += lines;
        }
    }
}

/// Counts consecutive clicks at one position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickTracker {
    last: Option<(Instant, u16, u16)>,
    count: u8,
}

impl ClickTracker {
    /// Record a click and return its multiplicity: 1 (single), 2 (double) or
    /// 3 (triple). Clicks beyond the third stay at 3.
    pub fn register(&mut self, col: u16, row: u16, now: Instant) -> u8 {
        self.count = match self.last {
            Some((at, last_col, last_row))
                if last_col == col
                    && last_row == row
                    && now.saturating_duration_since(at) <= MULTI_CLICK_TIMEOUT =>
            {
                (self.count + 1).min(3)
            }
            _ => 1,
        };
        self.last = Some((now, col, row));
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rect {
        use super::*;

        #[test]
        fn none_is_empty() {
            assert!(SelectionRect::NONE.is_empty());
            assert!(SelectionRect::default().is_empty());
        }

        #[test]
        fn canonical_orders_each_axis() {
            let (min, max) = SelectionRect::new(8, 3, 2, 1).canonical();
            assert_eq!(min, SelectionPoint { col: 2, line: 1 });
            assert_eq!(max, SelectionPoint { col: 8, line: 3 });
        }
    }

    mod drag {
        use super::*;

        #[test]
        fn start_then_extend_selects() {
            let mut selection = Selection::default();
            selection.start(1, 1);
            assert!(!selection.has_selection());
            selection.extend(5, 2);
            assert!(selection.has_selection());
            assert!(selection.is_active());
            selection.stop();
            assert!(!selection.is_active());
            assert_eq!(selection.rect(), SelectionRect::new(1, 1, 5, 2));
        }

        #[test]
        fn extend_without_drag_is_ignored() {
            let mut selection = Selection::default();
            selection.extend(5, 2);
            assert!(!selection.has_selection());
        }

        #[test]
        fn clear_resets_to_none() {
            let mut selection = Selection::default();
            selection.start(0, 0);
            selection.extend(3, 0);
            selection.clear();
            assert_eq!(selection.rect(), SelectionRect::NONE);
            assert!(!selection.is_active());
        }
    }

    mod shifting {
        use super::*;

        #[test]
        fn finished_selection_moves_as_a_whole() {
            let mut selection = Selection::default();
            selection.set(SelectionRect::new(0, 4, 5, 6));
            selection.shift(-2);
            assert_eq!(selection.rect(), SelectionRect::new(0, 2, 5, 4));
        }

        #[test]
        fn drag_moves_only_the_anchor() {
            let mut selection = Selection::default();
            selection.start(0, 4);
            selection.extend(5, 6);
            selection.shift(3);
            assert_eq!(selection.rect(), SelectionRect::new(0, 7, 5, 6));
        }

        #[test]
        fn empty_selection_does_not_move() {
            let mut selection = Selection::default();
            selection.shift(5);
            assert_eq!(selection.rect(), SelectionRect::NONE);
        }
    }

    mod clicks {
        use super::*;

        #[test]
        fn rapid_clicks_at_one_spot_count_up_to_three() {
            let mut tracker = ClickTracker::default();
            let t0 = Instant::now();
            assert_eq!(tracker.register(3, 4, t0), 1);
            assert_eq!(tracker.register(3, 4, t0 + Duration::from_millis(100)), 2);
            assert_eq!(tracker.register(3, 4, t0 + Duration::from_millis(200)), 3);
            assert_eq!(tracker.register(3, 4, t0 + Duration::from_millis(300)), 3);
        }

        #[test]
        fn slow_click_starts_over() {
            let mut tracker = ClickTracker::default();
            let t0 = Instant::now();
            tracker.register(3, 4, t0);
            assert_eq!(tracker.register(3, 4, t0 + Duration::from_millis(900)), 1);
        }

        #[test]
        fn click_elsewhere_starts_over() {
            let mut tracker = ClickTracker::default();
            let t0 = Instant::now();
            tracker.register(3, 4, t0);
            assert_eq!(tracker.register(7, 4, t0 + Duration::from_millis(50)), 1);
        }
    }
}
