//! List behaviour options.

use crate::view_state::types::Direction;
use serde::Deserialize;

/// Default number of lines moved per wheel notch or Up/Down key.
pub const DEFAULT_SCROLL_STEP: usize = 5;

/// Construction options for [`VirtualList`](crate::list::VirtualList).
///
/// Deserializable from the `[list]` table of the config file; every field is
/// optional there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
    /// Blank lines inserted between consecutive items.
    pub gap: usize,
    /// Wrap item navigation around at either end.
    pub wrap_navigation: bool,
    /// Initial render direction.
    pub direction: Direction,
    /// Whether mouse wheel and selection events are handled.
    pub enable_mouse: bool,
    /// Whether the list starts with keyboard focus.
    pub focused: bool,
    /// Lines moved per wheel notch or Up/Down key.
    pub scroll_step: usize,
    /// Identifier of the item selected on load.
    pub selected_item: Option<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            gap: 0,
            wrap_navigation: false,
            direction: Direction::Forward,
            enable_mouse: false,
            focused: true,
            scroll_step: DEFAULT_SCROLL_STEP,
            selected_item: None,
        }
    }
}

impl ListConfig {
    /// Set the gap between items.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Set the render direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Enable wrap-around item navigation.
    pub fn with_wrap_navigation(mut self) -> Self {
        self.wrap_navigation = true;
        self
    }

    /// Enable mouse handling.
    pub fn with_mouse(mut self) -> Self {
        self.enable_mouse = true;
        self
    }

    /// Set initial keyboard focus.
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Pre-select an item by identifier.
    pub fn with_selected_item(mut self, id: impl Into<String>) -> Self {
        self.selected_item = Some(id.into());
        self
    }

    /// Set the wheel/key scroll step (at least one line).
    pub fn with_scroll_step(mut self, step: usize) -> Self {
        self.scroll_step = step.max(1);
        self
    }
}
