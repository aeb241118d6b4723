//! List-level keyboard actions independent of key bindings.

/// User intent understood by the list.
///
/// The mapping from `crossterm::event::KeyEvent` to `ListAction` is handled by
/// [`KeyMap`](crate::config::KeyMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    /// Scroll down by the configured step. Default: j/↓/Ctrl+j/Ctrl+n
    Down,
    /// Scroll up by the configured step. Default: k/↑/Ctrl+k/Ctrl+p
    Up,
    /// Select the next focusable item. Default: J/Shift+↓
    DownOneItem,
    /// Select the previous focusable item. Default: K/Shift+↑
    UpOneItem,
    /// Scroll down half a viewport. Default: d
    HalfPageDown,
    /// Scroll up half a viewport. Default: u
    HalfPageUp,
    /// Scroll down a full viewport. Default: f/Space/Page Down
    PageDown,
    /// Scroll up a full viewport. Default: b/Page Up
    PageUp,
    /// Jump to the end. Default: G/End
    End,
    /// Jump to the start. Default: g/Home
    Home,
}
