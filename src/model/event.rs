//! Input events delivered to the list by the host loop.

use crossterm::event::{KeyEvent, MouseEvent};

/// One discrete input for `VirtualList::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Key press.
    Key(KeyEvent),
    /// Mouse wheel, press, drag or release. Coordinates are terminal
    /// coordinates; the list subtracts its own origin.
    Mouse(MouseEvent),
    /// Periodic animation tick.
    Tick,
    /// Deferred continuation of a lazy render pass.
    ContinueRender {
        /// Render generation the continuation belongs to. Stale generations
        /// are ignored.
        generation: u64,
    },
}
