//! Domain model: item capabilities, commands, events and actions.

pub mod command;
pub mod event;
pub mod item;
pub mod key_action;

pub use command::Command;
pub use event::ListEvent;
pub use item::{Animated, Focusable, Item};
pub use key_action::ListAction;
