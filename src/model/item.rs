//! Item capabilities consumed by the list.
//!
//! The list never inspects item content. It asks an item for its rendered
//! view, tells it about size changes, and queries optional capabilities
//! (focus, animation) through accessor methods that return trait objects.

use super::command::Command;
use crossterm::event::KeyEvent;
use ratatui::text::Text;

/// A unit of content shown by [`VirtualList`](crate::list::VirtualList).
///
/// Identifiers must be unique within one list and stable for the lifetime of
/// the item. The list caches the output of [`Item::view`] per identifier, so an
/// item must only change its view through a call the list observes
/// (`update_item`, a forwarded key, a focus change, an animation tick or a
/// resize).
pub trait Item {
    /// Stable identifier of this item.
    fn id(&self) -> &str;

    /// Rendered view. Its height is the number of lines (at least one).
    fn view(&self) -> Text<'static>;

    /// Propagate the list size to the item.
    fn set_size(&mut self, width: u16, height: u16) -> Option<Command>;

    /// Called once when the item enters the list.
    fn init(&mut self) -> Option<Command> {
        None
    }

    /// Key press forwarded while this item is selected and the key is not
    /// bound to a list action.
    fn handle_key(&mut self, _key: KeyEvent) -> Option<Command> {
        None
    }

    /// Focus capability, if the item can take keyboard focus.
    ///
    /// Items without it are skipped by navigation (section headers,
    /// separators).
    fn focusable(&self) -> Option<&dyn Focusable> {
        None
    }

    /// Mutable focus capability.
    fn focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        None
    }

    /// Animation capability.
    fn animated(&self) -> Option<&dyn Animated> {
        None
    }

    /// Mutable animation capability.
    fn animated_mut(&mut self) -> Option<&mut dyn Animated> {
        None
    }
}

/// Capability of items that can hold keyboard focus.
pub trait Focusable {
    /// Give input focus to the item.
    fn focus(&mut self) -> Option<Command>;

    /// Take input focus away from the item.
    fn blur(&mut self) -> Option<Command>;

    /// Whether the item currently holds focus.
    fn is_focused(&self) -> bool;
}

/// Capability of items that change on periodic animation ticks.
pub trait Animated {
    /// Whether the item currently needs ticks.
    fn is_animating(&self) -> bool;

    /// Advance one animation frame.
    fn tick(&mut self) -> Option<Command>;
}

impl<I: Item + ?Sized> Item for Box<I> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn view(&self) -> Text<'static> {
        (**self).view()
    }

    fn set_size(&mut self, width: u16, height: u16) -> Option<Command> {
        (**self).set_size(width, height)
    }

    fn init(&mut self) -> Option<Command> {
        (**self).init()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        (**self).handle_key(key)
    }

    fn focusable(&self) -> Option<&dyn Focusable> {
        (**self).focusable()
    }

    fn focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        (**self).focusable_mut()
    }

    fn animated(&self) -> Option<&dyn Animated> {
        (**self).animated()
    }

    fn animated_mut(&mut self) -> Option<&mut dyn Animated> {
        (**self).animated_mut()
    }
}

/// Whether an item can take part in keyboard navigation.
pub fn is_focusable<T: Item + ?Sized>(item: &T) -> bool {
    item.focusable().is_some()
}

/// Whether an item currently wants animation ticks.
pub fn is_animating<T: Item + ?Sized>(item: &T) -> bool {
    item.animated().is_some_and(|a| a.is_animating())
}
