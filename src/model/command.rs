//! Follow-up actions returned by list mutators.
//!
//! Mutators never block. Work that must happen after a mutation (item
//! initialisation, focus changes, the deferred continuation render) is
//! returned as a [`Command`] tree for the host loop to execute. Results come
//! back as [`ListEvent`]s fed into `VirtualList::update`.

use super::event::ListEvent;
use std::fmt;

/// Boxed side-effect closure produced by an item.
pub type Task = Box<dyn FnOnce() -> Option<ListEvent> + Send + 'static>;

/// Follow-up action tree.
pub enum Command {
    /// Children may run in any order.
    Batch(Vec<Command>),
    /// Children must run strictly in order.
    Sequence(Vec<Command>),
    /// Post an event back to the list.
    Message(ListEvent),
    /// Run a closure, feeding its optional result back as an event.
    Task(Task),
}

impl Command {
    /// Command that posts `event` back to the list.
    pub fn message(event: ListEvent) -> Self {
        Self::Message(event)
    }

    /// Command wrapping a closure.
    pub fn task<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<ListEvent> + Send + 'static,
    {
        Self::Task(Box::new(f))
    }

    /// Unordered group. `None`s are dropped; a single survivor is returned
    /// as-is and an empty group collapses to `None`.
    pub fn batch<I>(commands: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Command>>,
    {
        collapse(commands, Self::Batch)
    }

    /// Ordered group, collapsed like [`Command::batch`].
    pub fn sequence<I>(commands: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Command>>,
    {
        collapse(commands, Self::Sequence)
    }

    /// Number of leaf commands in this tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Batch(children) | Self::Sequence(children) => {
                children.iter().map(Command::leaf_count).sum()
            }
            Self::Message(_) | Self::Task(_) => 1,
        }
    }

    /// Whether the tree contains a message matching `predicate`.
    pub fn contains_message<P>(&self, predicate: P) -> bool
    where
        P: Fn(&ListEvent) -> bool + Copy,
    {
        match self {
            Self::Batch(children) | Self::Sequence(children) => {
                children.iter().any(|c| c.contains_message(predicate))
            }
            Self::Message(event) => predicate(event),
            Self::Task(_) => false,
        }
    }
}

fn collapse<I, F>(commands: I, wrap: F) -> Option<Command>
where
    I: IntoIterator<Item = Option<Command>>,
    F: FnOnce(Vec<Command>) -> Command,
{
    let mut children: Vec<Command> = commands.into_iter().flatten().collect();
    match children.len() {
        0 => None,
        1 => children.pop(),
        _ => Some(wrap(children)),
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batch(children) => f.debug_tuple("Batch").field(children).finish(),
            Self::Sequence(children) => f.debug_tuple("Sequence").field(children).finish(),
            Self::Message(event) => f.debug_tuple("Message").field(event).finish(),
            Self::Task(_) => f.write_str("Task(..)"),
        }
    }
}
