//! Host-loop glue between [`Command`] trees and the list.
//!
//! The list never runs its own follow-up work. These helpers execute a
//! command tree synchronously and feed the resulting events back, which is
//! what the demo loop, the tests and the benches need. An async host would
//! run `Task`s on its executor instead.

use crate::list::VirtualList;
use crate::model::{Command, Item, ListEvent};
use std::collections::VecDeque;
use tracing::warn;

/// Upper bound on events processed by one [`drain`] call.
pub const MAX_DRAIN_STEPS: usize = 10_000;

/// Execute a command tree, returning the events it produced in order.
///
/// `Batch` children are run in their listed order, which is one valid
/// ordering of an unordered group.
pub fn run_command(command: Command) -> Vec<ListEvent> {
    let mut events = Vec::new();
    collect(command, &mut events);
    events
}

fn collect(command: Command, events: &mut Vec<ListEvent>) {
    match command {
        Command::Batch(children) | Command::Sequence(children) => {
            for child in children {
                collect(child, events);
            }
        }
        Command::Message(event) => events.push(event),
        Command::Task(task) => events.extend(task()),
    }
}

/// Run `command` and every command the resulting events produce until the
/// list is quiescent. Returns the number of events delivered.
pub fn drain<T: Item>(list: &mut VirtualList<T>, command: Option<Command>) -> usize {
    let mut queue: VecDeque<ListEvent> = command.map(run_command).unwrap_or_default().into();
    let mut delivered = 0;
    while let Some(event) = queue.pop_front() {
        if delivered == MAX_DRAIN_STEPS {
            warn!(pending = queue.len() + 1, "drain step limit reached");
            break;
        }
        delivered += 1;
        if let Some(next) = list.update(event) {
            queue.extend(run_command(next));
        }
    }
    delivered
}
