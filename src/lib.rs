//! Virtualized list widget for ratatui (vlist)
//!
//! A scrollable list of heterogeneous items that renders lazily, caches each
//! item's rendered lines, scrolls from the top or anchored at the bottom, and
//! supports mouse text selection with word and paragraph granularity.
//!
//! The core ([`list`], [`view_state`], [`selection`], [`store`]) is pure and
//! synchronous; [`app`] and the binary are the impure shell around it.

pub mod app;
pub mod config;
pub mod list;
pub mod logging;
pub mod model;
pub mod selection;
pub mod store;
pub mod view_state;
pub mod widgets;

// Re-export main loop integration
pub mod integration;

pub use list::VirtualList;

#[cfg(test)]
mod test_harness;
