//! View-state layer: rendering, caching and windowing.
//!
//! # Module Structure
//!
//! - `types`: Direction and inclusive line ranges
//! - `cache`: RenderCache - per-item memoized renders with buffer positions
//! - `buffer`: RenderedBuffer - flattened lines with a line-offset index
//! - `layout`: visible range and offset clamping math
//! - `scroll`: ScrollState - offset + direction with clamped mutators
//! - `renderer`: Renderer - lazy first pass, continuation and tail rebuilds

pub mod buffer;
pub mod cache;
pub mod layout;
pub mod renderer;
pub mod scroll;
pub mod types;

pub use buffer::RenderedBuffer;
pub use cache::{RenderCache, RenderedItem};
pub use renderer::{RenderProgress, Renderer};
pub use scroll::ScrollState;
pub use types::{Direction, LineRange};
