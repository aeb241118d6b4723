//! Viewport windowing over the rendered buffer.
//!
//! Converts a scroll offset into the inclusive range of buffer lines shown in
//! the viewport. Line 0 of the buffer is always the first item; the direction
//! only decides which end the offset is measured from.

use super::types::{Direction, LineRange};

/// Largest valid offset: `max(0, total_height - viewport_height)`.
pub fn max_offset(total_height: usize, viewport_height: usize) -> usize {
    total_height.saturating_sub(viewport_height)
}

/// Clamp `offset` into `[0, max_offset(total_height, viewport_height)]`.
pub fn clamp_offset(offset: usize, total_height: usize, viewport_height: usize) -> usize {
    offset.min(max_offset(total_height, viewport_height))
}

/// Inclusive buffer line range visible in the viewport.
///
/// - Forward: `start = offset`, `end = min(offset + h - 1, total - 1)`
/// - Backward: `end = total - 1 - offset` (saturating),
///   `start = end - h + 1` (saturating)
///
/// Returns `None` for a zero-height viewport or an empty buffer.
pub fn visible_range(
    offset: usize,
    viewport_height: usize,
    direction: Direction,
    total_height: usize,
) -> Option<LineRange> {
    if viewport_height == 0 || total_height == 0 {
        return None;
    }
    let last = total_height - 1;
    let (start, end) = match direction {
        Direction::Forward => {
            let end = (offset + viewport_height - 1).min(last);
            (offset.min(end), end)
        }
        Direction::Backward => {
            let end = last.saturating_sub(offset);
            (end.saturating_sub(viewport_height - 1), end)
        }
    };
    Some(LineRange { start, end })
}
