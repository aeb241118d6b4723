//! Drawing the visible window.

use super::VirtualList;
use crate::model::Item;
use crate::selection::render::{extract_text, highlight};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::Widget;

impl<T: Item> VirtualList<T> {
    /// Styled lines currently in the viewport, top to bottom.
    pub fn visible_lines(&self) -> &[Line<'static>] {
        match self.visible_range() {
            Some(range) => self.renderer.buffer().styled(range),
            None => &[],
        }
    }

    /// The viewport as styled text.
    pub fn view_text(&self) -> Text<'static> {
        Text::from(self.visible_lines().to_vec())
    }

    /// Draw the viewport into a fresh buffer the size of the list.
    pub fn view(&self) -> Buffer {
        let (width, height) = self.size();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Widget::render(self, area, &mut buf);
        buf
    }

    /// Text under the mouse selection, trimmed. Empty without a selection.
    pub fn selected_text(&self) -> String {
        if !self.selection.has_selection() {
            return String::new();
        }
        let (width, height) = self.size();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        self.draw_lines(area, &mut buf);
        extract_text(&buf, area, self.selection.rect())
    }

    fn draw_lines(&self, area: Rect, buf: &mut Buffer) {
        let rows = self.visible_lines().iter().take(usize::from(area.height));
        for (y, line) in (area.y..).zip(rows) {
            buf.set_line(area.x, y, line, area.width);
        }
    }
}

/// Visible lines are drawn from the top of `area` in both directions; the
/// selection highlight goes on top.
impl<T: Item> Widget for &VirtualList<T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        self.draw_lines(area, buf);
        if self.selection.has_selection() {
            highlight(buf, area, self.selection.rect(), self.selection_style);
        }
    }
}
