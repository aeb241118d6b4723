//! Applying a selection rectangle to drawn cells.
//!
//! The rectangle is in area-relative screen coordinates with inclusive
//! endpoints. Each row it covers gets a column span (the whole row for
//! interior rows of a multi-row selection); that span is intersected with the
//! row's real-text bounds so trailing padding is never selected.

use super::glyphs;
use super::SelectionRect;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

/// Restyle the selected cells of `area` with `style`.
pub fn highlight(buf: &mut Buffer, area: Rect, rect: SelectionRect, style: Style) {
    for row in 0..area.height {
        let Some((start, end)) = covered_columns(buf, area, rect, row) else {
            continue;
        };
        for col in grapheme_columns(buf, area, row) {
            if col < start || col > end {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                if !glyphs::is_ignored(cell.symbol()) {
                    cell.set_style(style);
                }
            }
        }
    }
}

/// Plain text of the selected cells of `area`.
///
/// Every row the rectangle covers ends with a line break, rows without real
/// text included, and the result is trimmed.
pub fn extract_text(buf: &Buffer, area: Rect, rect: SelectionRect) -> String {
    let (min, max) = rect.canonical();
    let mut text = String::new();
    for row in 0..area.height {
        let line = i32::from(row);
        if line < min.line || line > max.line {
            continue;
        }
        if let Some((start, end)) = covered_columns(buf, area, rect, row) {
            for col in grapheme_columns(buf, area, row) {
                if col < start || col > end {
                    continue;
                }
                if let Some(cell) = buf.cell((area.x + col, area.y + row)) {
                    if !glyphs::is_ignored(cell.symbol()) {
                        text.push_str(cell.symbol());
                    }
                }
            }
        }
        text.push('\n');
    }
    text.trim().to_owned()
}

/// Selected columns of `row` (inclusive), already clipped to real text.
fn covered_columns(buf: &Buffer, area: Rect, rect: SelectionRect, row: u16) -> Option<(u16, u16)> {
    if area.width == 0 {
        return None;
    }
    let (sel_start, sel_end) = selection_columns(rect, i32::from(row), area.width)?;
    let (text_start, text_end) = text_columns(buf, area, row)?;
    let start = sel_start.max(i32::from(text_start));
    let end = sel_end.min(i32::from(text_end));
    if start > end {
        return None;
    }
    Some((u16::try_from(start).ok()?, u16::try_from(end).ok()?))
}

/// Columns the rectangle covers on `line`, before clipping to text.
fn selection_columns(rect: SelectionRect, line: i32, width: u16) -> Option<(i32, i32)> {
    let (min, max) = rect.canonical();
    if line < min.line || line > max.line {
        return None;
    }
    let last = i32::from(width) - 1;
    let bounds = if min.line == max.line {
        (min.col, max.col)
    } else if line == min.line {
        (min.col, last)
    } else if line == max.line {
        (0, max.col)
    } else {
        (0, last)
    };
    Some(bounds)
}

/// First and last column of `row` holding real text: a visible, non-ignored
/// grapheme or a cell with a background colour.
fn text_columns(buf: &Buffer, area: Rect, row: u16) -> Option<(u16, u16)> {
    let mut bounds: Option<(u16, u16)> = None;
    for col in grapheme_columns(buf, area, row) {
        let Some(cell) = buf.cell((area.x + col, area.y + row)) else {
            continue;
        };
        if is_text(cell) {
            bounds = Some(bounds.map_or((col, col), |(first, _)| (first, col)));
        }
    }
    bounds
}

fn is_text(cell: &Cell) -> bool {
    let symbol = cell.symbol();
    let visible = symbol
        .chars()
        .next()
        .is_some_and(|c| !c.is_whitespace() && c != '\0');
    (visible && !glyphs::is_ignored(symbol)) || cell.bg != Color::Reset
}

/// Area-relative columns of `row` where a grapheme starts, skipping the
/// cells hidden behind wide graphemes.
fn grapheme_columns(buf: &Buffer, area: Rect, row: u16) -> Vec<u16> {
    let mut columns = Vec::with_capacity(usize::from(area.width));
    let mut col = 0;
    while col < area.width {
        columns.push(col);
        let width = buf
            .cell((area.x + col, area.y + row))
            .map_or(1, |cell| cell.symbol().width().max(1));
        col = col.saturating_add(u16::try_from(width).unwrap_or(1));
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Stylize;
    use ratatui::text::Line;

    fn screen(lines: &[&str], width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, lines.len() as u16);
        let mut buf = Buffer::empty(area);
        for (row, line) in lines.iter().enumerate() {
            buf.set_line(0, row as u16, &Line::raw(*line), width);
        }
        buf
    }

    fn rect(start_col: i32, start_line: i32, end_col: i32, end_line: i32) -> SelectionRect {
        SelectionRect::new(start_col, start_line, end_col, end_line)
    }

    mod extraction {
        use super::*;

        #[test]
        fn single_line_selection() {
            let buf = screen(&["hello world"], 20);
            assert_eq!(extract_text(&buf, buf.area, rect(0, 0, 4, 0)), "hello");
        }

        #[test]
        fn reversed_rectangle_matches_canonical() {
            let buf = screen(&["hello world", "second line"], 20);
            let forward = extract_text(&buf, buf.area, rect(2, 0, 8, 1));
            let reversed = extract_text(&buf, buf.area, rect(8, 1, 2, 0));
            assert_eq!(forward, reversed);
        }

        #[test]
        fn multi_line_takes_full_interior_rows() {
            let buf = screen(&["alpha beta", "gamma delta", "epsilon zeta"], 20);
            let text = extract_text(&buf, buf.area, rect(6, 0, 6, 2));
            assert_eq!(text, "beta\ngamma delta\nepsilon");
        }

        #[test]
        fn trailing_padding_is_never_selected() {
            let buf = screen(&["short"], 20);
            assert_eq!(extract_text(&buf, buf.area, rect(0, 0, 19, 0)), "short");
        }

        #[test]
        fn blank_rows_keep_paragraph_breaks() {
            let buf = screen(&["one", "", "two"], 10);
            assert_eq!(extract_text(&buf, buf.area, rect(0, 0, 9, 2)), "one\n\ntwo");
        }

        #[test]
        fn ignored_glyphs_are_skipped() {
            let buf = screen(&["│ text │"], 10);
            assert_eq!(extract_text(&buf, buf.area, rect(0, 0, 9, 0)), "text");
        }

        #[test]
        fn wide_graphemes_are_copied_once() {
            let buf = screen(&["日本 ok"], 10);
            assert_eq!(extract_text(&buf, buf.area, rect(0, 0, 9, 0)), "日本 ok");
        }

        #[test]
        fn rows_outside_area_are_ignored() {
            let buf = screen(&["abc"], 10);
            assert_eq!(extract_text(&buf, buf.area, rect(0, -3, 9, -1)), "");
        }
    }

    mod highlighting {
        use super::*;

        #[test]
        fn selected_text_cells_take_the_style() {
            let mut buf = screen(&["hello world"], 15);
            let style = Style::new().bg(Color::Cyan);
            let area = buf.area;
            highlight(&mut buf, area, rect(6, 0, 14, 0), style);

            assert_eq!(buf[(5, 0)].bg, Color::Reset);
            assert_eq!(buf[(6, 0)].bg, Color::Cyan);
            assert_eq!(buf[(10, 0)].bg, Color::Cyan);
            assert_eq!(buf[(11, 0)].bg, Color::Reset, "padding stays unstyled");
        }

        #[test]
        fn styled_background_counts_as_text() {
            let area = Rect::new(0, 0, 6, 1);
            let mut buf = Buffer::empty(area);
            buf.set_line(0, 0, &Line::from(vec!["ab".into(), "  ".on_blue()]), 6);
            let (start, end) = text_columns(&buf, area, 0).expect("has text");
            assert_eq!((start, end), (0, 3));
        }

        #[test]
        fn respects_area_origin() {
            let mut buf = Buffer::empty(Rect::new(0, 0, 12, 3));
            buf.set_line(2, 1, &Line::raw("inner"), 10);
            let area = Rect::new(2, 1, 10, 2);
            highlight(&mut buf, area, rect(0, 0, 1, 0), Style::new().bg(Color::Cyan));
            assert_eq!(buf[(2, 1)].bg, Color::Cyan);
            assert_eq!(buf[(3, 1)].bg, Color::Cyan);
            assert_eq!(buf[(4, 1)].bg, Color::Reset);
        }
    }
}
