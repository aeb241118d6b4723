//! Ready-made items for the demo binary.
//!
//! - [`TextItem`]: focusable, word-wrapped paragraph with a focus marker
//! - [`HeaderItem`]: non-focusable section title
//! - [`SpinnerItem`]: animated status line

pub mod header;
pub mod spinner;
pub mod text;

pub use header::HeaderItem;
pub use spinner::SpinnerItem;
pub use text::TextItem;

use crate::model::Item;

/// Heterogeneous demo item.
pub type DynItem = Box<dyn Item + Send>;

/// Split a document into items.
///
/// Paragraphs are separated by blank lines. A paragraph whose first line
/// starts with `#` becomes a [`HeaderItem`] (the `#`s are stripped), one that
/// starts with `~` becomes a [`SpinnerItem`], everything else a [`TextItem`].
/// Identifiers are the paragraph's index.
pub fn parse_document(source: &str) -> Vec<DynItem> {
    let mut items: Vec<DynItem> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    for line in source.lines().chain(std::iter::once("")) {
        if !line.trim().is_empty() {
            paragraph.push(line);
            continue;
        }
        if paragraph.is_empty() {
            continue;
        }
        let id = items.len().to_string();
        let text = paragraph.join("\n");
        let item: DynItem = if let Some(title) = text.strip_prefix('#') {
            Box::new(HeaderItem::new(id, title.trim_start_matches('#').trim()))
        } else if let Some(label) = text.strip_prefix('~') {
            Box::new(SpinnerItem::new(id, label.trim()))
        } else {
            Box::new(TextItem::new(id, text))
        };
        items.push(item);
        paragraph.clear();
    }
    items
}

/// Document shown when the demo is started without a file.
pub const SAMPLE_DOCUMENT: &str = "\
# vlist

A virtualized list renders only what it must. The first pass stops once the \
viewport is full; the rest is rendered by a deferred continuation.

Scroll with j/k or the mouse wheel, move between items with J/K, jump with \
g/G. Press y to dim the selected paragraph.

~ Rendering the rest of the list

# Selection

Drag with the left button to select text. Double-click selects a word, \
triple-click a paragraph. The selection is printed when you quit with q.

Decorative glyphs such as the focus marker ▌ are never selected.

# Tail

Press G to anchor the list at the bottom. New content then appears from below \
while the view stays put.
";
