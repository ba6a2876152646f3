// src/core/html.rs
// Thin helpers over `scraper` so page specs read like the tables they walk.

use std::sync::OnceLock;

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

fn parse(css: &'static str) -> Selector {
    // Only ever called with the literal selectors below.
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}

macro_rules! selector {
    ($name:ident, $css:literal) => {
        pub fn $name() -> &'static Selector {
            static SEL: OnceLock<Selector> = OnceLock::new();
            SEL.get_or_init(|| parse($css))
        }
    };
}

selector!(table, "table");
selector!(tr, "tr");
selector!(td, "td");
selector!(font, "font");

/// All descendant text of `el`, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Raw descendant text of `el` (for marker checks across the whole table).
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table.select(tr()).collect()
}

pub fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.select(td()).collect()
}

/// Text of the `<font>` children nested in a cell, in document order.
pub fn nested_texts(cell: ElementRef<'_>) -> Vec<String> {
    cell.select(font()).map(text_of).collect()
}

/// `cells[i]` text, or "" when the row is short.
pub fn cell_text(cells: &[ElementRef<'_>], i: usize) -> String {
    cells.get(i).map(|c| text_of(*c)).unwrap_or_default()
}
