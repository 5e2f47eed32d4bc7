//! BS祭 (bs-fes) circle list extractor.
//!
//! Six-column rows: genre, circle name, reading, pen name, site info,
//! placement. The table repeats a heading row per section, recognizable
//! by the genre label in the first cell or an empty circle name cell.

use super::cell_text;
use crate::models::CircleRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::info;

/// First-cell label of the repeated heading rows.
const HEADING_LABEL: &str = "配置ジャンル";

/// Extract circle records from a BS祭 list page.
pub fn extract(document: &Html) -> Vec<CircleRecord> {
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut circles = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_selector).collect();
        if cells.len() != 6 || is_heading_row(&cells) {
            continue;
        }
        circles.push(CircleRecord::new(
            cell_text(cells[5]),
            cell_text(cells[1]),
            cell_text(cells[3]),
        ));
    }

    info!(count = circles.len(), "Extracted BS祭 circle rows");
    circles
}

/// Heading rows repeat the genre label in cell 0 or leave cell 1 blank.
pub fn is_heading_row(cells: &[ElementRef<'_>]) -> bool {
    cells.first().is_some_and(|cell| cell_text(*cell) == HEADING_LABEL)
        || cells.get(1).is_none_or(|cell| cell_text(*cell).is_empty())
}
