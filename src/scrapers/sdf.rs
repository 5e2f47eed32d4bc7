//! SDF (Sound Sepher festival) circle list extractor.
//!
//! Each circle occupies a two-cell row: the first cell stacks the circle
//! name, event/category metadata and the placement on separate text lines,
//! the second cell holds the author. Rows with any other cell count are
//! circle cuts or section breaks.

use super::cell_text;
use crate::models::CircleRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::info;

/// Extract circle records from an SDF list page.
///
/// In the info cell, the first text line is the circle name and the last
/// is the placement; whatever sits between is event metadata and gets
/// discarded.
pub fn extract(document: &Html) -> Vec<CircleRecord> {
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut circles = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_selector).collect();
        if !is_circle_row(&cells) {
            continue;
        }
        let lines = text_lines(cells[0]);
        let (Some(name), Some(location)) = (lines.first(), lines.last()) else {
            continue;
        };
        circles.push(CircleRecord::new(
            location.clone(),
            name.clone(),
            cell_text(cells[1]),
        ));
    }

    info!(count = circles.len(), "Extracted SDF circle rows");
    circles
}

/// Only two-cell rows carry circle data.
pub fn is_circle_row(cells: &[ElementRef<'_>]) -> bool {
    cells.len() == 2
}

/// Non-empty trimmed text lines of the info cell, in document order.
fn text_lines(cell: ElementRef<'_>) -> Vec<String> {
    cell.text()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
