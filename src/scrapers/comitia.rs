//! COMITIA circle list extractor.
//!
//! COMITIA publishes its circle list as one large grid table inside the
//! page's `<main>` element. Data rows carry the spot number in the first
//! cell and the circle name in the second; the list has no author column.
//! Between blocks the table inserts divider rows whose single cell spans
//! the full width via a `colspan` attribute.

use super::cell_text;
use crate::models::CircleRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// Extract circle records from a COMITIA list page.
///
/// Block divider rows are skipped; every other row maps cell 0 to the
/// location and cell 1 to the circle name. The author field is always
/// empty because the source has none.
pub fn extract(document: &Html) -> Vec<CircleRecord> {
    let row_selector = Selector::parse("main table tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut circles = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_selector).collect();
        if is_block_divider(&cells) {
            debug!("Skipping block divider row");
            continue;
        }
        let (Some(location), Some(name)) = (cells.first(), cells.get(1)) else {
            continue;
        };
        circles.push(CircleRecord::new(
            cell_text(*location),
            cell_text(*name),
            String::new(),
        ));
    }

    info!(count = circles.len(), "Extracted COMITIA circle rows");
    circles
}

/// A block divider row has a single cell spanning the table via `colspan`.
pub fn is_block_divider(cells: &[ElementRef<'_>]) -> bool {
    cells
        .first()
        .is_some_and(|cell| cell.value().attr("colspan").is_some())
}
