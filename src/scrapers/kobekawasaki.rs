//! 神戸かわさき造船これくしょん (kobe-kancolle.info) circle list extractor.
//!
//! The list table keeps all data rows under one `<tbody>` with no heading
//! or divider rows. Columns: space section, space number, circle name,
//! circle name kana, pen name, pen name kana, space count. The printed
//! location is the section and number concatenated.

use super::cell_text;
use crate::models::CircleRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::info;

/// Extract circle records from a 神戸かわさき list page.
pub fn extract(document: &Html) -> Vec<CircleRecord> {
    let row_selector = Selector::parse("table tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut circles = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_selector).collect();
        let [section, number, name, _kana, author, ..] = cells.as_slice() else {
            continue;
        };
        circles.push(CircleRecord::new(
            format!("{}{}", cell_text(*section), cell_text(*number)),
            cell_text(*name),
            cell_text(*author),
        ));
    }

    info!(count = circles.len(), "Extracted 神戸かわさき circle rows");
    circles
}
