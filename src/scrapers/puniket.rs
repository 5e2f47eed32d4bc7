//! ぷにケット (puniket.com) circle list extractor.
//!
//! Seven-column rows: circle name, pen name, placement, circle URL,
//! twitter, pixiv, attended event. Heading rows leave the placement cell
//! blank.

use super::cell_text;
use crate::models::CircleRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::info;

/// Extract circle records from a ぷにケット list page.
pub fn extract(document: &Html) -> Vec<CircleRecord> {
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut circles = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_selector).collect();
        if cells.len() != 7 || is_heading_row(&cells) {
            continue;
        }
        circles.push(CircleRecord::new(
            cell_text(cells[2]),
            cell_text(cells[0]),
            cell_text(cells[1]),
        ));
    }

    info!(count = circles.len(), "Extracted ぷにケット circle rows");
    circles
}

/// Heading rows have an empty placement cell.
pub fn is_heading_row(cells: &[ElementRef<'_>]) -> bool {
    cells.get(2).is_none_or(|cell| cell_text(*cell).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body><table>
            <tr><td colspan="7">ぷにケット サークル一覧</td></tr>
            <tr>
                <td>サークル名</td><td>ペンネーム</td><td></td>
                <td>URL</td><td>twitter</td><td>pixiv</td><td>イベント</td>
            </tr>
            <tr>
                <td>Circle1</td><td>Author1</td><td>A-01</td>
                <td></td><td></td><td></td><td>ぷにケット45</td>
            </tr>
            <tr>
                <td>サークル２</td><td>作家２</td><td>B-02</td>
                <td>https://c2.example</td><td>@c2</td><td></td><td>ぷにケット45</td>
            </tr>
        </table></body></html>"#;

    #[test]
    fn test_extract_maps_columns() {
        let document = Html::parse_document(PAGE);
        let circles = extract(&document);
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].circle_name, "Circle1");
        assert_eq!(circles[0].author, "Author1");
        assert_eq!(circles[0].location, "A-01");
        assert_eq!(circles[1].location, "B-02");
    }

    #[test]
    fn test_heading_and_title_rows_are_skipped() {
        let document = Html::parse_document(PAGE);
        // 4 rows, 2 conform: the title row has 1 cell, the heading row has
        // an empty placement cell.
        assert_eq!(extract(&document).len(), 2);
    }

    #[test]
    fn test_is_heading_row_predicate() {
        let fragment = Html::parse_fragment(
            "<table><tr>\
                <td>サークル名</td><td>ペンネーム</td><td>  </td>\
                <td></td><td></td><td></td><td></td>\
             </tr><tr>\
                <td>Circle1</td><td>Author1</td><td>A-01</td>\
                <td></td><td></td><td></td><td></td>\
             </tr></table>",
        );
        let td = Selector::parse("td").unwrap();
        let cells: Vec<_> = fragment.select(&td).collect();
        assert!(is_heading_row(&cells[0..7]));
        assert!(!is_heading_row(&cells[7..14]));
    }
}
