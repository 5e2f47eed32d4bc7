//! Checklist report rendering.
//!
//! The report is plain tab-separated text: a fixed header line, then one
//! line per matched circle sorted by normalized location. Rendering is
//! separated from printing so the sort/print contract stays testable.

use crate::models::CircleRecord;
use crate::normalize::normalize;

/// Render the matched circles as a tab-separated report.
///
/// Sorting keys on the normalized location first so that two
/// differently-encoded but equivalent locations sort adjacently, with the
/// remaining fields as tiebreakers so the output is identical regardless
/// of input order. An empty match list renders as just the header.
pub fn render(matches: &[CircleRecord]) -> String {
    let mut rows: Vec<&CircleRecord> = matches.iter().collect();
    rows.sort_by_cached_key(|circle| {
        (
            normalize(&circle.location),
            circle.location.clone(),
            circle.circle_name.clone(),
            circle.author.clone(),
        )
    });

    let mut out = String::from("location\tcircleName\tauthor\n");
    for circle in rows {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            circle.location, circle.circle_name, circle.author
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(location: &str, name: &str, author: &str) -> CircleRecord {
        CircleRecord::new(location.into(), name.into(), author.into())
    }

    #[test]
    fn test_empty_match_list_renders_header_only() {
        assert_eq!(render(&[]), "location\tcircleName\tauthor\n");
    }

    #[test]
    fn test_rows_sort_by_normalized_location() {
        // Full-width Ｂ２ sorts between A1 and C3 once normalized
        let matches = [
            circle("C3", "Circle3", ""),
            circle("Ｂ２", "Circle2", "Author2"),
            circle("A1", "Circle1", "Author1"),
        ];
        assert_eq!(
            render(&matches),
            "location\tcircleName\tauthor\n\
             A1\tCircle1\tAuthor1\n\
             Ｂ２\tCircle2\tAuthor2\n\
             C3\tCircle3\t\n"
        );
    }

    #[test]
    fn test_output_is_deterministic_across_input_orders() {
        let a = circle("A1", "Circle1", "");
        let b = circle("Ａ1", "Circle1", "");
        let c = circle("B2", "Circle2", "");
        let forward = render(&[a.clone(), b.clone(), c.clone()]);
        let backward = render(&[c, b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_raw_location_is_printed_not_normalized() {
        let report = render(&[circle("Ａ１", "Circle1", "")]);
        assert!(report.contains("Ａ１\tCircle1\t\n"));
        assert!(!report.contains("\nA1\t"));
    }
}
