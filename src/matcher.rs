//! Favorites matching and deduplication.
//!
//! The favorites file is a comma-delimited export with a header row and a
//! per-row discriminator tag in the first field. `Circle` rows carry the
//! circle name in field 10, `UnKnown` rows in field 1; any other tag is
//! ignored. Names from qualifying rows are normalized and compared for
//! exact equality against the normalized names of the extracted circles.

use crate::error::MatchError;
use crate::models::CircleRecord;
use crate::normalize::normalize;
use itertools::Itertools;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};

const CIRCLE_TAG: &str = "Circle";
const UNKNOWN_TAG: &str = "UnKnown";
/// Name field index for rows tagged `Circle`.
const CIRCLE_NAME_FIELD: usize = 10;
/// Name field index for rows tagged `UnKnown`.
const UNKNOWN_NAME_FIELD: usize = 1;

/// Match extracted circles against a favorites file on disk.
///
/// The file handle is scoped to this call and closes on every exit path,
/// including mid-file read failures. An unreadable or malformed file is
/// fatal.
#[instrument(level = "info", skip(circles), fields(path = %favorites_path.display()))]
pub fn match_favorites(
    circles: &[CircleRecord],
    favorites_path: &Path,
) -> Result<Vec<CircleRecord>, MatchError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(favorites_path)?;
    match_rows(circles, reader)
}

/// Match extracted circles against favorites rows from any reader.
///
/// For every qualifying favorites row, appends **every** circle whose
/// normalized name equals the row's normalized name, not just the first.
/// A list holding duplicate-named circles therefore yields one match per
/// occurrence; collapsing identical records is [`dedupe`]'s job.
pub fn match_rows<R: Read>(
    circles: &[CircleRecord],
    mut reader: csv::Reader<R>,
) -> Result<Vec<CircleRecord>, MatchError> {
    // The header row is consumed by the reader and discarded, not validated.
    let mut matched = Vec::new();
    for row in reader.records() {
        let row = row?;
        let Some(tag) = row.get(0) else {
            continue;
        };
        let name_field = match tag {
            CIRCLE_TAG => row.get(CIRCLE_NAME_FIELD),
            UNKNOWN_TAG => row.get(UNKNOWN_NAME_FIELD),
            _ => {
                debug!(tag, "Ignoring favorites row with unhandled tag");
                continue;
            }
        };
        let Some(raw_name) = name_field else {
            debug!(tag, "Ignoring favorites row missing its name field");
            continue;
        };
        let name = normalize(raw_name);
        for circle in circles {
            if circle.normalized_circle_name == name {
                matched.push(circle.clone());
            }
        }
    }
    info!(count = matched.len(), "Matched favorite circles");
    Ok(matched)
}

/// Drop repeated matches, keeping first-seen order.
///
/// Duplicates are records structurally equal in all fields; two circles
/// sharing only a normalized name both survive.
pub fn dedupe(matches: Vec<CircleRecord>) -> Vec<CircleRecord> {
    matches.into_iter().unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_bytes())
    }

    fn circle(location: &str, name: &str) -> CircleRecord {
        CircleRecord::new(location.into(), name.into(), String::new())
    }

    /// A favorites row tagged `Circle` with the name in field 10.
    fn circle_row(name: &str) -> String {
        format!("Circle,,,,,,,,,,{name}")
    }

    #[test]
    fn test_circle_tag_reads_field_10() {
        let circles = [circle("A1", "Circle1"), circle("A2", "Circle2")];
        let data = format!("tag,f1,f2,f3,f4,f5,f6,f7,f8,f9,f10\n{}\n", circle_row("Circle1"));
        let matched = match_rows(&circles, reader(&data)).unwrap();
        assert_eq!(matched, vec![circle("A1", "Circle1")]);
    }

    #[test]
    fn test_unknown_tag_reads_field_1() {
        let circles = [circle("A1", "Circle1"), circle("A2", "Circle2")];
        let data = "tag,name\nUnKnown,Circle2\n";
        let matched = match_rows(&circles, reader(data)).unwrap();
        assert_eq!(matched, vec![circle("A2", "Circle2")]);
    }

    #[test]
    fn test_other_tags_are_ignored() {
        let circles = [circle("A1", "Circle1")];
        let data = "tag,name\nWork,Circle1\nAuthor,Circle1\n";
        let matched = match_rows(&circles, reader(data)).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_header_row_never_matches() {
        let circles = [circle("A1", "Circle1")];
        // A header that would match if it were treated as data
        let data = format!("{}\n", circle_row("Circle1"));
        let matched = match_rows(&circles, reader(&data)).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_names_compare_after_normalization() {
        // Full-width favorites entry matches the half-width site spelling
        let circles = [circle("A1", "ｻｰｸﾙ1")];
        let data = format!("tag\n{}\n", circle_row("サークル１"));
        let matched = match_rows(&circles, reader(&data)).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location, "A1");
    }

    #[test]
    fn test_one_row_matches_every_colliding_circle() {
        // Two distinct circles whose names collide once normalized
        let circles = [circle("A1", "サークル１"), circle("B2", "ｻｰｸﾙ1")];
        let data = format!("tag\n{}\n", circle_row("サークル１"));
        let matched = match_rows(&circles, reader(&data)).unwrap();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].location, "A1");
        assert_eq!(matched[1].location, "B2");
    }

    #[test]
    fn test_short_circle_row_is_skipped() {
        let circles = [circle("A1", "Circle1")];
        // Tagged Circle but no field 10
        let data = "tag\nCircle,Circle1\n";
        let matched = match_rows(&circles, reader(data)).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_dedupe_preserves_first_seen_order() {
        let a = circle("A1", "Circle1");
        let b = circle("B2", "Circle2");
        let c = circle("C3", "Circle3");
        let deduped = dedupe(vec![a.clone(), b.clone(), a.clone(), c.clone(), b.clone()]);
        assert_eq!(deduped, vec![a, b, c]);
    }

    #[test]
    fn test_dedupe_keeps_distinct_circles_with_colliding_names() {
        let a = circle("A1", "サークル１");
        let b = circle("B2", "ｻｰｸﾙ1");
        assert_eq!(a.normalized_circle_name, b.normalized_circle_name);
        let deduped = dedupe(vec![a.clone(), b.clone()]);
        assert_eq!(deduped, vec![a, b]);
    }
}
