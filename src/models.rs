//! Data model for extracted circle records.
//!
//! A [`CircleRecord`] is one exhibitor entry scraped from an event's circle
//! list page. Records are plain values: created once during extraction,
//! immutable afterwards, and independently owned by whichever collection
//! holds them.

use crate::normalize::normalize;

/// One exhibitor entry at one event.
///
/// The field names mirror the report columns. `normalized_circle_name` is
/// always derived from `circle_name` at construction time via
/// [`normalize`], so equality comparison never needs to re-normalize.
///
/// `Eq` and `Hash` cover all four fields; deduplication keys on full
/// structural equality so two distinct circles that happen to share a
/// normalized name are never collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CircleRecord {
    /// The assigned spot/table identifier, e.g. `あ01a` or a section+number
    /// composite depending on the source layout.
    pub location: String,
    /// The display name as published by the source.
    pub circle_name: String,
    /// NFKC form of `circle_name`; used only for comparison, never printed.
    pub normalized_circle_name: String,
    /// Creator/pen name; empty when the source layout has no author column.
    pub author: String,
}

impl CircleRecord {
    /// Build a record, computing the normalized name eagerly.
    pub fn new(location: String, circle_name: String, author: String) -> Self {
        let normalized_circle_name = normalize(&circle_name);
        Self {
            location,
            circle_name,
            normalized_circle_name,
            author,
        }
    }
}
