//! Error taxonomy for a matching run.
//!
//! Every variant is fatal: the run aborts with a user-facing message and no
//! report is printed. Non-conforming table rows and unrecognized favorite
//! tags are not errors at all; extractors and the matcher skip them
//! silently.

use thiserror::Error;

/// Fatal failures of a matching run.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The circle list URL matched none of the known site layouts.
    #[error("unsupported circle list site: {0}")]
    UnsupportedSite(String),

    /// Network or transport failure while fetching the circle list page.
    /// Never retried.
    #[error("failed to fetch circle list page: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The favorites file could not be opened or read as delimited rows.
    #[error("failed to read favorites file: {0}")]
    Favorites(#[from] csv::Error),
}
