//! Command-line interface definitions.
//!
//! Two required positional arguments; anything else makes `clap` print
//! usage guidance and exit with status 2, which keeps the usage-error path
//! distinguishable from fatal run errors (status 1).

use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Match an event's published circle list against your favorites file.
///
/// # Examples
///
/// ```sh
/// circlematch https://www.comitia.co.jp/history/148list.html favorites.csv
/// ```
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// URL of the event's circle list page
    pub circle_list_url: Url,

    /// Path to the favorites CSV file
    pub favorites_file: PathBuf,
}
