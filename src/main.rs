//! # circlematch
//!
//! Match a doujin event's published circle list against your favorites
//! file and print where your circles are placed.
//!
//! ## Usage
//!
//! ```sh
//! circlematch <circle-list-url> <favorites-csv>
//! ```
//!
//! ## Architecture
//!
//! One synchronous pass, start to finish:
//! 1. **Dispatch**: pick the site extractor from the URL (first matching
//!    pattern wins; unknown sites abort the run)
//! 2. **Fetch**: download the circle list page once, decoding the charset
//!    from the raw bytes
//! 3. **Extract**: pull circle records out of the site's table layout
//! 4. **Match**: intersect with the favorites file by NFKC-normalized name
//! 5. **Report**: dedupe, sort by normalized location, print TSV
//!
//! Exit status: 0 on success (an empty report is success), 1 on any fatal
//! run error, 2 on usage errors.

use clap::Parser;
use scraper::Html;
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod fetch;
mod matcher;
mod models;
mod normalize;
mod report;
mod scrapers;

use cli::Cli;
use error::MatchError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();

    let report = match run(&args).await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    print!("{report}");

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

/// Run the whole pipeline and return the rendered report.
///
/// No partial report survives a failure: every fatal error propagates out
/// before anything is rendered.
async fn run(args: &Cli) -> Result<String, MatchError> {
    let url = args.circle_list_url.as_str();

    // Dispatch before fetching so an unsupported site never costs a
    // network round trip.
    let site = scrapers::select_site(url)?;
    info!(%url, ?site, "Selected site layout");

    let body = fetch::fetch_page(url).await?;
    let document = Html::parse_document(&body);

    let circles = site.extract(&document);
    info!(count = circles.len(), "Extracted circle list");

    let matched = matcher::match_favorites(&circles, &args.favorites_file)?;
    let matched = matcher::dedupe(matched);
    info!(count = matched.len(), "Circles on the checklist");

    Ok(report::render(&matched))
}
