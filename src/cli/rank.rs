// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
use std::time::Instant;

use posematch::logging::set_verbose;
use posematch::utils::pluralize;
use posematch::{Dataset, MatchConfig, PoseRecord, VERSION, rank};
use posematch::{error, info, section, success, verbose, warn};

use crate::cli::args::RankArgs;

/// Rank a dataset against a query pose and print the best matches.
pub fn run_rank(args: &RankArgs) {
    set_verbose(args.verbose);
    section!("posematch {VERSION} 🚀 rank");

    let query = match PoseRecord::load(&args.query) {
        Ok(record) => record,
        Err(e) => {
            error!("Error loading query pose '{}': {e}", args.query);
            process::exit(1);
        }
    };
    verbose!(
        "query: {} ({})",
        args.query,
        pluralize(query.landmarks.len(), "landmark")
    );

    let mut dataset = match Dataset::load(&args.dataset) {
        Ok(d) => d,
        Err(e) => {
            error!("Error loading dataset '{}': {e}", args.dataset);
            process::exit(1);
        }
    };
    verbose!(
        "dataset: {} ({})",
        args.dataset,
        pluralize(dataset.len(), "entry")
    );

    if args.skip_invalid {
        let dropped = dataset.retain_valid();
        if dropped > 0 {
            warn!("Dropped {} from the dataset", pluralize(dropped, "invalid entry"));
        }
    }

    if dataset.is_empty() {
        warn!("Dataset is empty, nothing to rank.");
        return;
    }

    let config = MatchConfig::new()
        .with_top_n(args.top_n)
        .with_parallel(args.parallel);

    let start = Instant::now();
    let matches = rank(&query.landmarks, dataset.entries(), &config);
    let elapsed = start.elapsed();

    for (position, m) in matches.iter().enumerate() {
        info!("{:>3}. {:<40} {:.4}", position + 1, m.filename, m.score);
    }

    let ms = elapsed.as_secs_f64() * 1000.0;
    success!(
        "Found {} in {ms:.1}ms ({} scored)",
        pluralize(matches.len(), "match"),
        pluralize(dataset.len(), "entry")
    );
}
