// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use posematch::logging::set_verbose;
use posematch::{PoseRecord, VERSION, compare, skeleton_edge_similarity};
use posematch::{error, info, section, verbose, warn};

use crate::cli::args::ScoreArgs;

fn load_or_exit(path: &str) -> PoseRecord {
    PoseRecord::load(path).unwrap_or_else(|e| {
        error!("Error loading pose '{path}': {e}");
        process::exit(1);
    })
}

/// Score two poses and print the per-body-part breakdown.
pub fn run_score(args: &ScoreArgs) {
    set_verbose(args.verbose);
    section!("posematch {VERSION} 🚀 score");

    let first = load_or_exit(&args.first);
    let second = load_or_exit(&args.second);

    match compare(&first.landmarks, &second.landmarks) {
        Ok(report) => {
            for part in &report.parts {
                verbose!(
                    "  {:<10} {:.4}  (weight {:.1}, {} segments)",
                    part.part,
                    part.score,
                    part.weight,
                    part.pairs
                );
            }
            for part in &report.skipped {
                verbose!("  {part:<10} skipped (no confident segments)");
            }
            info!("similarity: {:.4}", report.score);
        }
        Err(e) => {
            warn!("{e}");
            info!("similarity: {:.4}", 0.0);
        }
    }

    verbose!(
        "skeleton edge similarity: {:.4}",
        skeleton_edge_similarity(&first.landmarks, &second.landmarks)
    );
}
