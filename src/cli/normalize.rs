// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use posematch::{PoseRecord, normalize};
use posematch::error;

use crate::cli::args::NormalizeArgs;

/// Print the normalized landmarks of a pose document as JSON.
///
/// World landmarks are passed through unchanged.
pub fn run_normalize(args: &NormalizeArgs) {
    let record = match PoseRecord::load(&args.pose) {
        Ok(record) => record,
        Err(e) => {
            error!("Error loading pose '{}': {e}", args.pose);
            process::exit(1);
        }
    };

    let landmarks = match normalize(&record.landmarks) {
        Ok(landmarks) => landmarks,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let normalized = PoseRecord {
        landmarks,
        landmarks_3d: record.landmarks_3d,
    };
    let json = if args.compact {
        serde_json::to_string(&normalized)
    } else {
        serde_json::to_string_pretty(&normalized)
    };

    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Error encoding normalized pose: {e}");
            process::exit(1);
        }
    }
}
