// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};
use posematch::config::DEFAULT_TOP_N;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Rank Options:
    --query, -q <QUERY>      Pose JSON file to analyse
    --dataset, -d <DATASET>  Reference dataset JSON file
    --top-n, -n <TOP_N>      Number of matches to return [default: 2]
    --parallel               Score dataset entries in parallel
    --skip-invalid           Drop malformed dataset entries before ranking
    --verbose <BOOL>         Show verbose output [default: true]

Examples:
    posematch rank --query pose.json --dataset dataset.json
    posematch rank -q pose.json -d dataset.json -n 5 --parallel
    posematch score a.json b.json
    posematch normalize pose.json > normalized.json"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank reference poses by similarity to a query pose
    Rank(RankArgs),
    /// Score the similarity of two poses
    Score(ScoreArgs),
    /// Print the normalized landmarks of a pose as JSON
    Normalize(NormalizeArgs),
}

/// Arguments for the rank command.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Pose JSON file to analyse
    #[arg(short, long)]
    pub query: String,

    /// Reference dataset JSON file
    #[arg(short, long)]
    pub dataset: String,

    /// Number of matches to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Score dataset entries in parallel
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Drop malformed dataset entries before ranking
    #[arg(long, default_value_t = false)]
    pub skip_invalid: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the score command.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// First pose JSON file
    pub first: String,

    /// Second pose JSON file
    pub second: String,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the normalize command.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Pose JSON file
    pub pose: String,

    /// Emit compact JSON on a single line
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}
