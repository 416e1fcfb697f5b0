// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

mod cli;

use clap::Parser;

use cli::args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Rank(args) => cli::rank::run_rank(args),
        Commands::Score(args) => cli::score::run_score(args),
        Commands::Normalize(args) => cli::normalize::run_normalize(args),
    }
}
