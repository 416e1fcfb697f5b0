// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for pose ranking and scoring.
//!
//! This module contains the command-line interface logic, including argument parsing
//! and the `rank`, `score`, and `normalize` command implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Normalize command.
pub mod normalize;

/// Ranking logic.
pub mod rank;

/// Pairwise scoring.
pub mod score;
