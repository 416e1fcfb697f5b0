// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # posematch
//!
//! Pose similarity engine for BlazePose landmarks. Given the 33 landmarks a
//! pose-estimation model produced for a photo, `posematch` scores how closely
//! the pose matches each entry of a reference dataset and returns the best
//! matches.
//!
//! ## How scoring works
//!
//! 1. **Normalize** - each pose is moved so the shoulder midpoint sits at the
//!    origin and scaled so the shoulder-to-hip distance is 100. Poses whose
//!    shoulders or hips have confidence below 0.5 are rejected.
//! 2. **Vectorize** - six body-part chains (face, torso, both arms, both legs)
//!    become lists of bone vectors, skipping low-confidence segments.
//! 3. **Score** - matching vectors are compared with cosine similarity,
//!    rescaled to `[0, 1]`, averaged per body part, and combined with fixed
//!    weights (face 0.1, torso 0.5, limbs 1.0).
//! 4. **Rank** - every dataset entry is scored against the query and the
//!    top-N filenames are returned.
//!
//! Normalization corrects translation and scale only. A pose rotated in the
//! image plane scores lower than the same pose upright.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use posematch::{Dataset, PoseRecord, find_similar_poses};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let query = PoseRecord::load("query.json")?;
//!     let dataset = Dataset::load("dataset.json")?;
//!
//!     for filename in find_similar_poses(&query.landmarks, dataset.entries(), 3) {
//!         println!("{filename}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Rank a pose against a dataset
//! posematch rank --query pose.json --dataset dataset.json --top-n 3
//!
//! # Score two poses with a per-body-part breakdown
//! posematch score a.json b.json
//!
//! # Print normalized landmarks
//! posematch normalize pose.json
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`landmarks`] | [`Landmark`] and [`LandmarkSet`] data model |
//! | [`skeleton`] | BlazePose indices, [`BodyPart`] groups and weights |
//! | [`normalize`](mod@normalize) | Translation and scale normalization |
//! | [`vectorize`] | Body-part segment vectors |
//! | [`similarity`] | Weighted cosine similarity and reports |
//! | [`rank`](mod@rank) | Top-N ranking against a dataset |
//! | [`dataset`] | JSON dataset and pose document loading |
//! | [`config`] | [`MatchConfig`] ranking options |
//! | [`error`] | Error types ([`PoseError`], [`Result`]) |

// Modules
pub mod config;
pub mod dataset;
pub mod error;
pub mod landmarks;
pub mod logging;
pub mod normalize;
pub mod rank;
pub mod similarity;
pub mod skeleton;
pub mod utils;
pub mod vectorize;

// Re-export main types for convenience
pub use config::MatchConfig;
pub use dataset::{Dataset, PoseRecord, ReferenceEntry};
pub use error::{PoseError, Result};
pub use landmarks::{Landmark, LandmarkSet};
pub use normalize::normalize;
pub use rank::{PoseMatch, find_similar_poses, rank};
pub use similarity::{
    PartScore, SimilarityReport, calculate_pose_similarity, compare, cosine_similarity,
    skeleton_edge_similarity,
};
pub use skeleton::{BodyPart, LANDMARK_COUNT, MIN_CONFIDENCE};
pub use vectorize::{Vector2, extract_vectors};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
