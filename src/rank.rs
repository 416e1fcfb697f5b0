// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose ranking against a reference dataset.
//!
//! Every entry is scored with [`calculate_pose_similarity`], so malformed or
//! low-confidence entries score `0.0` instead of failing the ranking. Ties
//! are broken by dataset index, lowest first.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::config::MatchConfig;
use crate::dataset::ReferenceEntry;
use crate::landmarks::LandmarkSet;
use crate::similarity::calculate_pose_similarity;

/// A ranked dataset entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseMatch {
    /// Position of the entry in the dataset.
    pub index: usize,
    /// Image filename of the entry.
    pub filename: String,
    /// Similarity to the query in `[0, 1]`.
    pub score: f64,
}

/// Rank dataset entries by similarity to a query pose.
///
/// # Arguments
///
/// * `query` - Landmarks of the pose being analysed.
/// * `dataset` - Reference entries, read-only.
/// * `config` - Number of results and whether to score in parallel.
///
/// # Returns
///
/// * Up to `config.top_n` matches, best first.
#[must_use]
pub fn rank(query: &LandmarkSet, dataset: &[ReferenceEntry], config: &MatchConfig) -> Vec<PoseMatch> {
    if config.top_n == 0 || dataset.is_empty() {
        return Vec::new();
    }

    let scores: Vec<f64> = if config.parallel {
        dataset
            .par_iter()
            .map(|entry| calculate_pose_similarity(query, &entry.landmarks))
            .collect()
    } else {
        dataset
            .iter()
            .map(|entry| calculate_pose_similarity(query, &entry.landmarks))
            .collect()
    };

    let mut order: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
    order.sort_by(best_first);
    order.truncate(config.top_n);

    order
        .into_iter()
        .map(|(index, score)| PoseMatch {
            index,
            filename: dataset[index].filename.clone(),
            score,
        })
        .collect()
}

/// Find the filenames of the `top_n` poses most similar to the query.
///
/// Returns every filename if `top_n` exceeds the dataset size, and an empty
/// list for an empty dataset. Never fails.
#[must_use]
pub fn find_similar_poses(
    query: &LandmarkSet,
    dataset: &[ReferenceEntry],
    top_n: usize,
) -> Vec<String> {
    rank(query, dataset, &MatchConfig::new().with_top_n(top_n))
        .into_iter()
        .map(|m| m.filename)
        .collect()
}

/// Descending score, then ascending dataset index. Total even with NaN.
fn best_first(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
}
