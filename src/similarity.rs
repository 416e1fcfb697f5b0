// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Weighted pose similarity.
//!
//! Both poses are normalized, split into the six [`BodyPart`] groups, and
//! compared segment by segment with cosine similarity. Group scores are
//! combined with the fixed group weights into a single value in `[0, 1]`.
//!
//! | Function | Failure policy |
//! |----------|----------------|
//! | [`compare`] | returns the normalization error |
//! | [`calculate_pose_similarity`] | logs the error and scores `0.0` |
//! | [`skeleton_edge_similarity`] | never fails, skips unusable edges |

use crate::error::Result;
use crate::landmarks::LandmarkSet;
use crate::normalize::normalize;
use crate::skeleton::{BodyPart, SKELETON};
use crate::vectorize::{Vector2, extract_vectors};
use crate::verbose_warn;

/// Score for one body-part group that took part in a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartScore {
    /// Body-part group.
    pub part: BodyPart,
    /// Mean rescaled cosine similarity over compared segments, in `[0, 1]`.
    pub score: f64,
    /// Group weight applied to `score`.
    pub weight: f64,
    /// Number of segment pairs that were compared.
    pub pairs: usize,
}

/// Breakdown of a weighted pose comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityReport {
    /// Weighted mean over contributing groups, or `0.0` if none contributed.
    pub score: f64,
    /// Groups that had vectors on both sides, in [`BodyPart::ALL`] order.
    pub parts: Vec<PartScore>,
    /// Groups skipped because one side produced no vectors.
    pub skipped: Vec<BodyPart>,
}

impl SimilarityReport {
    /// Score for a single group, if it contributed.
    #[must_use]
    pub fn part(&self, part: BodyPart) -> Option<&PartScore> {
        self.parts.iter().find(|p| p.part == part)
    }

    /// Sum of weights of contributing groups.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.parts.iter().map(|p| p.weight).sum()
    }
}

/// Cosine similarity between two vectors.
///
/// Returns `0.0` if either vector has zero or non-finite magnitude.
#[must_use]
pub fn cosine_similarity(v1: Vector2, v2: Vector2) -> f64 {
    match (v1.unit(), v2.unit()) {
        (Some(u1), Some(u2)) => u1.dot(&u2).clamp(-1.0, 1.0),
        _ => 0.0,
    }
}

/// Mean of `(cos + 1) / 2` over positionally paired vectors.
#[allow(clippy::cast_precision_loss)]
fn part_score(v1: &[Vector2], v2: &[Vector2]) -> Option<(f64, usize)> {
    let pairs = v1.len().min(v2.len());
    if pairs == 0 {
        return None;
    }
    let sum: f64 = v1
        .iter()
        .zip(v2)
        .map(|(&a, &b)| f64::midpoint(cosine_similarity(a, b), 1.0))
        .sum();
    Some((sum / pairs as f64, pairs))
}

/// Compare two poses and return the per-group breakdown.
///
/// # Errors
///
/// Returns the first normalization error, see [`normalize`].
pub fn compare(landmarks1: &LandmarkSet, landmarks2: &LandmarkSet) -> Result<SimilarityReport> {
    let normalized1 = normalize(landmarks1)?;
    let normalized2 = normalize(landmarks2)?;

    let mut parts = Vec::with_capacity(BodyPart::ALL.len());
    let mut skipped = Vec::new();

    for part in BodyPart::ALL {
        let vectors1 = extract_vectors(&normalized1, part.indices());
        let vectors2 = extract_vectors(&normalized2, part.indices());

        match part_score(&vectors1, &vectors2) {
            Some((score, pairs)) => parts.push(PartScore {
                part,
                score,
                weight: part.weight(),
                pairs,
            }),
            None => skipped.push(part),
        }
    }

    let total_weight: f64 = parts.iter().map(|p| p.weight).sum();
    let score = if total_weight > 0.0 {
        parts.iter().map(|p| p.score * p.weight).sum::<f64>() / total_weight
    } else {
        0.0
    };

    Ok(SimilarityReport {
        score,
        parts,
        skipped,
    })
}

/// Similarity between two poses in `[0, 1]`.
///
/// A pose that cannot be normalized (wrong landmark count, low-confidence
/// shoulders or hips) scores `0.0` instead of failing, so one bad dataset
/// entry cannot abort a ranking.
#[must_use]
pub fn calculate_pose_similarity(landmarks1: &LandmarkSet, landmarks2: &LandmarkSet) -> f64 {
    match compare(landmarks1, landmarks2) {
        Ok(report) => report.score,
        Err(e) => {
            verbose_warn!("Error calculating pose similarity: {e}");
            0.0
        }
    }
}

/// Mean cosine similarity over all skeleton edges, in `[-1, 1]`.
///
/// Unweighted and computed on raw coordinates. Edges with an index outside
/// either set or a zero-length or overflowing segment are skipped. Returns `0.0` when no
/// edge can be compared.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn skeleton_edge_similarity(landmarks1: &LandmarkSet, landmarks2: &LandmarkSet) -> f64 {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for [i, j] in SKELETON {
        let (Some(a1), Some(b1), Some(a2), Some(b2)) = (
            landmarks1.get(i),
            landmarks1.get(j),
            landmarks2.get(i),
            landmarks2.get(j),
        ) else {
            continue;
        };
        let v1 = Vector2::between(a1, b1);
        let v2 = Vector2::between(a2, b2);
        if v1.unit().is_none() || v2.unit().is_none() {
            continue;
        }
        sum += cosine_similarity(v1, v2);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
