// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose normalization.
//!
//! Maps a landmark set into a canonical frame: the shoulder midpoint moves to
//! the origin and the shoulder-to-hip distance becomes
//! [`NORMALIZED_TORSO_LENGTH`]. Rotation is left untouched, so the same pose
//! rotated in the image plane will not normalize to the same coordinates.

use crate::error::{PoseError, Result};
use crate::landmarks::{Landmark, LandmarkSet};
use crate::skeleton::{
    ANCHORS, LANDMARK_COUNT, LEFT_HIP, LEFT_SHOULDER, MIN_CONFIDENCE, NORMALIZED_TORSO_LENGTH,
    RIGHT_HIP, RIGHT_SHOULDER,
};
use crate::utils::{euclidean_distance, midpoint};

/// Normalize a landmark set for translation and scale.
///
/// Every landmark, including anchors and low-confidence points, is shifted by
/// the shoulder midpoint and multiplied by `100 / torso_length`. A zero-length
/// torso uses a scale of 1, so the result is only translated.
///
/// # Arguments
///
/// * `landmarks` - A BlazePose landmark set.
///
/// # Returns
///
/// * A new landmark set; the input is not modified.
///
/// # Errors
///
/// * [`PoseError::InsufficientKeypoints`] if the set does not hold exactly 33 landmarks.
/// * [`PoseError::LowConfidenceCore`] if a shoulder or hip is below [`MIN_CONFIDENCE`].
pub fn normalize(landmarks: &LandmarkSet) -> Result<LandmarkSet> {
    if landmarks.len() != LANDMARK_COUNT {
        return Err(PoseError::InsufficientKeypoints {
            expected: LANDMARK_COUNT,
            found: landmarks.len(),
        });
    }

    let pts = landmarks.as_slice();
    if let Some(&index) = ANCHORS.iter().find(|&&i| pts[i].score < MIN_CONFIDENCE) {
        return Err(PoseError::LowConfidenceCore {
            index,
            score: pts[index].score,
        });
    }

    let center = midpoint(&pts[LEFT_SHOULDER], &pts[RIGHT_SHOULDER]);
    let hip_center = midpoint(&pts[LEFT_HIP], &pts[RIGHT_HIP]);
    let torso_length = euclidean_distance(center, hip_center);

    // A subnormal torso would overflow the scale.
    let scale = Some(NORMALIZED_TORSO_LENGTH / torso_length)
        .filter(|s| torso_length > 0.0 && s.is_finite())
        .unwrap_or(1.0);

    Ok(pts
        .iter()
        .map(|lm: &Landmark| {
            lm.with_position((lm.x - center.0) * scale, (lm.y - center.1) * scale)
        })
        .collect())
}
