// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Body-part vectorization.
//!
//! Turns a chain of landmark indices into directed bone segments. Segments
//! with a low-confidence endpoint are dropped rather than reported, since
//! partially visible limbs are expected.

use crate::landmarks::{Landmark, LandmarkSet};
use crate::skeleton::MIN_CONFIDENCE;

/// A 2D direction between two landmarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    /// X component.
    pub dx: f64,
    /// Y component.
    pub dy: f64,
}

impl Vector2 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Vector from `from` to `to`.
    #[must_use]
    pub fn between(from: &Landmark, to: &Landmark) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.dx.mul_add(other.dx, self.dy * other.dy)
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Unit vector in the same direction.
    ///
    /// `None` for a zero-length vector or one whose length is not finite.
    #[must_use]
    pub fn unit(&self) -> Option<Self> {
        let m = self.magnitude();
        (m > 0.0 && m.is_finite()).then(|| Self::new(self.dx / m, self.dy / m))
    }
}

/// Extract segment vectors along a landmark index chain.
///
/// For each consecutive pair `(indices[i], indices[i + 1])` the vector
/// `p2 - p1` is kept only if both endpoints have a score above
/// [`MIN_CONFIDENCE`]. An index outside the set counts as a missing
/// endpoint.
///
/// # Arguments
///
/// * `landmarks` - Landmark set, normally already normalized.
/// * `indices` - Landmark index chain, e.g. [`crate::BodyPart::indices`].
///
/// # Returns
///
/// * Vectors in chain order. Empty when no segment qualifies.
#[must_use]
pub fn extract_vectors(landmarks: &LandmarkSet, indices: &[usize]) -> Vec<Vector2> {
    indices
        .windows(2)
        .filter_map(|pair| {
            let p1 = landmarks.get(pair[0])?;
            let p2 = landmarks.get(pair[1])?;
            (p1.score > MIN_CONFIDENCE && p2.score > MIN_CONFIDENCE)
                .then(|| Vector2::between(p1, p2))
        })
        .collect()
}
