// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark data model.
//!
//! A [`LandmarkSet`] is the detection result for one image: an ordered list
//! of [`Landmark`]s in BlazePose order. Construction never validates the
//! length; [`crate::normalize`] is where a malformed set is rejected.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{PoseError, Result};

/// A single detected body point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate in source image units.
    pub x: f64,
    /// Y coordinate in source image units.
    pub y: f64,
    /// Detection confidence. Upstream models may report slightly above 1.0.
    pub score: f64,
    /// Stable identifier, usually the landmark index or a part label.
    #[serde(default)]
    pub name: String,
}

impl Landmark {
    /// Create a new landmark.
    #[must_use]
    pub fn new(x: f64, y: f64, score: f64, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            score,
            name: name.into(),
        }
    }

    /// Returns the `(x, y)` position.
    #[must_use]
    pub const fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns a copy moved to a new position, keeping score and name.
    #[must_use]
    pub fn with_position(&self, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            score: self.score,
            name: self.name.clone(),
        }
    }
}

/// Ordered landmarks for one detected pose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Wrap landmarks without validating the count.
    #[must_use]
    pub const fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Build a set from an `(N, 3)` array of `[x, y, score]` rows.
    ///
    /// This is the per-pose layout of a keypoint model's output tensor.
    /// Landmark names are set to the row index.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::Shape`] if the array does not have exactly 3 columns.
    pub fn from_array(data: ArrayView2<'_, f64>) -> Result<Self> {
        let (_, cols) = data.dim();
        if cols != 3 {
            return Err(PoseError::Shape(format!(
                "expected (N, 3) landmark array, got (N, {cols})"
            )));
        }

        let landmarks = data
            .outer_iter()
            .enumerate()
            .map(|(i, row)| Landmark::new(row[0], row[1], row[2], i.to_string()))
            .collect();

        Ok(Self { landmarks })
    }

    /// Convert to an `(N, 3)` array of `[x, y, score]` rows.
    #[must_use]
    pub fn to_array(&self) -> Array2<f64> {
        let mut data = Array2::zeros((self.landmarks.len(), 3));
        for (mut row, lm) in data.outer_iter_mut().zip(&self.landmarks) {
            row[0] = lm.x;
            row[1] = lm.y;
            row[2] = lm.score;
        }
        data
    }

    /// Number of landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Check if the set has no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Landmark at a given anatomical index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Iterate over landmarks in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }

    /// Borrow the landmarks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Consume the set and return the landmarks.
    #[must_use]
    pub fn into_inner(self) -> Vec<Landmark> {
        self.landmarks
    }
}

impl From<Vec<Landmark>> for LandmarkSet {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LandmarkSet {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.landmarks.iter()
    }
}
