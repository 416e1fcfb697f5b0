// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Reference dataset and pose document loading.
//!
//! Both formats are decoded with one strict schema. A dataset file is a JSON
//! array of entries:
//!
//! ```json
//! [
//!   {
//!     "filename": "warrior_2.jpg",
//!     "landmarks": {
//!       "landmarks": [{"x": 312.4, "y": 188.0, "score": 0.98, "name": "0"}],
//!       "landmarks3D": []
//!     }
//!   }
//! ]
//! ```
//!
//! `keypoints` and `keypoints3D` are accepted as aliases for the landmark
//! fields. Any other document shape is rejected with [`PoseError::Dataset`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PoseError, Result};
use crate::landmarks::LandmarkSet;
use crate::skeleton::LANDMARK_COUNT;
use crate::verbose_warn;

/// Output of the pose-estimation step for one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    /// Image-plane landmarks, 33 in BlazePose order.
    #[serde(alias = "keypoints")]
    pub landmarks: LandmarkSet,
    /// World-space landmarks, if the model produced them.
    #[serde(
        rename = "landmarks3D",
        alias = "keypoints3D",
        default,
        skip_serializing_if = "LandmarkSet::is_empty"
    )]
    pub landmarks_3d: LandmarkSet,
}

impl PoseRecord {
    /// Decode a pose document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::Dataset`] if the document does not match the schema.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a pose document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::Io`] if the file cannot be read, or
    /// [`PoseError::Dataset`] if it does not match the schema.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// One reference pose to rank against.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    /// Image filename, returned by the ranker.
    pub filename: String,
    /// Image-plane landmarks.
    pub landmarks: LandmarkSet,
}

impl ReferenceEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(filename: impl Into<String>, landmarks: LandmarkSet) -> Self {
        Self {
            filename: filename.into(),
            landmarks,
        }
    }

    /// Whether the entry can take part in a meaningful comparison.
    ///
    /// Requires 33 landmarks with at least one non-zero confidence.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.landmarks.len() == LANDMARK_COUNT && self.landmarks.iter().any(|lm| lm.score > 0.0)
    }
}

#[derive(Deserialize)]
struct RawEntry {
    filename: String,
    #[serde(alias = "keypoints")]
    landmarks: PoseRecord,
}

impl From<RawEntry> for ReferenceEntry {
    fn from(raw: RawEntry) -> Self {
        Self::new(raw.filename, raw.landmarks.landmarks)
    }
}

/// Reference dataset owned by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<ReferenceEntry>,
}

impl Dataset {
    /// Create a dataset from entries.
    #[must_use]
    pub const fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// Decode a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::Dataset`] if the document does not match the schema.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::Io`] if the file cannot be read, or
    /// [`PoseError::Dataset`] if it does not match the schema.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let raw: Vec<RawEntry> = serde_json::from_reader(reader)
            .map_err(|e| PoseError::Dataset(format!("{}: {e}", path.display())))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: Vec<RawEntry>) -> Self {
        Self::new(raw.into_iter().map(ReferenceEntry::from).collect())
    }

    /// Drop entries that cannot produce a meaningful score.
    ///
    /// Ranking already scores such entries `0.0`; filtering them first keeps
    /// them out of the result list entirely.
    ///
    /// # Returns
    ///
    /// * The number of entries removed.
    pub fn retain_valid(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| {
            let valid = entry.is_valid();
            if !valid {
                verbose_warn!(
                    "Skipping dataset entry '{}': {} landmarks, expected {LANDMARK_COUNT} with non-zero confidence",
                    entry.filename,
                    entry.landmarks.len()
                );
            }
            valid
        });
        before - self.entries.len()
    }

    /// Borrow the entries in dataset order.
    #[must_use]
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Consume the dataset and return the entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ReferenceEntry> {
        self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ReferenceEntry>> for Dataset {
    fn from(entries: Vec<ReferenceEntry>) -> Self {
        Self::new(entries)
    }
}
