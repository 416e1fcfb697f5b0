// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! BlazePose landmark layout, body-part groups, and skeleton edges.
//!
//! Every table here is fixed configuration. Algorithms index landmark sets
//! by these positions, never by landmark name.

use std::fmt;

/// Number of landmarks in a BlazePose landmark set.
pub const LANDMARK_COUNT: usize = 33;

/// Confidence threshold shared by the anchor check and segment filtering.
pub const MIN_CONFIDENCE: f64 = 0.5;

/// Left shoulder landmark index.
pub const LEFT_SHOULDER: usize = 11;
/// Right shoulder landmark index.
pub const RIGHT_SHOULDER: usize = 12;
/// Left hip landmark index.
pub const LEFT_HIP: usize = 23;
/// Right hip landmark index.
pub const RIGHT_HIP: usize = 24;

/// Anchors used to derive the normalization frame, in check order.
pub const ANCHORS: [usize; 4] = [LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_HIP, RIGHT_HIP];

/// Torso length, in normalized units, after normalization.
pub const NORMALIZED_TORSO_LENGTH: f64 = 100.0;

/// BlazePose skeleton structure (pairs of landmark indices).
pub const SKELETON: [[usize; 2]; 35] = [
    // face
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 7],
    [0, 4],
    [4, 5],
    [5, 6],
    [6, 8],
    [9, 10], // mouth
    // torso
    [11, 12],
    [11, 23],
    [12, 24],
    [23, 24],
    // left arm
    [11, 13],
    [13, 15],
    [15, 17],
    [15, 19],
    [15, 21],
    [17, 19],
    // right arm
    [12, 14],
    [14, 16],
    [16, 18],
    [16, 20],
    [16, 22],
    [18, 20],
    // left leg
    [23, 25],
    [25, 27],
    [27, 29],
    [27, 31],
    [29, 31],
    // right leg
    [24, 26],
    [26, 28],
    [28, 30],
    [28, 32],
    [30, 32],
];

/// Weighted body-part groups used by the similarity scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    /// Nose, eyes, ears, and mouth (0-10).
    Face,
    /// Shoulders and hips.
    Body,
    /// Left shoulder to left hand.
    LeftArm,
    /// Right shoulder to right hand.
    RightArm,
    /// Left hip to left foot.
    LeftLeg,
    /// Right hip to right foot.
    RightLeg,
}

impl BodyPart {
    /// All groups in scoring order.
    pub const ALL: [Self; 6] = [
        Self::Face,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Landmark index chain for this group. Consecutive entries form segments.
    #[must_use]
    pub const fn indices(&self) -> &'static [usize] {
        match self {
            Self::Face => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            Self::Body => &[LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_HIP, RIGHT_HIP],
            Self::LeftArm => &[11, 13, 15, 17, 19, 21],
            Self::RightArm => &[12, 14, 16, 18, 20, 22],
            Self::LeftLeg => &[23, 25, 27, 29, 31],
            Self::RightLeg => &[24, 26, 28, 30, 32],
        }
    }

    /// Importance weight. Weights are not required to sum to 1.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        match self {
            Self::Face => 0.1,
            Self::Body => 0.5,
            Self::LeftArm | Self::RightArm | Self::LeftLeg | Self::RightLeg => 1.0,
        }
    }

    /// Returns the label used in reports and CLI output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Body => "body",
            Self::LeftArm => "left_arm",
            Self::RightArm => "right_arm",
            Self::LeftLeg => "left_leg",
            Self::RightLeg => "right_leg",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
