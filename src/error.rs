// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the pose similarity library.

use std::fmt;

/// Result type alias for pose operations.
pub type Result<T> = std::result::Result<T, PoseError>;

/// Main error type for the pose similarity library.
#[derive(Debug)]
pub enum PoseError {
    /// Landmark set does not have the expected number of landmarks.
    InsufficientKeypoints {
        /// Required landmark count.
        expected: usize,
        /// Landmark count actually supplied.
        found: usize,
    },
    /// An anchor landmark (shoulder or hip) is below the confidence threshold.
    LowConfidenceCore {
        /// Index of the first anchor that failed the check.
        index: usize,
        /// Confidence reported for that anchor.
        score: f64,
    },
    /// Malformed dataset or pose document.
    Dataset(String),
    /// Array with an unexpected shape.
    Shape(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientKeypoints { expected, found } => {
                write!(f, "Insufficient keypoints: expected {expected}, found {found}")
            }
            Self::LowConfidenceCore { index, score } => write!(
                f,
                "Low confidence core keypoint: landmark {index} has score {score:.2}, cannot normalize"
            ),
            Self::Dataset(msg) => write!(f, "Dataset error: {msg}"),
            Self::Shape(msg) => write!(f, "Shape error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PoseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PoseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Dataset(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PoseError::InsufficientKeypoints {
            expected: 33,
            found: 10,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient keypoints: expected 33, found 10"
        );

        let err = PoseError::LowConfidenceCore {
            index: 23,
            score: 0.25,
        };
        assert_eq!(
            err.to_string(),
            "Low confidence core keypoint: landmark 23 has score 0.25, cannot normalize"
        );

        let err = PoseError::Dataset("test".to_string());
        assert_eq!(err.to_string(), "Dataset error: test");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = PoseError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(PoseError::Shape("x".to_string()).source().is_none());
    }
}
