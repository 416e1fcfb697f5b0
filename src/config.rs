// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Ranking configuration.
//!
//! This module defines [`MatchConfig`], which controls how a query pose is
//! ranked against a reference dataset.

/// Default number of matches returned by a ranking.
pub const DEFAULT_TOP_N: usize = 2;

/// Configuration for pose ranking.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use posematch::MatchConfig;
///
/// let config = MatchConfig::new().with_top_n(5).with_parallel(true);
/// assert_eq!(config.top_n, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Maximum number of matches to return.
    /// A value larger than the dataset returns every entry.
    pub top_n: usize,
    /// Score dataset entries on the rayon thread pool.
    /// The result is identical to sequential scoring.
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            parallel: false,
        }
    }
}

impl MatchConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of matches to return.
    ///
    /// # Arguments
    ///
    /// * `top_n` - The maximum number of matches.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Enable or disable parallel scoring.
    ///
    /// # Arguments
    ///
    /// * `parallel` - `true` to score entries on the rayon thread pool.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
