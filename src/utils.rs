// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility functions for the pose similarity library

use crate::landmarks::Landmark;

/// Midpoint between two landmarks
///
/// # Arguments
///
/// * `a` - First landmark
/// * `b` - Second landmark
///
/// # Returns
///
/// `(x, y)` halfway between `a` and `b`
#[must_use]
pub fn midpoint(a: &Landmark, b: &Landmark) -> (f64, f64) {
    (f64::midpoint(a.x, b.x), f64::midpoint(a.y, b.y))
}

/// Euclidean distance between two points
#[must_use]
pub fn euclidean_distance(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    (p1.0 - p2.0).hypot(p1.1 - p2.1)
}

/// Format a count with a pluralized noun, e.g. `1 match`, `3 matches`.
#[must_use]
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        return format!("{count} {word}");
    }
    let plural = if word.ends_with('s') || word.ends_with("ch") || word.ends_with("sh") {
        format!("{word}es")
    } else if word.ends_with('y') && !word.ends_with("ey") && !word.ends_with("ay") {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    };
    format!("{count} {plural}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let a = Landmark::new(0.0, 0.0, 1.0, "a");
        let b = Landmark::new(10.0, -4.0, 1.0, "b");
        assert_eq!(midpoint(&a, &b), (5.0, -2.0));
    }

    #[test]
    fn test_euclidean_distance() {
        assert!((euclidean_distance((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 1e-12);
        assert!(euclidean_distance((1.0, 1.0), (1.0, 1.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "match"), "1 match");
        assert_eq!(pluralize(3, "match"), "3 matches");
        assert_eq!(pluralize(0, "entry"), "0 entries");
        assert_eq!(pluralize(2, "pose"), "2 poses");
    }
}
