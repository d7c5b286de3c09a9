//! Grasp persistence tracking.
//!
//! Grasp detection is an external capability and its per-frame output is
//! noisy: a finger brushing the object can register as a one-frame grasp.
//! The tracker therefore requires several consecutive affirmative
//! detections before calling a grasp stable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counts consecutive per-step grasp detections.
///
/// Any non-grasp step resets the count to zero.
///
/// # Example
///
/// ```
/// use manip_eval::GraspTracker;
///
/// let mut tracker = GraspTracker::default();
/// for _ in 0..5 {
///     tracker.observe(true);
/// }
/// assert!(tracker.is_stable(5));
///
/// tracker.observe(false);
/// assert_eq!(tracker.consecutive(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraspTracker {
    consecutive: u32,
}

impl GraspTracker {
    /// Create a tracker with a zeroed count.
    #[must_use]
    pub const fn new() -> Self {
        Self { consecutive: 0 }
    }

    /// Record one step's grasp detection and return the updated count.
    pub fn observe(&mut self, grasped: bool) -> u32 {
        if grasped {
            self.consecutive += 1;
        } else {
            self.consecutive = 0;
        }
        self.consecutive
    }

    /// Current count of consecutive grasp detections.
    #[must_use]
    pub const fn consecutive(&self) -> u32 {
        self.consecutive
    }

    /// Whether the grasp has persisted for at least `required_steps`.
    #[must_use]
    pub const fn is_stable(&self, required_steps: u32) -> bool {
        self.consecutive >= required_steps
    }

    /// Zero the count (episode reset).
    pub fn reset(&mut self) {
        self.consecutive = 0;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_consecutive_grasps() {
        let mut tracker = GraspTracker::new();
        for k in 1..=7 {
            assert_eq!(tracker.observe(true), k);
        }
    }

    #[test]
    fn test_any_miss_resets_to_zero() {
        let mut tracker = GraspTracker::new();
        for pattern in [
            vec![true, false],
            vec![true, true, true, false],
            vec![false],
        ] {
            tracker.reset();
            for grasped in pattern {
                tracker.observe(grasped);
            }
            assert_eq!(tracker.consecutive(), 0);
        }
    }

    #[test]
    fn test_stability_threshold() {
        let mut tracker = GraspTracker::new();
        for _ in 0..4 {
            tracker.observe(true);
            assert!(!tracker.is_stable(5));
        }
        tracker.observe(true);
        assert!(tracker.is_stable(5));

        // Counting past the threshold keeps it stable
        tracker.observe(true);
        assert!(tracker.is_stable(5));
    }

    #[test]
    fn test_regrasp_starts_from_scratch() {
        let mut tracker = GraspTracker::new();
        for _ in 0..5 {
            tracker.observe(true);
        }
        tracker.observe(false);
        tracker.observe(true);
        assert_eq!(tracker.consecutive(), 1);
        assert!(!tracker.is_stable(5));
    }
}
