//! Per-episode diagnostic statistics.
//!
//! The tracker accumulates "ever true" flags across the steps of one
//! episode. Four of the five flags are monotonic: once set, they stay set
//! until the next episode reset. `src_on_target` is the exception and
//! always holds the latest instantaneous value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Instantaneous outcome flags for a single evaluation step.
///
/// This is the merge input for [`EpisodeStats::absorb`]; the evaluator also
/// embeds it in the step result it returns to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepFlags {
    /// The source object moved farther than every other object this step,
    /// and farther than the significance threshold.
    pub moved_correct_obj: bool,
    /// Some non-source object moved past the threshold and farther than the
    /// source this step.
    pub moved_wrong_obj: bool,
    /// The source object is grasped this step.
    pub is_src_obj_grasped: bool,
    /// The grasp has been held long enough to count as stable.
    pub consecutive_grasp: bool,
    /// The source passed both the geometric placement test and the contact
    /// filter this step.
    pub src_on_target: bool,
}

/// Accumulated diagnostic flags for one episode.
///
/// Owned by a [`TaskEvaluator`](crate::TaskEvaluator) and reinitialized on
/// every episode reset; values never carry across episodes.
///
/// # Example
///
/// ```
/// use manip_eval::{EpisodeStats, StepFlags};
///
/// let mut stats = EpisodeStats::default();
/// stats.absorb(&StepFlags {
///     moved_correct_obj: true,
///     src_on_target: true,
///     ..StepFlags::default()
/// });
/// stats.absorb(&StepFlags::default());
///
/// // Monotonic flag survives a regressing step; the placement flag does not.
/// assert!(stats.moved_correct_obj);
/// assert!(!stats.src_on_target);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpisodeStats {
    /// The source object was ever the primary mover.
    pub moved_correct_obj: bool,
    /// A non-source object was ever disturbed more than the source.
    pub moved_wrong_obj: bool,
    /// The source object was ever detected as grasped.
    pub is_src_obj_grasped: bool,
    /// A stable (consecutive) grasp was ever achieved.
    pub consecutive_grasp: bool,
    /// The source is on the target *right now* (latest step, not monotonic).
    pub src_on_target: bool,
}

impl EpisodeStats {
    /// Reinitialize all flags to `false`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Merge one step's instantaneous flags into the episode record.
    ///
    /// OR-accumulates everything except `src_on_target`, which is
    /// overwritten with the step value.
    pub fn absorb(&mut self, step: &StepFlags) {
        self.moved_correct_obj |= step.moved_correct_obj;
        self.moved_wrong_obj |= step.moved_wrong_obj;
        self.is_src_obj_grasped |= step.is_src_obj_grasped;
        self.consecutive_grasp |= step.consecutive_grasp;
        self.src_on_target = step.src_on_target;
    }
}
