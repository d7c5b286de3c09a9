//! Evaluation tolerances.
//!
//! All thresholds used by the success tests live here as named fields so
//! task designers can retune them per object scale instead of hunting for
//! inline constants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed tolerances for the per-step success tests.
///
/// The defaults are tuned for tabletop-scale objects (centimeters). No
/// dynamic adjustment is performed at runtime.
///
/// # Example
///
/// ```
/// use manip_eval::EvalParams;
///
/// // Larger objects may warrant a looser resting gap
/// let params = EvalParams::default().with_max_rest_gap(0.04);
/// assert!((params.max_rest_gap - 0.04).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalParams {
    /// Minimum horizontal displacement (m) for an object to count as moved.
    ///
    /// Objects drift slightly under physics settling and incidental nudges;
    /// anything below this is treated as stationary.
    pub min_move_dist: f64,

    /// Inward margin (m) applied to the target's horizontal footprint.
    ///
    /// Prevents edge-touching configurations from passing the xy test.
    pub xy_margin: f64,

    /// Maximum vertical gap (m) between the facing box surfaces for the
    /// source to count as resting on the target rather than floating.
    pub max_rest_gap: f64,

    /// Impulse-magnitude floor below which a contact is numerical noise.
    ///
    /// A disqualifying contact must carry strictly more impulse than this
    /// to veto placement.
    pub min_contact_impulse: f64,

    /// Consecutive affirmative grasp detections required before a grasp
    /// counts as stable. Single-frame detections are noisy.
    pub stable_grasp_steps: u32,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            min_move_dist: 0.03,      // 3 cm
            xy_margin: 0.005,         // 5 mm
            max_rest_gap: 0.02,       // 2 cm
            min_contact_impulse: 1e-6,
            stable_grasp_steps: 5,
        }
    }
}

impl EvalParams {
    /// Set the minimum move distance.
    #[must_use]
    pub const fn with_min_move_dist(mut self, dist: f64) -> Self {
        self.min_move_dist = dist;
        self
    }

    /// Set the xy inward margin.
    #[must_use]
    pub const fn with_xy_margin(mut self, margin: f64) -> Self {
        self.xy_margin = margin;
        self
    }

    /// Set the maximum resting gap.
    #[must_use]
    pub const fn with_max_rest_gap(mut self, gap: f64) -> Self {
        self.max_rest_gap = gap;
        self
    }

    /// Set the contact-impulse noise floor.
    #[must_use]
    pub const fn with_min_contact_impulse(mut self, impulse: f64) -> Self {
        self.min_contact_impulse = impulse;
        self
    }

    /// Set the number of consecutive detections for a stable grasp.
    #[must_use]
    pub const fn with_stable_grasp_steps(mut self, steps: u32) -> Self {
        self.stable_grasp_steps = steps;
        self
    }
}
