//! Bounding-box placement test.
//!
//! Geometric half of the success judgment: is the source's center inside
//! the target's horizontal footprint, and resting on (or very near) the
//! target's top surface? Works entirely on the frame-0 world AABB half
//! extents cached in the episode context.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{EpisodeContext, EvalParams, Pose};

/// Outcome of the placement test, with the measured quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementCheck {
    /// Horizontal center offset is inside the margin-shrunk target
    /// footprint.
    pub xy_within: bool,
    /// Source center is above the target center, with at most the allowed
    /// gap between the facing box surfaces.
    pub z_within: bool,
    /// Horizontal distance between the two centers (m).
    pub horizontal_dist: f64,
    /// Vertical gap between the source's bottom face and the target's top
    /// face (m). Negative means the cached boxes interpenetrate.
    pub rest_gap: f64,
}

impl PlacementCheck {
    /// Whether the source is geometrically resting on the target.
    #[must_use]
    pub const fn is_resting(&self) -> bool {
        self.xy_within && self.z_within
    }
}

/// Run the bounding-box placement test for the current source/target poses.
#[must_use]
pub fn check_placement(
    context: &EpisodeContext,
    source_pose: &Pose,
    target_pose: &Pose,
    params: &EvalParams,
) -> PlacementCheck {
    let src_half = context.source_half_extents();
    let tgt_half = context.target_half_extents();

    let offset = source_pose.position - target_pose.position;

    let horizontal_dist = offset.xy().norm();
    let xy_within = horizontal_dist <= tgt_half.xy().norm() - params.xy_margin;

    let rest_gap = offset.z - tgt_half.z - src_half.z;
    let z_within = offset.z > 0.0 && rest_gap <= params.max_rest_gap;

    PlacementCheck {
        xy_within,
        z_within,
        horizontal_dist,
        rest_gap,
    }
}
