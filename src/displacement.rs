//! Displacement classification against settle baselines.
//!
//! Answers two distinct questions each step, comparing horizontal (xy)
//! positions against the settle baselines: "did the agent primarily move
//! the right object" and "did it disturb something else more". The two are
//! deliberately not mutually exclusive.

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ActorId, EpisodeContext, EvalError, Pose, Result};

/// Displacement distances and derived flags for one step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplacementReport {
    /// Horizontal distance the source moved from its baseline (m).
    pub source_move_dist: f64,
    /// Horizontal move distance of every non-source object (m).
    pub other_move_dists: Vec<f64>,
    /// Source moved past the threshold and strictly farther than every
    /// other object.
    pub moved_correct_obj: bool,
    /// Some other object moved past the threshold and farther than the
    /// source.
    pub moved_wrong_obj: bool,
}

impl DisplacementReport {
    /// Largest non-source move distance, if any other objects are tracked.
    #[must_use]
    pub fn max_other_move_dist(&self) -> Option<f64> {
        self.other_move_dists
            .iter()
            .copied()
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }
}

fn xy_dist(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Classify this step's object displacements.
///
/// `poses` must contain the pose of every tracked episode object, the
/// source included. Objects present in `poses` but without a recorded
/// settle baseline are a setup fault.
///
/// # Errors
///
/// [`EvalError::SourceNotObserved`] if the source pose is absent, and
/// [`EvalError::MissingBaseline`] if any observed object has no baseline.
pub fn classify_displacement(
    context: &EpisodeContext,
    poses: &[(ActorId, Pose)],
    min_move_dist: f64,
) -> Result<DisplacementReport> {
    let source = context.source();

    let source_pose = poses
        .iter()
        .find(|(actor, _)| *actor == source)
        .map(|(_, pose)| pose)
        .ok_or(EvalError::SourceNotObserved { actor: source })?;
    let source_baseline = context
        .settle_position(source)
        .ok_or(EvalError::MissingBaseline { actor: source })?;
    let source_move_dist = xy_dist(source_baseline.coords.xy(), source_pose.xy());

    let mut other_move_dists = Vec::with_capacity(poses.len().saturating_sub(1));
    for (actor, pose) in poses {
        if *actor == source {
            continue;
        }
        let baseline = context
            .settle_position(*actor)
            .ok_or(EvalError::MissingBaseline { actor: *actor })?;
        other_move_dists.push(xy_dist(baseline.coords.xy(), pose.xy()));
    }

    let moved_correct_obj = source_move_dist > min_move_dist
        && other_move_dists.iter().all(|&d| d < source_move_dist);
    let moved_wrong_obj = other_move_dists.iter().any(|&d| d > min_move_dist)
        && other_move_dists.iter().any(|&d| d > source_move_dist);

    Ok(DisplacementReport {
        source_move_dist,
        other_move_dists,
        moved_correct_obj,
        moved_wrong_obj,
    })
}
