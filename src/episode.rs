//! Per-episode setup: tracked actors, settle baselines, cached extents.

use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ActorId, EvalError, Result};

/// Immutable setup for one episode of a put-on / stacking task.
///
/// Captures everything the evaluator needs that is fixed for the episode:
/// the source and target identities, the robot link set (contacts with
/// these never count as interference), the world-frame bounding-box half
/// extents of source and target, and the settle baseline of every tracked
/// object.
///
/// The half extents are sampled once at episode start (frame 0) and held
/// fixed: they are **not** updated as objects rotate. Recomputing a rotated
/// object's world AABB each step is expensive and noisy, so rotational
/// precision is traded for stability; the footprint of a heavily rotated
/// object may diverge from the cached extent.
///
/// Settle baselines are recorded once, after the initial physics-settling
/// phase and before any agent action, and are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpisodeContext {
    source: ActorId,
    target: ActorId,
    robot_links: Vec<ActorId>,
    source_half_extents: Vector3<f64>,
    target_half_extents: Vector3<f64>,
    settle_positions: HashMap<ActorId, Point3<f64>>,
}

impl EpisodeContext {
    /// Create a context for the given source/target pair.
    ///
    /// `source_half_extents` and `target_half_extents` are the world-frame
    /// AABB half lengths at frame 0.
    #[must_use]
    pub fn new(
        source: ActorId,
        target: ActorId,
        source_half_extents: Vector3<f64>,
        target_half_extents: Vector3<f64>,
    ) -> Self {
        Self {
            source,
            target,
            robot_links: Vec::new(),
            source_half_extents,
            target_half_extents,
            settle_positions: HashMap::new(),
        }
    }

    /// Set the robot link identities.
    #[must_use]
    pub fn with_robot_links(mut self, links: Vec<ActorId>) -> Self {
        self.robot_links = links;
        self
    }

    /// Record the settle baseline for one object.
    pub fn record_settle_position(&mut self, actor: ActorId, position: Point3<f64>) {
        self.settle_positions.insert(actor, position);
    }

    /// Record settle baselines for many objects at once.
    pub fn record_settle_positions<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = (ActorId, Point3<f64>)>,
    {
        self.settle_positions.extend(positions);
    }

    /// The object the agent must relocate.
    #[must_use]
    pub const fn source(&self) -> ActorId {
        self.source
    }

    /// The destination object/surface.
    #[must_use]
    pub const fn target(&self) -> ActorId {
        self.target
    }

    /// Whether `actor` is one of the robot's links.
    #[must_use]
    pub fn is_robot_link(&self, actor: ActorId) -> bool {
        self.robot_links.contains(&actor)
    }

    /// Frame-0 world AABB half extents of the source object.
    #[must_use]
    pub const fn source_half_extents(&self) -> Vector3<f64> {
        self.source_half_extents
    }

    /// Frame-0 world AABB half extents of the target object.
    #[must_use]
    pub const fn target_half_extents(&self) -> Vector3<f64> {
        self.target_half_extents
    }

    /// Settle baseline of an object, if one was recorded.
    #[must_use]
    pub fn settle_position(&self, actor: ActorId) -> Option<Point3<f64>> {
        self.settle_positions.get(&actor).copied()
    }

    /// Number of objects with a recorded baseline.
    #[must_use]
    pub fn tracked_objects(&self) -> usize {
        self.settle_positions.len()
    }

    /// Check that the context is complete enough to evaluate against.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::MissingBaseline`] if the source or target has no
    /// settle baseline, and [`EvalError::InvalidHalfExtents`] if either
    /// cached extent is non-finite or non-positive.
    pub fn validate(&self) -> Result<()> {
        for (name, extents) in [
            ("source", &self.source_half_extents),
            ("target", &self.target_half_extents),
        ] {
            if !extents.iter().all(|x| x.is_finite() && *x > 0.0) {
                return Err(EvalError::invalid_half_extents(format!(
                    "{name} half extents must be finite and positive, got {extents:?}"
                )));
            }
        }
        for actor in [self.source, self.target] {
            if !self.settle_positions.contains_key(&actor) {
                return Err(EvalError::missing_baseline(actor));
            }
        }
        Ok(())
    }
}
