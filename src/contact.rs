//! Contact records and the interference filter.
//!
//! A bounding-box overlap alone cannot distinguish "resting on the target"
//! from "resting on some other nearby surface while incidentally overlapping
//! the target's box region". The interference filter inspects the
//! instantaneous contact graph: any real contact between the source and a
//! party other than the target or the robot vetoes placement.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ActorId, EpisodeContext};

/// A single contact point reported by the physics engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactPoint {
    /// Impulse applied at this point over the last physics step.
    pub impulse: Vector3<f64>,
}

impl ContactPoint {
    /// Create a contact point carrying the given impulse.
    #[must_use]
    pub const fn new(impulse: Vector3<f64>) -> Self {
        Self { impulse }
    }
}

/// A contact between two actors, with its per-point impulses.
///
/// Produced fresh by the physics engine each step; consumed, never stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactRecord {
    /// First actor in the pair.
    pub actor_a: ActorId,
    /// Second actor in the pair.
    pub actor_b: ActorId,
    /// Contact points with their impulses.
    pub points: Vec<ContactPoint>,
}

impl ContactRecord {
    /// Create a contact record between two actors.
    #[must_use]
    pub fn new(actor_a: ActorId, actor_b: ActorId, points: Vec<ContactPoint>) -> Self {
        Self {
            actor_a,
            actor_b,
            points,
        }
    }

    /// Convenience constructor for a single-point contact.
    #[must_use]
    pub fn single(actor_a: ActorId, actor_b: ActorId, impulse: Vector3<f64>) -> Self {
        Self::new(actor_a, actor_b, vec![ContactPoint::new(impulse)])
    }

    /// If `actor` is one side of this contact, return the other side.
    #[must_use]
    pub fn other_actor(&self, actor: ActorId) -> Option<ActorId> {
        if self.actor_a == actor {
            Some(self.actor_b)
        } else if self.actor_b == actor {
            Some(self.actor_a)
        } else {
            None
        }
    }

    /// Sum of the point impulses.
    #[must_use]
    pub fn total_impulse(&self) -> Vector3<f64> {
        self.points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.impulse)
    }
}

/// Scan the contact list for the first contact that disqualifies placement.
///
/// A contact disqualifies when the source touches an actor that is neither
/// the target nor a robot link, with a summed impulse magnitude strictly
/// above the noise floor. The scan stops at the first such contact and
/// returns the offending actor; `None` means the filter passes.
#[must_use]
pub fn find_disqualifying_contact(
    contacts: &[ContactRecord],
    context: &EpisodeContext,
    min_impulse: f64,
) -> Option<ActorId> {
    let source = context.source();
    let target = context.target();
    for contact in contacts {
        let Some(other) = contact.other_actor(source) else {
            continue;
        };
        if other == target || context.is_robot_link(other) {
            continue;
        }
        if contact.total_impulse().norm() > min_impulse {
            return Some(other);
        }
    }
    None
}
