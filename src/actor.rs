//! Scene actor identity and pose snapshots.
//!
//! Actors are everything the physics scene tracks: manipulable objects and
//! robot links alike. The evaluator never owns actor state; it consumes
//! read-only pose snapshots taken by the caller each step.

use nalgebra::{Point3, UnitQuaternion, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for an actor in the physics scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActorId(pub u64);

impl ActorId {
    /// Create a new actor ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ActorId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}

/// Position and orientation of an actor, sampled once per step.
///
/// The physics engine is the source of truth; a `Pose` is a snapshot, never
/// written back.
///
/// # Example
///
/// ```
/// use manip_eval::Pose;
/// use nalgebra::Point3;
///
/// let pose = Pose::from_position(Point3::new(0.1, -0.2, 0.05));
/// assert_eq!(pose.xy().x, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Position in world coordinates.
    pub position: Point3<f64>,
    /// Orientation as a unit quaternion.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Create an identity pose (origin, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose from position only (identity rotation).
    #[must_use]
    pub fn from_position(position: Point3<f64>) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose from position and rotation.
    #[must_use]
    pub const fn from_position_rotation(
        position: Point3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Self {
        Self { position, rotation }
    }

    /// Horizontal (xy) component of the position.
    #[must_use]
    pub fn xy(&self) -> Vector2<f64> {
        self.position.coords.xy()
    }

    /// Check if the pose contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|x| x.is_finite())
            && self.rotation.coords.iter().all(|x| x.is_finite())
    }
}
