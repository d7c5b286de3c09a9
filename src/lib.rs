//! Task-success evaluation for simulated tabletop manipulation.
//!
//! Given a scene with a robot arm, a *source* object, and a *target*
//! object, this crate decides each simulation step whether the task
//! ("put X on Y", "stack A on B") has been accomplished, and tracks
//! diagnostic signals across the episode:
//!
//! - [`TaskEvaluator`] - per-step orchestration and episode ownership
//! - [`EpisodeContext`] - source/target identities, robot links, settle
//!   baselines, cached bounding-box extents
//! - [`EpisodeStats`] - monotonic "ever true" flags per episode
//! - [`GraspTracker`] - consecutive-grasp persistence counter
//! - [`EvalParams`] - all tolerances as named, retunable fields
//!
//! # Success criterion
//!
//! A step is successful when the source object is *resting on* the target:
//! its center lies inside the target's margin-shrunk horizontal footprint,
//! the vertical gap between the facing box surfaces is small, and the
//! contact graph shows no real contact between the source and anything
//! other than the target or a robot link. Geometry alone is not enough -
//! an object resting on a nearby surface can overlap the target's box
//! region, so contacts veto the geometric judgment.
//!
//! # Boundary
//!
//! Physics simulation, collision detection, grasp detection, and scene
//! loading are external. The evaluator consumes their outputs: pose
//! snapshots, frame-0 world AABB half extents, a contact list with
//! impulses, and a boolean grasp verdict.
//!
//! # Example
//!
//! ```
//! use manip_eval::{
//!     ActorId, EpisodeContext, Pose, StepObservation, TaskEvaluator, TaskVariant,
//! };
//! use nalgebra::{Point3, Vector3};
//!
//! let spoon = ActorId::new(1);
//! let towel = ActorId::new(2);
//!
//! let mut context = EpisodeContext::new(
//!     spoon,
//!     towel,
//!     Vector3::new(0.02, 0.005, 0.005), // spoon half extents
//!     Vector3::new(0.06, 0.06, 0.002),  // towel half extents
//! )
//! .with_robot_links(vec![ActorId::new(10), ActorId::new(11)]);
//! context.record_settle_positions([
//!     (spoon, Point3::new(-0.16, 0.075, 0.01)),
//!     (towel, Point3::new(-0.16, -0.075, 0.0)),
//! ]);
//!
//! let mut evaluator = TaskEvaluator::new(context, TaskVariant::PutSpoonOnTowel);
//! assert_eq!(evaluator.language_instruction(), "put the spoon on the towel");
//!
//! // Spoon carried onto the towel
//! let poses = [
//!     (spoon, Pose::from_position(Point3::new(-0.16, -0.075, 0.008))),
//!     (towel, Pose::from_position(Point3::new(-0.16, -0.075, 0.0))),
//! ];
//! let result = evaluator
//!     .evaluate_step(&StepObservation {
//!         poses: &poses,
//!         contacts: &[],
//!         source_grasped: false,
//!     })
//!     .unwrap();
//! assert!(result.success);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions, // EvalError, EvalParams read better qualified
    clippy::missing_errors_doc       // error docs added where non-obvious
)]

mod actor;
mod contact;
mod displacement;
mod episode;
mod error;
mod evaluator;
mod grasp;
mod params;
mod placement;
mod stats;
mod task;

pub use actor::{ActorId, Pose};
pub use contact::{ContactPoint, ContactRecord, find_disqualifying_contact};
pub use displacement::{DisplacementReport, classify_displacement};
pub use episode::EpisodeContext;
pub use error::EvalError;
pub use evaluator::{StepObservation, StepResult, TaskEvaluator};
pub use grasp::GraspTracker;
pub use params::EvalParams;
pub use placement::{PlacementCheck, check_placement};
pub use stats::{EpisodeStats, StepFlags};
pub use task::TaskVariant;

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;
