//! Per-step task evaluation.
//!
//! The evaluator fuses the step's pose, contact, and grasp inputs into one
//! success boolean plus diagnostics, and folds the outcome into the
//! episode statistics it owns. It runs synchronously on the physics thread,
//! once per simulation tick.

use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    check_placement, classify_displacement, find_disqualifying_contact, ActorId, ContactRecord,
    EpisodeContext, EpisodeStats, EvalError, EvalParams, GraspTracker, Pose, Result, StepFlags,
    TaskVariant,
};

/// Inputs for one evaluation step, borrowed from the physics layer.
///
/// `poses` must cover every tracked episode object (source and target
/// included). `contacts` is the engine's full contact list for this step.
/// `source_grasped` is the external grasp predicate's verdict for the
/// source object.
#[derive(Debug, Clone, Copy)]
pub struct StepObservation<'a> {
    /// Current poses of all tracked episode objects.
    pub poses: &'a [(ActorId, Pose)],
    /// All contacts reported by the physics engine this step.
    pub contacts: &'a [ContactRecord],
    /// Whether the source object is currently grasped.
    pub source_grasped: bool,
}

/// Result of one evaluation step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepResult {
    /// Instantaneous outcome flags for this step.
    pub flags: StepFlags,
    /// Task success this step (source resting on target, uncontested).
    pub success: bool,
    /// Episode statistics accumulated through this step.
    pub episode_stats: EpisodeStats,
}

/// Evaluates task success over the steps of one episode.
///
/// One evaluator instance is scoped to exactly one episode: it owns the
/// episode statistics and the grasp counter, and [`reset_episode`] must be
/// called between episodes. Vectorized setups run one evaluator per
/// environment; nothing is shared.
///
/// [`reset_episode`]: TaskEvaluator::reset_episode
///
/// # Example
///
/// ```
/// use manip_eval::{
///     ActorId, EpisodeContext, Pose, StepObservation, TaskEvaluator, TaskVariant,
/// };
/// use nalgebra::{Point3, Vector3};
///
/// let source = ActorId::new(1);
/// let target = ActorId::new(2);
/// let mut context = EpisodeContext::new(
///     source,
///     target,
///     Vector3::new(0.01, 0.01, 0.01),
///     Vector3::new(0.05, 0.05, 0.01),
/// );
/// context.record_settle_positions([
///     (source, Point3::origin()),
///     (target, Point3::new(0.2, 0.0, 0.0)),
/// ]);
///
/// let mut evaluator = TaskEvaluator::new(context, TaskVariant::PutSpoonOnTowel);
///
/// // Source placed directly above the target, 3 cm up
/// let poses = [
///     (source, Pose::from_position(Point3::new(0.2, 0.0, 0.03))),
///     (target, Pose::from_position(Point3::new(0.2, 0.0, 0.0))),
/// ];
/// let result = evaluator
///     .evaluate_step(&StepObservation {
///         poses: &poses,
///         contacts: &[],
///         source_grasped: false,
///     })
///     .unwrap();
/// assert!(result.success);
/// ```
#[derive(Debug, Clone)]
pub struct TaskEvaluator {
    context: EpisodeContext,
    task: TaskVariant,
    params: EvalParams,
    stats: EpisodeStats,
    grasp: GraspTracker,
}

impl TaskEvaluator {
    /// Create an evaluator for one episode with default tolerances.
    #[must_use]
    pub fn new(context: EpisodeContext, task: TaskVariant) -> Self {
        Self {
            context,
            task,
            params: EvalParams::default(),
            stats: EpisodeStats::default(),
            grasp: GraspTracker::new(),
        }
    }

    /// Override the evaluation tolerances.
    #[must_use]
    pub fn with_params(mut self, params: EvalParams) -> Self {
        self.params = params;
        self
    }

    /// The episode setup this evaluator judges against.
    #[must_use]
    pub const fn context(&self) -> &EpisodeContext {
        &self.context
    }

    /// The tolerances in effect.
    #[must_use]
    pub const fn params(&self) -> &EvalParams {
        &self.params
    }

    /// Statistics accumulated so far this episode.
    #[must_use]
    pub const fn episode_stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// The natural-language instruction for the current task.
    #[must_use]
    pub fn language_instruction(&self) -> String {
        self.task.language_instruction()
    }

    /// Reinitialize the per-episode state (statistics and grasp counter).
    ///
    /// Must be called at every episode reset; accumulated values never
    /// carry across episodes.
    pub fn reset_episode(&mut self) {
        self.stats.reset();
        self.grasp.reset();
        debug!("episode state reset");
    }

    /// Evaluate one simulation step.
    ///
    /// Call at most once per physics tick: each call advances the grasp
    /// counter, so repeated calls on the same tick would double-count.
    ///
    /// # Errors
    ///
    /// [`EvalError::SourceNotObserved`] / [`EvalError::TargetNotObserved`]
    /// if a required pose is missing from the observation, and
    /// [`EvalError::MissingBaseline`] if an observed object has no settle
    /// baseline.
    pub fn evaluate_step(&mut self, obs: &StepObservation<'_>) -> Result<StepResult> {
        // All fallible lookups happen before any state mutation, so a
        // rejected step leaves the grasp counter and statistics untouched.
        let source_pose = Self::find_pose(obs.poses, self.context.source())
            .ok_or(EvalError::SourceNotObserved {
                actor: self.context.source(),
            })?;
        let target_pose = Self::find_pose(obs.poses, self.context.target())
            .ok_or(EvalError::TargetNotObserved {
                actor: self.context.target(),
            })?;
        let displacement =
            classify_displacement(&self.context, obs.poses, self.params.min_move_dist)?;

        let grasp_count = self.grasp.observe(obs.source_grasped);
        let consecutive_grasp = self.grasp.is_stable(self.params.stable_grasp_steps);
        trace!(grasp_count, consecutive_grasp, "grasp counter updated");

        let placement = check_placement(&self.context, &source_pose, &target_pose, &self.params);

        let mut src_on_target = placement.is_resting();
        if src_on_target {
            if let Some(actor) = find_disqualifying_contact(
                obs.contacts,
                &self.context,
                self.params.min_contact_impulse,
            ) {
                debug!(%actor, "placement vetoed by interfering contact");
                src_on_target = false;
            }
        }

        let flags = StepFlags {
            moved_correct_obj: displacement.moved_correct_obj,
            moved_wrong_obj: displacement.moved_wrong_obj,
            is_src_obj_grasped: obs.source_grasped,
            consecutive_grasp,
            src_on_target,
        };
        self.stats.absorb(&flags);

        if src_on_target {
            debug!(
                horizontal_dist = placement.horizontal_dist,
                rest_gap = placement.rest_gap,
                "source resting on target"
            );
        }

        Ok(StepResult {
            flags,
            success: src_on_target,
            episode_stats: self.stats,
        })
    }

    fn find_pose(poses: &[(ActorId, Pose)], actor: ActorId) -> Option<Pose> {
        poses
            .iter()
            .find(|(a, _)| *a == actor)
            .map(|(_, pose)| *pose)
    }
}
