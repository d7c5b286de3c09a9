//! Error types for evaluation operations.

use thiserror::Error;

use crate::ActorId;

/// Errors that can occur while evaluating a step.
///
/// All of these indicate a setup fault on the caller's side: evaluation
/// itself is pure computation over already-validated inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The source object's pose was missing from the step observation.
    #[error("source object {actor} not present in step observation")]
    SourceNotObserved {
        /// The source actor that was expected.
        actor: ActorId,
    },

    /// The target object's pose was missing from the step observation.
    #[error("target object {actor} not present in step observation")]
    TargetNotObserved {
        /// The target actor that was expected.
        actor: ActorId,
    },

    /// No settle baseline was captured for an observed object.
    #[error("no settle baseline recorded for {actor}")]
    MissingBaseline {
        /// The actor with no recorded baseline.
        actor: ActorId,
    },

    /// Cached bounding-box half extents are not usable.
    #[error("invalid bounding-box half extents: {reason}")]
    InvalidHalfExtents {
        /// Description of what's wrong.
        reason: String,
    },
}

impl EvalError {
    /// Create a missing-baseline error.
    #[must_use]
    pub fn missing_baseline(actor: ActorId) -> Self {
        Self::MissingBaseline { actor }
    }

    /// Create an invalid-half-extents error.
    #[must_use]
    pub fn invalid_half_extents(reason: impl Into<String>) -> Self {
        Self::InvalidHalfExtents {
            reason: reason.into(),
        }
    }

    /// Check if this error is a missing-baseline fault.
    #[must_use]
    pub fn is_missing_baseline(&self) -> bool {
        matches!(self, Self::MissingBaseline { .. })
    }
}
