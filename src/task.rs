//! Task variants and their natural-language instructions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A put-on / stacking task variant.
///
/// The fixed variants mirror the benchmark's registered scenes and carry
/// their exact instruction strings; [`TaskVariant::PutOn`] covers arbitrary
/// source/target pairings with the generic template.
///
/// # Example
///
/// ```
/// use manip_eval::TaskVariant;
///
/// let task = TaskVariant::put_on("the carrot", "the plate");
/// assert_eq!(task.language_instruction(), "put the carrot on the plate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaskVariant {
    /// Move the spoon onto the towel.
    PutSpoonOnTowel,
    /// Move the carrot onto the plate.
    PutCarrotOnPlate,
    /// Stack the green cube on the yellow cube.
    StackGreenCubeOnYellowCube,
    /// Generic "put X on Y" with caller-supplied object names.
    PutOn {
        /// Name of the object to relocate, as it should read in the
        /// instruction.
        source: String,
        /// Name of the destination object.
        target: String,
    },
}

impl TaskVariant {
    /// Build a generic put-on variant from object names.
    #[must_use]
    pub fn put_on(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::PutOn {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The natural-language instruction for this task.
    #[must_use]
    pub fn language_instruction(&self) -> String {
        match self {
            Self::PutSpoonOnTowel => "put the spoon on the towel".to_owned(),
            Self::PutCarrotOnPlate => "put carrot on plate".to_owned(),
            Self::StackGreenCubeOnYellowCube => {
                "stack the green block on the yellow block".to_owned()
            }
            Self::PutOn { source, target } => format!("put {source} on {target}"),
        }
    }
}
