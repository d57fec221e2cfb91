//! What an invoker operation reported back to the caller.

use std::fmt;

use crate::error::CommandError;

/// Result of one invoker operation.
///
/// Command failures are downgraded to [`Outcome::Failed`]; the invoker never
/// returns them as `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Executed { command: String },
    Undone { command: String },
    Redone { command: String },
    /// An unassigned slot (or a no-op) was run; nothing was recorded
    Skipped,
    NothingToUndo,
    NothingToRedo,
    Failed(CommandError),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&CommandError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executed { command } => write!(f, "executed {command}"),
            Self::Undone { command } => write!(f, "undid {command}"),
            Self::Redone { command } => write!(f, "redid {command}"),
            Self::Skipped => f.write_str("slot not assigned, nothing done"),
            Self::NothingToUndo => f.write_str("nothing to undo"),
            Self::NothingToRedo => f.write_str("nothing to redo"),
            Self::Failed(err) => write!(f, "failed: {err}"),
        }
    }
}
