//! Error types shared across the crate.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure raised by a [`Command`](crate::Command) while executing or undoing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// `undo` was called on a command that is not currently executed
    #[error("{command} was not executed, nothing to undo")]
    InvalidState { command: String },
    /// The action itself (or the receiver it touches) failed
    #[error("{command} failed: {reason}")]
    ExecutionFailure { command: String, reason: String },
}

impl CommandError {
    pub fn invalid_state(command: impl Into<String>) -> Self {
        Self::InvalidState {
            command: command.into(),
        }
    }

    pub fn failure(command: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::ExecutionFailure {
            command: command.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Name of the command that raised this error
    pub fn command(&self) -> &str {
        match self {
            Self::InvalidState { command } | Self::ExecutionFailure { command, .. } => command,
        }
    }
}

/// Misuse of the invoker API itself (as opposed to a failing command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokerError {
    #[error("slot {slot} is out of range (the remote has {slots} slots)")]
    SlotOutOfRange { slot: usize, slots: usize },
}

/// Failure reading or writing the invoker configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration is corrupted: {0}")]
    Parse(#[from] serde_json::Error),
}
