//! The command invoker: runs commands and manages undo/redo.
//!
//! ## Usage
//!
//! - [`CommandInvoker::execute`] runs a command and records it
//! - [`CommandInvoker::undo_last`] / [`CommandInvoker::redo_last`] walk the timeline
//! - [`CommandInvoker::set_slot`] / [`CommandInvoker::press_slot`] model remote buttons
//! - [`CommandInvoker::record_macro`] turns the last few commands into one
//!
//! Every operation reports an [`Outcome`] and logs the same diagnostic; a
//! failing command never escapes as an error and never corrupts history.

mod outcome;


use tracing::{debug, info, warn};

pub use outcome::Outcome;

use crate::command::{Command, MacroCommand, MacroPolicy, NoOpCommand};
use crate::config::InvokerConfig;
use crate::error::InvokerError;
use crate::history::{CommandHistory, HistoryEntry};

/// Executes commands and keeps a bounded undo/redo history
#[derive(Clone)]
pub struct CommandInvoker {
    history: CommandHistory,
    slots: Vec<Box<dyn Command>>,
    macro_policy: MacroPolicy,
}

impl Default for CommandInvoker {
    fn default() -> Self {
        Self::from_config(&InvokerConfig::default())
    }
}

impl CommandInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoker with default slots whose history keeps at most `capacity` commands
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(&InvokerConfig {
            history_capacity: capacity,
            ..InvokerConfig::default()
        })
    }

    pub fn from_config(config: &InvokerConfig) -> Self {
        let config = config.clone().normalized();
        let slots = (0..config.slot_count)
            .map(|_| Box::new(NoOpCommand) as Box<dyn Command>)
            .collect();

        Self {
            history: CommandHistory::with_capacity(config.history_capacity),
            slots,
            macro_policy: config.macro_policy,
        }
    }

    /// Run `command` and record it for undo
    pub fn execute(&mut self, command: impl Command + 'static) -> Outcome {
        self.execute_boxed(Box::new(command))
    }

    pub fn execute_boxed(&mut self, mut command: Box<dyn Command>) -> Outcome {
        let name = command.name();

        if let Err(err) = command.execute() {
            warn!(command = %name, "execution failed, not recorded: {err}");
            return Outcome::Failed(err);
        }
        if command.is_noop() {
            return Outcome::Skipped;
        }

        debug!(command = %name, "executed");
        self.history.push(command);
        Outcome::Executed { command: name }
    }

    /// Undo the most recent command, making it available for redo
    pub fn undo_last(&mut self) -> Outcome {
        let Some(mut command) = self.history.pop_undo() else {
            info!("nothing to undo");
            return Outcome::NothingToUndo;
        };
        let name = command.name();

        match command.undo() {
            Ok(()) => {
                debug!(command = %name, "undone");
                self.history.push_redo(command);
                Outcome::Undone { command: name }
            }
            Err(err) => {
                warn!(command = %name, "undo failed, dropping command: {err}");
                Outcome::Failed(err)
            }
        }
    }

    /// Call [`undo_last`](Self::undo_last) exactly `count` times
    pub fn undo_last_n(&mut self, count: usize) -> Vec<Outcome> {
        (0..count).map(|_| self.undo_last()).collect()
    }

    /// Re-execute the most recently undone command
    pub fn redo_last(&mut self) -> Outcome {
        let Some(mut command) = self.history.pop_redo() else {
            info!("nothing to redo");
            return Outcome::NothingToRedo;
        };
        let name = command.name();

        match command.execute() {
            Ok(()) => {
                debug!(command = %name, "redone");
                self.history.push_undo(command);
                Outcome::Redone { command: name }
            }
            Err(err) => {
                warn!(command = %name, "redo failed, discarding command: {err}");
                Outcome::Failed(err)
            }
        }
    }

    /// Assign `command` to a remote button
    pub fn set_slot(&mut self, slot: usize, command: impl Command + 'static) -> Result<(), InvokerError> {
        let slots = self.slots.len();
        let target = self
            .slots
            .get_mut(slot)
            .ok_or(InvokerError::SlotOutOfRange { slot, slots })?;

        info!(slot, command = %command.name(), "slot assigned");
        *target = Box::new(command);
        Ok(())
    }

    /// Reset a button back to the no-op placeholder
    pub fn clear_slot(&mut self, slot: usize) -> Result<(), InvokerError> {
        self.set_slot(slot, NoOpCommand)
    }

    /// Press a remote button, executing a fresh copy of its command.
    ///
    /// Unassigned and out-of-range slots behave like [`NoOpCommand`].
    pub fn press_slot(&mut self, slot: usize) -> Outcome {
        let command: Box<dyn Command> = match self.slots.get(slot) {
            Some(command) => command.clone(),
            None => {
                warn!(slot, slots = self.slots.len(), "no such slot");
                Box::new(NoOpCommand)
            }
        };
        debug!(slot, command = %command.name(), "slot pressed");
        self.execute_boxed(command)
    }

    /// Name of the command assigned to `slot`
    pub fn slot_name(&self, slot: usize) -> Option<String> {
        self.slots.get(slot).map(|command| command.name())
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Build a macro replaying the `count` most recent commands in their original order.
    ///
    /// History is left untouched. Returns `None` when fewer than `count`
    /// commands are recorded.
    pub fn record_macro(&self, count: usize) -> Option<MacroCommand> {
        if count == 0 {
            info!("nothing to record");
            return None;
        }
        let Some(commands) = self.history.recent(count) else {
            info!(
                requested = count,
                available = self.history.undo_count(),
                "not enough commands in history to record a macro"
            );
            return None;
        };

        let recorded = MacroCommand::new(format!("RecordedMacro({count})"), commands).with_policy(self.macro_policy);
        debug!(members = ?recorded.member_names(), "recorded macro");
        Some(recorded)
    }

    /// Undoable commands, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    /// Write the undoable commands to the log
    pub fn log_history(&self) {
        let entries = self.history.entries();
        info!("history ({}):", entries.len());
        for entry in entries {
            info!("  - {entry}");
        }
    }

    /// Check if `undo_last` has anything to undo
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if `redo_last` has anything to redo
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of commands in the undo history
    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    /// Number of undone commands waiting for redo
    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    /// History bound this invoker was built with
    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }

    /// Failure policy applied to macros built by `record_macro`
    pub fn macro_policy(&self) -> MacroPolicy {
        self.macro_policy
    }

    /// Forget every undoable and redoable command; slots are kept
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
