//! Command history tracking undo/redo state.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::command::Command;
use crate::constants::{DEFAULT_HISTORY_CAPACITY, MIN_HISTORY_CAPACITY};

/// Snapshot of one history entry, for listings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub name: String,
    pub executed: bool,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (executed={})", self.name, self.executed)
    }
}

/// Undo and redo stacks for executed commands
#[derive(Clone)]
pub struct CommandHistory {
    /// Commands that can be undone (most recent at the back)
    undo_stack: VecDeque<Box<dyn Command>>,
    /// Commands that can be redone (most recent last)
    redo_stack: Vec<Box<dyn Command>>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CommandHistory {
    /// Create a history keeping at most `capacity` undoable commands (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_HISTORY_CAPACITY);
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    /// Record a newly executed command
    pub fn push(&mut self, command: Box<dyn Command>) {
        // A new action invalidates everything that was undone
        if !self.redo_stack.is_empty() {
            debug!(discarded = self.redo_stack.len(), "clearing redo stack");
            self.redo_stack.clear();
        }

        self.push_undo(command);
    }

    /// Pop the last command for undo
    pub fn pop_undo(&mut self) -> Option<Box<dyn Command>> {
        self.undo_stack.pop_back()
    }

    /// Pop the last command for redo
    pub fn pop_redo(&mut self) -> Option<Box<dyn Command>> {
        self.redo_stack.pop()
    }

    /// Push a command to the redo stack (used after undo)
    pub fn push_redo(&mut self, command: Box<dyn Command>) {
        self.redo_stack.push(command);
    }

    /// Push a command to the undo stack without touching redo (used after redo)
    pub fn push_undo(&mut self, command: Box<dyn Command>) {
        self.undo_stack.push_back(command);

        while self.undo_stack.len() > self.capacity {
            if let Some(evicted) = self.undo_stack.pop_front() {
                debug!(command = %evicted.name(), "history full, evicting oldest command");
            }
        }
    }

    /// Clones of the `count` most recent commands, oldest first.
    ///
    /// Returns `None` when fewer than `count` commands are recorded.
    pub fn recent(&self, count: usize) -> Option<Vec<Box<dyn Command>>> {
        let start = self.undo_stack.len().checked_sub(count)?;
        Some(self.undo_stack.range(start..).cloned().collect())
    }

    /// Entries that can be undone, oldest first
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.undo_stack
            .iter()
            .map(|command| HistoryEntry {
                name: command.name(),
                executed: command.was_executed(),
            })
            .collect()
    }

    /// Check if there are commands to undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands to redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of commands that can be undone
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of commands that can be redone
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Maximum number of undoable commands kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
