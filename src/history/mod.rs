//! Bounded undo/redo bookkeeping.
//!
//! [`CommandHistory`] owns the commands that can be undone (bounded, oldest
//! evicted first) and the ones that can be redone (cleared whenever a new
//! command is recorded). It never runs commands itself; that is the job of
//! [`CommandInvoker`](crate::CommandInvoker).

mod command_history;

#[cfg(test)]
mod tests;

pub use command_history::{CommandHistory, HistoryEntry};
