//! Centralized constants used across the crate.

/// Number of executed commands kept for undo when nothing else is configured
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Smallest history the invoker accepts; lower values are clamped up
pub const MIN_HISTORY_CAPACITY: usize = 1;

/// Number of buttons on the remote when nothing else is configured
pub const DEFAULT_SLOT_COUNT: usize = 7;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "remote-invoker.json";

/// Name of the log file inside the logs directory
pub const LOG_FILE_NAME: &str = "remote-invoker.log";
