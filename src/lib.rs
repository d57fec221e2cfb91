//! Reversible commands with a bounded undo/redo history.
//!
//! The [`CommandInvoker`] runs [`Command`]s, keeps the last few for undo,
//! remembers undone ones for redo, maps commands onto numbered remote
//! buttons, and can record a run of commands as a [`MacroCommand`].
//!
//! ```
//! use remote_invoker::devices::{DeviceCommand, Light, shared};
//! use remote_invoker::{CommandInvoker, Outcome};
//!
//! let light = shared(Light::new("Kitchen"));
//! let mut remote = CommandInvoker::with_capacity(5);
//!
//! remote.execute(DeviceCommand::light_on(&light));
//! assert!(light.borrow().is_on);
//!
//! remote.undo_last();
//! assert!(!light.borrow().is_on);
//! assert_eq!(remote.undo_last(), Outcome::NothingToUndo);
//! ```

pub mod command;
pub mod config;
pub mod constants;
pub mod devices;
pub mod error;
pub mod history;
pub mod invoker;
pub mod paths;

pub use command::{Command, FnCommand, MacroCommand, MacroPolicy, NoOpCommand};
pub use config::InvokerConfig;
pub use error::{CommandError, ConfigError, InvokerError};
pub use history::HistoryEntry;
pub use invoker::{CommandInvoker, Outcome};
