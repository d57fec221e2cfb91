//! The reversible command abstraction driven by the invoker.
//!
//! A [`Command`] is anything that can be executed and later undone. The
//! invoker only ever sees boxed trait objects, so the concrete kinds below
//! (and [`DeviceCommand`](crate::devices::DeviceCommand)) are interchangeable:
//!
//! - [`NoOpCommand`] - placeholder for unassigned remote slots
//! - [`FnCommand`] - a pair of closures, for ad-hoc actions
//! - [`MacroCommand`] - an ordered group of commands, itself a command

mod macro_command;


use dyn_clone::DynClone;
use tracing::debug;

pub use macro_command::{MacroCommand, MacroPolicy};

pub use crate::error::CommandError;

/// A reversible action against some receiver.
///
/// Commands are cloneable trait objects: a clone shares the receiver but
/// carries its own `was_executed` flag, which is how one slot assignment can
/// produce several independent history entries.
pub trait Command: DynClone {
    fn execute(&mut self) -> Result<(), CommandError>;

    /// Reverse the last `execute`.
    ///
    /// Implementations must fail with [`CommandError::InvalidState`] when
    /// [`was_executed`](Command::was_executed) is false.
    fn undo(&mut self) -> Result<(), CommandError>;

    fn was_executed(&self) -> bool;

    /// Human readable name used in history listings and diagnostics
    fn name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Placeholder commands are never recorded in history
    fn is_noop(&self) -> bool {
        false
    }
}

dyn_clone::clone_trait_object!(Command);

fn short_type_name(full: &str) -> String {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

/// Command that does nothing, used to pre-fill unassigned slots.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpCommand;

impl Command for NoOpCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        debug!("slot not assigned, nothing to do");
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        debug!("slot not assigned, nothing to undo");
        Ok(())
    }

    fn was_executed(&self) -> bool {
        false
    }

    fn name(&self) -> String {
        "NoOpCommand".to_string()
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// Command built from an `execute` closure and an `undo` closure.
///
/// Both closures must be `Clone` (capture `Rc` handles rather than `&mut`
/// borrows) so the command can live in history and in slots at once.
#[derive(Clone)]
pub struct FnCommand<E, U> {
    name: String,
    execute: E,
    undo: U,
    executed: bool,
}

impl<E, U> FnCommand<E, U>
where
    E: FnMut() -> Result<(), CommandError> + Clone + 'static,
    U: FnMut() -> Result<(), CommandError> + Clone + 'static,
{
    pub fn new(name: impl Into<String>, execute: E, undo: U) -> Self {
        Self {
            name: name.into(),
            execute,
            undo,
            executed: false,
        }
    }
}

impl<E, U> Command for FnCommand<E, U>
where
    E: FnMut() -> Result<(), CommandError> + Clone + 'static,
    U: FnMut() -> Result<(), CommandError> + Clone + 'static,
{
    fn execute(&mut self) -> Result<(), CommandError> {
        (self.execute)()?;
        self.executed = true;
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        if !self.executed {
            return Err(CommandError::invalid_state(&self.name));
        }
        (self.undo)()?;
        self.executed = false;
        Ok(())
    }

    fn was_executed(&self) -> bool {
        self.executed
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

impl<E, U> std::fmt::Debug for FnCommand<E, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCommand")
            .field("name", &self.name)
            .field("executed", &self.executed)
            .finish_non_exhaustive()
    }
}
