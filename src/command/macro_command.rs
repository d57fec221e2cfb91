//! Composite command running an ordered group of members.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Command, CommandError};

/// What a macro does when one of its members fails mid-sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroPolicy {
    /// Run every member, then report the first failure
    #[default]
    RunAll,
    /// Stop at the first failure and roll back the members already run
    AbortOnFailure,
}

/// An ordered group of commands executed first-to-last and undone last-to-first.
#[derive(Clone)]
pub struct MacroCommand {
    name: String,
    commands: Vec<Box<dyn Command>>,
    policy: MacroPolicy,
    executed: bool,
}

impl MacroCommand {
    pub fn new(name: impl Into<String>, commands: Vec<Box<dyn Command>>) -> Self {
        Self {
            name: name.into(),
            commands,
            policy: MacroPolicy::default(),
            executed: false,
        }
    }

    pub fn with_policy(mut self, policy: MacroPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append a member at the end of the sequence
    pub fn push(&mut self, command: impl Command + 'static) {
        self.commands.push(Box::new(command));
    }

    pub fn policy(&self) -> MacroPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Member names in execution order
    pub fn member_names(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.name()).collect()
    }
}

fn member_failure(macro_name: &str, err: CommandError) -> CommandError {
    CommandError::failure(macro_name, err)
}

impl Command for MacroCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        debug!(macro_name = %self.name, members = self.commands.len(), "running macro");
        let mut first_error = None;

        for index in 0..self.commands.len() {
            let Err(err) = self.commands[index].execute() else {
                continue;
            };
            warn!(macro_name = %self.name, "macro member failed: {err}");

            if self.policy == MacroPolicy::AbortOnFailure {
                for done in self.commands[..index].iter_mut().rev() {
                    if let Err(rollback) = done.undo() {
                        warn!(macro_name = %self.name, "rollback of member failed: {rollback}");
                    }
                }
                return Err(member_failure(&self.name, err));
            }
            first_error.get_or_insert(err);
        }

        match first_error {
            Some(err) => Err(member_failure(&self.name, err)),
            None => {
                self.executed = true;
                Ok(())
            }
        }
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        if !self.executed {
            return Err(CommandError::invalid_state(&self.name));
        }
        debug!(macro_name = %self.name, "undoing macro in reverse order");

        let mut first_error = None;
        for command in self.commands.iter_mut().rev() {
            if let Err(err) = command.undo() {
                warn!(macro_name = %self.name, "macro member failed to undo: {err}");
                first_error.get_or_insert(err);
            }
        }
        self.executed = false;

        match first_error {
            Some(err) => Err(member_failure(&self.name, err)),
            None => Ok(()),
        }
    }

    fn was_executed(&self) -> bool {
        self.executed
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

impl std::fmt::Debug for MacroCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroCommand")
            .field("name", &self.name)
            .field("members", &self.member_names())
            .field("policy", &self.policy)
            .field("executed", &self.executed)
            .finish()
    }
}
