//! Unit tests for the history module.

use crate::command::{Command, CommandError, FnCommand};
use crate::constants::DEFAULT_HISTORY_CAPACITY;

use super::CommandHistory;

fn named(name: &str) -> Box<dyn Command> {
    let mut command = FnCommand::new(name, || Ok::<(), CommandError>(()), || Ok(()));
    command.execute().unwrap();
    Box::new(command)
}

fn names(history: &CommandHistory) -> Vec<String> {
    history.entries().into_iter().map(|e| e.name).collect()
}

#[test]
fn test_command_history_push() {
    let mut history = CommandHistory::default();
    assert!(!history.can_undo());

    history.push(named("a"));
    assert!(history.can_undo());
    assert_eq!(history.undo_count(), 1);
}

#[test]
fn test_command_history_push_clears_redo() {
    let mut history = CommandHistory::default();

    history.push(named("a"));
    history.push(named("b"));

    let undone = history.pop_undo().unwrap();
    history.push_redo(undone);
    assert!(history.can_redo());

    // A new command branches the timeline
    history.push(named("c"));
    assert!(!history.can_redo());
    assert_eq!(names(&history), vec!["a", "c"]);
}

#[test]
fn test_push_undo_keeps_redo() {
    let mut history = CommandHistory::default();
    history.push_redo(named("a"));
    history.push_redo(named("b"));

    let redone = history.pop_redo().unwrap();
    history.push_undo(redone);

    assert_eq!(history.redo_count(), 1);
    assert_eq!(names(&history), vec!["b"]);
}

#[test]
fn test_command_history_max_size() {
    let mut history = CommandHistory::default();

    for i in 0..25 {
        history.push(named(&format!("cmd{i}")));
    }

    assert_eq!(history.undo_count(), DEFAULT_HISTORY_CAPACITY);
    assert_eq!(names(&history).first().map(String::as_str), Some("cmd15"));
}

#[test]
fn test_capacity_is_at_least_one() {
    let mut history = CommandHistory::with_capacity(0);
    assert_eq!(history.capacity(), 1);

    history.push(named("a"));
    history.push(named("b"));
    assert_eq!(names(&history), vec!["b"]);
}

#[test]
fn test_eviction_drops_oldest() {
    let mut history = CommandHistory::with_capacity(2);
    history.push(named("a"));
    history.push(named("b"));
    history.push(named("c"));

    assert_eq!(names(&history), vec!["b", "c"]);
    assert_eq!(history.pop_undo().unwrap().name(), "c");
    assert_eq!(history.pop_undo().unwrap().name(), "b");
    assert!(history.pop_undo().is_none());
}

#[test]
fn test_recent_is_oldest_first_and_non_destructive() {
    let mut history = CommandHistory::default();
    history.push(named("a"));
    history.push(named("b"));
    history.push(named("c"));

    let recent = history.recent(2).unwrap();
    let recent: Vec<String> = recent.iter().map(|c| c.name()).collect();
    assert_eq!(recent, vec!["b", "c"]);
    assert_eq!(history.undo_count(), 3);

    assert!(history.recent(4).is_none());
}

#[test]
fn test_entries_report_execution_flag() {
    let mut history = CommandHistory::default();
    history.push(named("a"));

    let entries = history.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].executed);
    assert_eq!(entries[0].to_string(), "a (executed=true)");
}

#[test]
fn test_clear() {
    let mut history = CommandHistory::default();
    history.push(named("a"));
    history.push_redo(named("b"));

    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
