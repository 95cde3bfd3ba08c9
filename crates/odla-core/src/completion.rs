use crate::models::{CalendarTask, TaskKey};
use std::collections::HashMap;

/// Local, optimistic completion state layered over the stored flags.
///
/// Entries for generated tasks are the only completion state those tasks
/// ever have; they vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct CompletionOverrides {
    overrides: HashMap<TaskKey, bool>,
}

impl CompletionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &TaskKey) -> Option<bool> {
        self.overrides.get(key).copied()
    }

    /// Records `value` and returns the previous override, if any.
    pub fn set(&mut self, key: TaskKey, value: bool) -> Option<bool> {
        self.overrides.insert(key, value)
    }

    /// Puts back a previous override (or its absence).
    pub fn restore(&mut self, key: TaskKey, previous: Option<bool>) {
        match previous {
            Some(value) => {
                self.overrides.insert(key, value);
            }
            None => {
                self.overrides.remove(&key);
            }
        }
    }

    /// Completion as shown to the user: the override if one exists, else the
    /// stored flag when it was set during `current_year`.
    pub fn display_completed(&self, task: &CalendarTask, current_year: i32) -> bool {
        self.get(&task.id)
            .unwrap_or_else(|| task.is_done_in(current_year))
    }
}
