//! Sort strategies for task listings.
//!
//! A closed set of two orderings. Both directions use a stable sort, so
//! tasks with equal keys keep their original relative order; descending
//! reverses the comparator, not the result.

use crate::task::Task;

/// Key to order a task listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Priority,
    Deadline,
}

impl SortKey {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "priority" => Some(Self::Priority),
            "deadline" => Some(Self::Deadline),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Deadline => "deadline",
        }
    }
}

/// Return `tasks` ordered by `key` in the given direction.
pub fn sort_tasks(mut tasks: Vec<Task>, key: SortKey, ascending: bool) -> Vec<Task> {
    match (key, ascending) {
        (SortKey::Priority, true) => tasks.sort_by(|a, b| a.priority.cmp(&b.priority)),
        (SortKey::Priority, false) => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        (SortKey::Deadline, true) => tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        (SortKey::Deadline, false) => tasks.sort_by(|a, b| b.deadline.cmp(&a.deadline)),
    }
    tasks
}
