//! Task domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use taskly_db::queries::tasks::TaskRow;

/// A task: a named unit of work with a priority and a deadline.
///
/// The name is the identity; storage enforces its uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub priority: i32,
    pub deadline: NaiveDate,
}

impl Task {
    /// Create a Task from a database row.
    pub fn from_row(row: TaskRow) -> Self {
        Self {
            name: row.name,
            priority: row.priority,
            deadline: row.deadline,
        }
    }
}

impl fmt::Display for Task {
    /// One listing line: `name - Priority: p, Deadline: YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Priority: {}, Deadline: {}",
            self.name,
            self.priority,
            self.deadline.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let task = Task {
            name: "write report".to_string(),
            priority: 2,
            deadline: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(task.to_string(), "write report - Priority: 2, Deadline: 2024-03-01");
    }
}
