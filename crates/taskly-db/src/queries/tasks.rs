//! Task-related database queries.
//!
//! The whole SQL surface of the application: four parameterized statements
//! against the `tasks` table, keyed by the unique task name. Mutating
//! statements return the affected-row count so callers can tell whether the
//! call was a logical no-op.

use crate::pool::{DbError, DbPool, DbResult};
use chrono::NaiveDate;
use rusqlite::params;

/// Task row from database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub name: String,
    pub priority: i32,
    pub deadline: NaiveDate,
}

/// Insert a new task. A task with the same name already present makes this
/// a silent no-op (returns 0).
pub fn insert_task(pool: &DbPool, name: &str, priority: i32, deadline: NaiveDate) -> DbResult<usize> {
    pool.with_conn(|conn| {
        let changed = conn.execute(
            "INSERT INTO tasks (task_name, priority, deadline)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(task_name) DO NOTHING",
            params![name, priority, deadline],
        )?;
        Ok(changed)
    })
}

/// List all tasks, ordered by name ascending.
pub fn list_tasks(pool: &DbPool) -> DbResult<Vec<TaskRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT task_name, priority, deadline
             FROM tasks
             ORDER BY task_name ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(TaskRow {
                name: row.get(0)?,
                priority: row.get(1)?,
                deadline: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// Delete a task by name. Absent name is a no-op (returns 0).
pub fn delete_task(pool: &DbPool, name: &str) -> DbResult<usize> {
    pool.with_conn(|conn| {
        let changed = conn.execute("DELETE FROM tasks WHERE task_name = ?1", params![name])?;
        Ok(changed)
    })
}

/// Overwrite name, priority and deadline of the row matching `old_name`.
/// Absent `old_name` is a no-op (returns 0). The new name is not checked for
/// collision; a clash with another row surfaces as a constraint error.
pub fn update_task(
    pool: &DbPool,
    old_name: &str,
    new_name: &str,
    priority: i32,
    deadline: NaiveDate,
) -> DbResult<usize> {
    pool.with_conn(|conn| {
        let changed = conn.execute(
            "UPDATE tasks SET task_name = ?1, priority = ?2, deadline = ?3
             WHERE task_name = ?4",
            params![new_name, priority, deadline, old_name],
        )?;
        Ok(changed)
    })
}
