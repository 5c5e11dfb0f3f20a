//! Application facade.
//!
//! [`Taskly`] coordinates the persistence gateway and the notification
//! dispatcher per user action: mutate (or query), then fan out a
//! human-readable message. Notification is not gated on the write having
//! changed anything: a duplicate add still announces "task added".

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{TasklyError, TasklyResult};
use crate::notify::NotificationManager;
use crate::sort::{sort_tasks, SortKey};
use crate::task::Task;
use taskly_db::queries::tasks as queries;
use taskly_db::DbPool;

/// The task manager facade.
pub struct Taskly {
    pool: DbPool,
    notifications: NotificationManager,
}

impl Taskly {
    /// Build the facade from an opened pool and a configured dispatcher.
    pub fn new(pool: DbPool, notifications: NotificationManager) -> Self {
        Self {
            pool,
            notifications,
        }
    }

    /// Add a task. A task of the same name already present makes the insert
    /// a silent no-op; the notification fires either way.
    pub async fn add_task(&self, name: &str, priority: i32, deadline: NaiveDate) -> TasklyResult<()> {
        validate_name(name)?;

        let changed = queries::insert_task(&self.pool, name, priority, deadline)?;
        debug!(name = %name, changed, "Task insert");

        let message = format!(
            "New task added: {} with priority {} due on {}",
            name,
            priority,
            deadline.format("%Y-%m-%d")
        );
        self.notifications.notify(&message).await
    }

    /// Overwrite name, priority and deadline of the task named `old_name`.
    /// An absent `old_name` is a silent no-op; the notification fires either
    /// way.
    pub async fn update_task(
        &self,
        old_name: &str,
        new_name: &str,
        priority: i32,
        deadline: NaiveDate,
    ) -> TasklyResult<()> {
        validate_name(new_name)?;

        let changed = queries::update_task(&self.pool, old_name, new_name, priority, deadline)?;
        debug!(old_name = %old_name, new_name = %new_name, changed, "Task update");

        let message = format!(
            "Task updated: {} to name {}, priority {}, and deadline {}",
            old_name,
            new_name,
            priority,
            deadline.format("%Y-%m-%d")
        );
        self.notifications.notify(&message).await
    }

    /// Delete a task by name. An absent name is a silent no-op; the
    /// notification fires either way.
    pub async fn delete_task(&self, name: &str) -> TasklyResult<()> {
        let changed = queries::delete_task(&self.pool, name)?;
        debug!(name = %name, changed, "Task delete");

        let message = format!("Task deleted: {}", name);
        self.notifications.notify(&message).await
    }

    /// All tasks, ordered by name ascending.
    pub fn tasks(&self) -> TasklyResult<Vec<Task>> {
        let rows = queries::list_tasks(&self.pool)?;
        Ok(rows.into_iter().map(Task::from_row).collect())
    }

    /// Render the task listing sorted by the chosen strategy, one task per
    /// line.
    pub fn display_tasks(&self, key: SortKey, ascending: bool) -> TasklyResult<String> {
        let sorted = sort_tasks(self.tasks()?, key, ascending);
        let lines: Vec<String> = sorted.iter().map(ToString::to_string).collect();
        Ok(lines.join("\n"))
    }
}

fn validate_name(name: &str) -> TasklyResult<()> {
    if name.trim().is_empty() {
        return Err(TasklyError::validation("task name must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notifier;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use taskly_db::migrations::run_migrations;

    struct Recording(Arc<Mutex<Vec<String>>>);

    #[async_trait]
    impl Notifier for Recording {
        async fn notify(&self, message: &str) -> TasklyResult<()> {
            self.0.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    fn test_app() -> (Taskly, Arc<Mutex<Vec<String>>>) {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();

        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifications = NotificationManager::new();
        notifications.register(Box::new(Recording(log.clone())));

        (Taskly::new(pool, notifications), log)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_add_notifies_once_with_name() {
        let (app, log) = test_app();

        app.add_task("write report", 2, date("2024-03-01")).await.unwrap();

        let messages = log.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("write report"));
        assert_eq!(
            messages[0],
            "New task added: write report with priority 2 due on 2024-03-01"
        );
    }

    #[tokio::test]
    async fn test_duplicate_add_notifies_but_does_not_duplicate() {
        let (app, log) = test_app();

        app.add_task("laundry", 1, date("2024-01-01")).await.unwrap();
        app.add_task("laundry", 9, date("2024-12-31")).await.unwrap();

        // One row, but two notifications: a no-op write still announces
        assert_eq!(app.tasks().unwrap().len(), 1);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_renames_and_notifies() {
        let (app, log) = test_app();
        app.add_task("A", 1, date("2024-01-01")).await.unwrap();

        app.update_task("A", "B", 5, date("2024-06-30")).await.unwrap();

        let tasks = app.tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "B");
        assert_eq!(tasks[0].priority, 5);
        assert_eq!(tasks[0].deadline, date("2024-06-30"));

        let messages = log.lock().unwrap();
        assert_eq!(
            messages.last().unwrap(),
            "Task updated: A to name B, priority 5, and deadline 2024-06-30"
        );
    }

    #[tokio::test]
    async fn test_delete_missing_notifies_and_leaves_table_unchanged() {
        let (app, log) = test_app();
        app.add_task("keep me", 1, date("2024-01-01")).await.unwrap();

        app.delete_task("no such task").await.unwrap();

        assert_eq!(app.tasks().unwrap().len(), 1);
        let messages = log.lock().unwrap();
        assert_eq!(messages.last().unwrap(), "Task deleted: no such task");
    }

    #[tokio::test]
    async fn test_display_by_deadline_ascending() {
        let (app, _log) = test_app();
        app.add_task("X", 1, date("2024-05-01")).await.unwrap();
        app.add_task("Y", 1, date("2024-01-01")).await.unwrap();
        app.add_task("Z", 1, date("2024-03-01")).await.unwrap();

        let listing = app.display_tasks(SortKey::Deadline, true).unwrap();
        assert_eq!(
            listing,
            "Y - Priority: 1, Deadline: 2024-01-01\n\
             Z - Priority: 1, Deadline: 2024-03-01\n\
             X - Priority: 1, Deadline: 2024-05-01"
        );
    }

    #[tokio::test]
    async fn test_blank_name_rejected_without_notification() {
        let (app, log) = test_app();

        let err = app.add_task("   ", 1, date("2024-01-01")).await;
        assert!(matches!(err, Err(TasklyError::Validation(_))));
        assert!(log.lock().unwrap().is_empty());
    }
}
