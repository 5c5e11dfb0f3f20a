//! Taskly persistence layer.
//!
//! A single SQLite database holds the `tasks` table. All access goes through
//! [`DbPool`], a shared handle opened once at startup.

pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};
