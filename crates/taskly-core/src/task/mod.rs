//! Task domain model.

pub mod model;

pub use model::Task;
