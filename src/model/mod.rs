//! Domain model: the unified [`task::Task`] entity and the
//! provider-record-to-task projections.

pub mod task;

pub use task::{Task, TaskSource};
