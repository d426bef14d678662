//! API clients for external services.
//!
//! - **tasks**: the remote task service (list, fetch, create, update, delete)
//!   and the availability probe that decides the session's storage mode.

pub mod tasks;

pub use tasks::TasksApi;
