//! Core library modules for taskmate.
//!
//! - **Task model**: [`task`] (records, filters, stats) and [`error`]
//! - **Persistence**: [`store`] (local slots), [`backend`] (remote/local selection)
//! - **State**: [`manager`], the owner of the session's task list
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: [`view`]
//!
//! ```rust,no_run
//! use taskmate::libs::config::Config;
//! use taskmate::libs::data_storage::DataStorage;
//! use taskmate::libs::manager::TaskManager;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut manager = TaskManager::initialize(&Config::read()?, &DataStorage::new()).await;
//! manager.add_task("Water the plants").await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod manager;
pub mod messages;
pub mod store;
pub mod task;
pub mod view;
