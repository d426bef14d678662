//! # Taskmate
//!
//! A to-do list manager. Tasks live on a remote REST task service when it is
//! reachable, and in local JSON slots when it is not. The decision is made once
//! per session by probing the service.
//!
//! ## Features
//!
//! - **Task Management**: add, toggle, rename, delete, clear completed
//! - **Filtering**: all, active or completed views in insertion order
//! - **Remote Sync**: every mutation goes straight to the task service when connected
//! - **Local Fallback**: mirrored JSON slots in the platform data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
