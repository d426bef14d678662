//! User-facing messages.
//!
//! Every notification the command layer prints is a [`Message`] variant; its
//! text lives in [`display`]. The macros in [`macros`] decide whether a message
//! goes to the terminal or to the tracing subscriber.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
