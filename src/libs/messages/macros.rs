//! Message macros with debug-mode routing.
//!
//! In normal mode the macros print straight to the terminal (`println!`, or
//! `eprintln!` for errors). When debug mode is on they emit tracing events
//! instead, so notifications interleave with the core's own logging.
//!
//! Debug mode is on when either `TASKMATE_DEBUG` or `RUST_LOG` is set. The check
//! runs once and is cached.
//!
//! ```rust
//! use taskmate::{msg_error, msg_success};
//! use taskmate::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated);
//! msg_error!(Message::TaskNotFound(42));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Environment variable that switches message output to tracing.
pub const DEBUG_ENV: &str = "TASKMATE_DEBUG";

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($event:ident, $print:ident, $fmt:literal, $msg:expr) => {{
        let message = $msg;
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$event!($fmt, message);
        } else {
            $print!($fmt, message);
        }
    }};
}

/// Prints a plain message. Pass `true` to pad it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ {}", $msg)
    };
}

/// Errors go to stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ {}", $msg)
    };
}
