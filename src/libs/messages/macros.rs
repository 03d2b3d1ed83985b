//! Output macros with tracing-aware routing.
//!
//! Every macro takes anything implementing `Display` (usually a [`Message`]).
//! When `TODO_LIST_DEBUG` or `RUST_LOG` is set the text goes through
//! `tracing` so it interleaves with the server's structured logs; otherwise it
//! is printed to stdout/stderr for a plain CLI experience.
//!
//! | Macro           | Prefix | Debug mode         | Normal mode      |
//! |-----------------|--------|--------------------|------------------|
//! | `msg_print!`    |        | `tracing::info!`   | `println!`       |
//! | `msg_success!`  | ✅     | `tracing::info!`   | `println!`       |
//! | `msg_error!`    | ❌     | `tracing::error!`  | `eprintln!`      |
//! | `msg_info!`     | ℹ️     | `tracing::info!`   | `println!`       |
//! | `msg_debug!`    | 🔍     | `tracing::debug!`  | suppressed       |
//!
//! Passing `true` as a second argument surrounds the line with blank lines.
//!
//! [`Message`]: crate::libs::messages::Message

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when output should be routed through `tracing`.
///
/// Checked once per process; later changes to the environment are ignored.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TODO_LIST_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $fmt:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!($fmt, $msg);
        } else {
            $print!($fmt, $msg);
        }
    };
}

/// Prints a plain message.
///
/// ```rust,ignore
/// msg_print!(Message::MigrationHistory, true);
/// ```
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
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n✅ {}\n", $msg)
    };
}

/// Goes to stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "\n❌ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\nℹ️ {}\n", $msg)
    };
}

/// Debug-only message. Produces no output outside debug mode.
///
/// ```rust,ignore
/// msg_debug!(format!("Fetching tasks with filter {:?}", filter));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
