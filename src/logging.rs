//! Logging macros.
//!
//! The router logs through these macros instead of calling a backend
//! directly, so the backend is picked at compile time:
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Enable at most one of the two. With neither enabled every macro expands
//! to nothing.
//!
//! What gets logged:
//!
//! - `info_log!` when a route is registered and when the table is reset.
//! - `warn_log!` when a registration is rejected.
//! - `debug_log!` for match outcomes and dispatch decisions.
//! - `trace_log!` for per-segment trie descent and scheme stripping.
//!
//! ```ignore
//! use url_navigator::{debug_log, info_log};
//!
//! info_log!("Registered route '{}'", entry);
//! debug_log!("No route matched '{}'", url);
//! ```

/// Emit a **trace**-level message through the enabled backend.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level message through the enabled backend.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level message through the enabled backend.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level message through the enabled backend.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an **error**-level message through the enabled backend.
///
/// The router itself never logs at this level; the macro is exported for
/// handlers and navigators that want the same backend switch.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
