//! Verbosity levels for [`Record`]s.
//!
//! A verbosity is a plain `i32` where lower numbers are more severe. A
//! [`Destination`] forwards a record when its verbosity is at or below the
//! destination's threshold, so raising the threshold lets more detail through.
//!
//! Values between the named levels are allowed: trace-style debugging output
//! commonly uses small positive numbers to express nesting depth, which the
//! indented formatter turns into indentation.
//!
//! [`Record`]: crate::Record
//! [`Destination`]: crate::Destination
use tracing::Level;

/// Unrecoverable conditions.
pub const FATAL: i32 = -20;

/// Problems that don't stop the program.
pub const WARN: i32 = -10;

/// Normal informational messages. This is the default threshold.
pub const INFO: i32 = 0;

/// Debugging detail.
pub const DEBUG: i32 = 10;

/// Very fine-grained tracing detail.
pub const TRACE: i32 = 20;

/// Returns the verbosity corresponding to a `tracing` [`Level`].
///
/// # Examples
///
/// ```
/// use screenlog::level;
///
/// assert_eq!(level::from_tracing(tracing::Level::WARN), level::WARN);
/// assert_eq!(level::from_tracing(tracing::Level::ERROR), level::FATAL);
/// ```
pub const fn from_tracing(level: Level) -> i32 {
    match level {
        Level::ERROR => FATAL,
        Level::WARN => WARN,
        Level::INFO => INFO,
        Level::DEBUG => DEBUG,
        Level::TRACE => TRACE,
    }
}

/// Returns the severity marker printed by brief-style formatters, if any.
///
/// Informational verbosities, including the trace depths between [`INFO`] and
/// [`DEBUG`], have no marker.
pub const fn marker(verbosity: i32) -> Option<&'static str> {
    if verbosity <= FATAL {
        Some("FATAL")
    } else if verbosity <= WARN {
        Some("WARNING")
    } else if verbosity >= DEBUG {
        Some("DEBUG")
    } else {
        None
    }
}
