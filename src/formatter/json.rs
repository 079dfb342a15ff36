//! A [`Formatter`] that renders records as JSON objects.
//!
//! See [`Json`] for more details.
use crate::formatter::Formatter;
use crate::record::Record;
use std::fmt;

/// Render records as JSON objects, one per line in compact mode.
///
/// Names carrying a single value map to that value. Names carrying several
/// values, typically `COMMENT`, map to an array.
#[derive(Clone, Debug)]
pub struct Json<F> {
    _marker: F,
}

/// A flag for compact formatting.
///
/// See [`Json::compact`] for details.
#[derive(Clone, Debug)]
pub struct Compact(());

impl Json<Compact> {
    /// Create a new [`Json`] formatter with compact formatting.
    ///
    /// # Example
    /// ```
    /// # use screenlog::formatter::{Formatter, Json};
    /// # use screenlog::{level, Record};
    /// let record = Record::new("app", level::INFO).comment("hi").with("PID", 7);
    /// let mut out = String::new();
    /// Json::compact().fmt(&record, &mut out).unwrap();
    /// ```
    /// ```json
    /// {"verbosity":0,"show_all":false,"properties":{"LOG":"app","COMMENT":"hi","PID":7}}
    /// ```
    pub const fn compact() -> Self {
        Json {
            _marker: Compact(()),
        }
    }
}

impl Formatter for Json<Compact> {
    fn fmt(&self, record: &Record, buf: &mut String) -> fmt::Result {
        let json = serde_json::to_string(record).map_err(|_| fmt::Error)?;
        buf.push_str(&json);
        buf.push('\n');
        Ok(())
    }
}

/// A flag for pretty formatting.
///
/// See [`Json::pretty`] for details.
#[derive(Clone, Debug)]
pub struct Pretty(());

impl Json<Pretty> {
    /// Create a new [`Json`] formatter with pretty formatting.
    ///
    /// ```json
    /// {
    ///   "verbosity": 0,
    ///   "show_all": false,
    ///   "properties": {
    ///     "LOG": "app",
    ///     "COMMENT": [
    ///       "first",
    ///       "second"
    ///     ]
    ///   }
    /// }
    /// ```
    pub const fn pretty() -> Self {
        Json {
            _marker: Pretty(()),
        }
    }
}

impl Formatter for Json<Pretty> {
    fn fmt(&self, record: &Record, buf: &mut String) -> fmt::Result {
        let json = serde_json::to_string_pretty(record).map_err(|_| fmt::Error)?;
        buf.push_str(&json);
        buf.push('\n');
        Ok(())
    }
}
