use crate::property::{keys, PropertySet, Value};
use chrono::{SecondsFormat, Utc};
#[cfg(feature = "json")]
use serde::Serialize;

/// A single log event: a set of named properties plus the metadata that
/// decides how much of it is shown.
///
/// Records are assembled before they reach a [`Formatter`]. Formatters only
/// read them, and never decide whether a record should be dropped.
///
/// # Examples
///
/// ```
/// use screenlog::{level, Record};
///
/// let record = Record::new("pipeline", level::INFO)
///     .comment("starting stage")
///     .with("NODE", 3);
///
/// assert_eq!(record.log(), "pipeline");
/// assert_eq!(record.comments().count(), 1);
/// ```
///
/// [`Formatter`]: crate::formatter::Formatter
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Record {
    /// Lower is more severe, see [`crate::level`].
    pub(crate) verbosity: i32,

    /// Forces every property to be rendered, regardless of formatter mode.
    pub(crate) show_all: bool,

    #[cfg_attr(feature = "json", serde(serialize_with = "crate::ser::properties"))]
    pub(crate) properties: PropertySet,
}

impl Record {
    /// Returns a record produced by the log named `log`.
    pub fn new(log: impl Into<String>, verbosity: i32) -> Self {
        let mut properties = PropertySet::new();
        properties.add(keys::LOG, log.into());
        Record::from_properties(properties, verbosity)
    }

    /// Returns a record wrapping an existing property set as-is.
    pub fn from_properties(properties: PropertySet, verbosity: i32) -> Self {
        Record {
            verbosity,
            show_all: false,
            properties,
        }
    }

    /// Appends a `COMMENT` property.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.properties.add(keys::COMMENT, text.into());
        self
    }

    /// Appends an arbitrary property.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.add(key, value);
        self
    }

    /// Sets whether every property is rendered regardless of formatter mode.
    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Records the current time as `TIMESTAMP` and its ISO form as `DATE`.
    pub fn stamp(mut self) -> Self {
        let now = Utc::now();
        self.properties.set(
            keys::DATE,
            now.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        self.properties.set(keys::TIMESTAMP, now);
        self
    }

    pub fn verbosity(&self) -> i32 {
        self.verbosity
    }

    pub fn will_show_all(&self) -> bool {
        self.show_all
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertySet {
        &mut self.properties
    }

    /// Returns the `LOG` name, or an empty string if it's missing.
    pub fn log(&self) -> &str {
        self.str_or_empty(keys::LOG)
    }

    /// Returns the `LABEL`, or an empty string if it's missing.
    pub fn label(&self) -> &str {
        self.str_or_empty(keys::LABEL)
    }

    /// Returns the `COMMENT`s in the order they were added.
    ///
    /// Comments that aren't strings are skipped.
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.properties
            .get_all(keys::COMMENT)
            .filter_map(Value::as_str)
    }

    fn str_or_empty(&self, key: &str) -> &str {
        self.properties
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
