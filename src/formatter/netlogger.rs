//! A [`Formatter`] producing NetLogger-style `key:value` lines.
//!
//! See [`NetLogger`] for more details.
use crate::formatter::Formatter;
use crate::property::{keys, Value};
use crate::record::Record;
use std::fmt::{self, Write};

/// Render records as a single line of `name:value` tokens.
///
/// This is the format read by downstream event collectors, so every property
/// is always printed and nothing is quoted. Non-string values carry a type
/// symbol between the name and the value:
///
/// | value       | symbol |
/// |-------------|--------|
/// | `Str`       | none   |
/// | `Int`       | `i`    |
/// | `Float`     | `f`    |
/// | `Bool`      | `b`    |
/// | `Timestamp` | `T`    |
///
/// Each `COMMENT` becomes its own token. Any other name with several values is
/// printed once, with its last value.
///
/// # Examples
///
/// ```
/// use screenlog::formatter::{Formatter, NetLogger};
/// use screenlog::{level, Record};
///
/// let record = Record::new("x", level::INFO).with("PID", 42);
/// let mut line = String::new();
/// NetLogger::default().fmt(&record, &mut line).unwrap();
///
/// assert_eq!(line, "LOG:x PID:i:42\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetLogger {
    delimiter: String,
}

impl NetLogger {
    /// The delimiter placed between a name and its value by default.
    pub const DEFAULT_VALUE_DELIMITER: &'static str = ":";

    /// Returns a formatter separating names and values with `delimiter`.
    pub fn new(delimiter: impl Into<String>) -> Self {
        NetLogger {
            delimiter: delimiter.into(),
        }
    }

    /// Returns the string placed between a property name and its value.
    pub fn value_delimiter(&self) -> &str {
        &self.delimiter
    }

    fn format_token(&self, key: &str, value: &Value, buf: &mut String) -> fmt::Result {
        buf.push_str(key);
        if let Some(symbol) = type_symbol(value) {
            write!(buf, "{}{}", self.delimiter, symbol)?;
        }
        write!(buf, "{}{}", self.delimiter, value)
    }
}

impl Default for NetLogger {
    fn default() -> Self {
        NetLogger::new(Self::DEFAULT_VALUE_DELIMITER)
    }
}

impl Formatter for NetLogger {
    fn fmt(&self, record: &Record, buf: &mut String) -> fmt::Result {
        let props = record.properties();
        let mut tokens: Vec<(&str, &Value)> = Vec::with_capacity(props.len());

        for name in props.names() {
            if name == keys::COMMENT {
                tokens.extend(props.get_all(name).map(|value| (name, value)));
            } else if let Some(value) = props.get(name) {
                tokens.push((name, value));
            }
        }

        for (i, (name, value)) in tokens.into_iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            self.format_token(name, value, buf)?;
        }

        writeln!(buf)
    }
}

/// Returns the symbol identifying the type of `value`, or `None` for strings.
pub const fn type_symbol(value: &Value) -> Option<char> {
    match value {
        Value::Str(_) => None,
        Value::Int(_) => Some('i'),
        Value::Float(_) => Some('f'),
        Value::Bool(_) => Some('b'),
        Value::Timestamp(_) => Some('T'),
    }
}
