//! Typed name/value properties carried by a [`Record`].
//!
//! [`Record`]: crate::Record
use chrono::{DateTime, Utc};
use std::fmt;

/// Property names with a defined meaning.
///
/// Only [`LOG`](keys::LOG) is guaranteed to appear in a record. There may be
/// several [`COMMENT`](keys::COMMENT) properties, each a complete thought. All
/// other names should carry a single value; if several are present, the last
/// one is the valid one.
pub mod keys {
    /// The name of the log that produced the message.
    pub const LOG: &str = "LOG";
    /// Extra information associated with a log, used to group output.
    pub const LABEL: &str = "LABEL";
    /// A text message.
    pub const COMMENT: &str = "COMMENT";
    /// When the message was recorded.
    pub const TIMESTAMP: &str = "TIMESTAMP";
    /// The value of `TIMESTAMP` in ISO format.
    pub const DATE: &str = "DATE";
    /// The hostname of the machine.
    pub const HOST: &str = "HOST";
    /// The IP address of the host.
    pub const IP: &str = "IP";
    /// The process id of the application.
    pub const PID: &str = "PID";
    /// A logical node id in a multi-process application.
    pub const NODE: &str = "NODE";
}

/// The value of a single property.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Text, printed as-is.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean, printed as `true` or `false`.
    Bool(bool),
    /// A point in time, printed in RFC 3339 form.
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Returns the string slice if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => fmt::Display::fmt(i, f),
            Value::Float(x) => fmt::Display::fmt(x, f),
            Value::Bool(b) => fmt::Display::fmt(b, f),
            Value::Timestamp(ts) => f.write_str(&ts.to_rfc3339()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

/// A single name/value pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub(crate) key: String,
    pub(crate) value: Value,
}

impl Property {
    /// Returns a property named `key` holding `value`.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Property {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the case-sensitive property name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the property value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[cfg(feature = "smallvec")]
type Entries = smallvec::SmallVec<[Property; 8]>;

#[cfg(not(feature = "smallvec"))]
type Entries = Vec<Property>;

/// An ordered multi-map from case-sensitive names to [`Value`]s.
///
/// Entries keep their insertion order. Adding a name that is already present
/// appends another value rather than replacing the old one, so repeated
/// `COMMENT`s are all kept.
///
/// # Examples
///
/// ```
/// use screenlog::property::{keys, PropertySet, Value};
///
/// let mut props = PropertySet::new();
/// props.add(keys::LOG, "app");
/// props.add(keys::COMMENT, "first");
/// props.add(keys::COMMENT, "second");
/// props.add(keys::PID, 42);
///
/// assert_eq!(props.get(keys::PID), Some(&Value::Int(42)));
/// assert_eq!(props.get_all(keys::COMMENT).count(), 2);
/// assert_eq!(props.names(), vec![keys::LOG, keys::COMMENT, keys::PID]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertySet {
    entries: Entries,
}

impl PropertySet {
    pub fn new() -> Self {
        PropertySet::default()
    }

    /// Appends a value, keeping any values already stored under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.push(Property::new(key, value));
    }

    /// Replaces every value stored under `key` with a single value.
    ///
    /// The new value takes the position of the first value it replaces, or
    /// goes to the end if `key` wasn't present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter().position(|p| p.key == key) {
            Some(first) => {
                self.entries[first].value = value;
                let mut index = 0;
                self.entries.retain(|p| {
                    let keep = p.key != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.entries.push(Property { key, value }),
        }
    }

    /// Returns the last value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|p| p.key == key)
            .map(|p| &p.value)
    }

    /// Returns every value stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries
            .iter()
            .filter(move |p| p.key == key)
            .map(|p| &p.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|p| p.key == key)
    }

    /// Returns each distinct name once, ordered by first insertion.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.entries.len());
        for p in self.entries.iter() {
            if !names.contains(&p.key.as_str()) {
                names.push(&p.key);
            }
        }
        names
    }

    /// Appends every entry of `other` after the entries of `self`.
    pub fn extend(&mut self, other: &PropertySet) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// Iterates over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    /// Returns the number of entries, counting repeated names separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for PropertySet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = PropertySet::new();
        for (key, value) in iter {
            set.add(key, value);
        }
        set
    }
}
