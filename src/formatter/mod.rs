//! Trait for rendering records as text.
//!
//! See [`Formatter`] for more details.
use crate::cfg_json;
use crate::property::{keys, Value};
use crate::record::Record;
use std::fmt;
use std::io;
use std::sync::Arc;

pub mod brief;
pub use brief::{Brief, Style};

pub mod netlogger;
pub use netlogger::NetLogger;

cfg_json! {
    pub mod json;
    pub use json::Json;
}

/// A type that renders [`Record`]s into a text stream.
///
/// Formatters never filter: whatever record they are handed is rendered.
/// Deciding whether a record reaches a stream at all is the job of a
/// [`Destination`] or whoever calls the formatter.
///
/// Implementors only provide [`fmt`], which renders into an in-memory
/// buffer. [`write`] then hands the whole rendering to the stream at once.
///
/// [`Destination`]: crate::Destination
/// [`fmt`]: Formatter::fmt
/// [`write`]: Formatter::write
pub trait Formatter {
    /// Render a [`Record`] into a buffer, including the trailing newline.
    fn fmt(&self, record: &Record, buf: &mut String) -> fmt::Result;

    /// Write a [`Record`] to a stream.
    ///
    /// If `sink` is `None`, nothing is written and `Ok(())` is returned.
    ///
    /// # Errors
    ///
    /// Errors from the stream are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use screenlog::formatter::{Brief, Formatter};
    /// use screenlog::{level, Record};
    ///
    /// let record = Record::new("app", level::INFO).comment("hello");
    /// let mut out = Vec::new();
    /// Brief::new(false).write(Some(&mut out), &record).unwrap();
    /// Brief::new(false).write(None, &record).unwrap();
    ///
    /// assert_eq!(out, b"app: hello\n");
    /// ```
    fn write(&self, sink: Option<&mut dyn io::Write>, record: &Record) -> io::Result<()> {
        let sink = match sink {
            Some(sink) => sink,
            None => return Ok(()),
        };

        let mut buf = String::with_capacity(256);
        self.fmt(record, &mut buf)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

        sink.write_all(buf.as_bytes())
    }
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn fmt(&self, record: &Record, buf: &mut String) -> fmt::Result {
        (**self).fmt(record, buf)
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn fmt(&self, record: &Record, buf: &mut String) -> fmt::Result {
        self.as_ref().fmt(record, buf)
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn fmt(&self, record: &Record, buf: &mut String) -> fmt::Result {
        self.as_ref().fmt(record, buf)
    }
}

// The `LOG` name, whatever its type. Missing names render empty.
pub(crate) fn log_name(record: &Record) -> Option<&Value> {
    record.properties().get(keys::LOG)
}
