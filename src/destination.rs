use crate::formatter::Formatter;
use crate::record::Record;
use std::io;
use tracing_subscriber::fmt::MakeWriter;

/// A stream paired with a verbosity threshold.
///
/// The threshold is consulted before a record is handed to a formatter:
/// records whose verbosity is above it are not written at all. Formatters
/// themselves never filter.
///
/// The stream is produced on demand by a [`MakeWriter`], such as
/// [`std::io::stdout`].
#[derive(Clone, Debug)]
pub struct Destination<W> {
    make_writer: W,
    threshold: i32,
}

impl<W> Destination<W>
where
    W: for<'a> MakeWriter<'a>,
{
    pub fn new(make_writer: W, threshold: i32) -> Self {
        Destination {
            make_writer,
            threshold,
        }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: i32) {
        self.threshold = threshold;
    }

    /// Returns `true` if a record at `verbosity` passes the threshold.
    pub fn accepts(&self, verbosity: i32) -> bool {
        verbosity <= self.threshold
    }

    /// Format `record` to the stream if it passes the threshold.
    ///
    /// Returns whether the record was written.
    ///
    /// # Errors
    ///
    /// Errors from the stream are returned unchanged.
    pub fn write<F>(&self, formatter: &F, record: &Record) -> io::Result<bool>
    where
        F: Formatter + ?Sized,
    {
        if !self.accepts(record.verbosity()) {
            return Ok(false);
        }

        let mut writer = self.make_writer.make_writer();
        formatter.write(Some(&mut writer), record)?;
        Ok(true)
    }
}
