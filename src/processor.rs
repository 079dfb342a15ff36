//! Trait for consuming finished records.
//!
//! See [`Processor`] for more details.
use crate::layer::RecordLayer;
use crate::record::Record;
use crate::screen;
use std::io;
use std::sync::Arc;

/// A type that can consume [`Record`]s.
///
/// `Processor`s are responsible for both formatting and writing records to
/// their intended destinations. This is typically implemented using a
/// [`Formatter`], a [`MakeWriter`] and possibly a threshold, as in
/// [`ScreenLog`].
///
/// [`Formatter`]: crate::formatter::Formatter
/// [`MakeWriter`]: tracing_subscriber::fmt::MakeWriter
/// [`ScreenLog`]: crate::ScreenLog
pub trait Processor: 'static + Sized {
    /// Process a [`Record`], for example by writing it to stdout.
    ///
    /// # Errors
    ///
    /// Errors from the underlying stream are returned unchanged.
    fn process(&self, record: Record) -> io::Result<()>;

    /// Converts the [`Processor`] into a [`RecordLayer`].
    ///
    /// This is the same as `RecordLayer::new(processor)`.
    fn into_layer(self) -> RecordLayer<Self> {
        RecordLayer::new(self)
    }
}

/// A [`Processor`] that forwards records to the default screen log.
///
/// Records are silently dropped until
/// [`ScreenLog::create_default_log`][create] has been called, and while the
/// current thread is inside [`with_default_log`][with].
///
/// [create]: crate::ScreenLog::create_default_log
/// [with]: crate::screen::with_default_log
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLog;

impl Processor for DefaultLog {
    fn process(&self, record: Record) -> io::Result<()> {
        screen::with_default_log(|log| log.log_record(record)).unwrap_or(Ok(()))
    }
}

impl<P: Processor> Processor for Arc<P> {
    fn process(&self, record: Record) -> io::Result<()> {
        self.as_ref().process(record)
    }
}
