//! A log that writes brief records to the screen.
//!
//! See [`ScreenLog`] for more details.
use crate::destination::Destination;
use crate::error::InstallError;
use crate::formatter::Brief;
use crate::level;
use crate::printer::MakeStdout;
use crate::processor::Processor;
use crate::property::{keys, PropertySet};
use crate::record::Record;
use once_cell::sync::OnceCell;
use std::cell::Cell;
use std::io;
use std::sync::{Mutex, PoisonError};
use tracing_subscriber::fmt::{MakeWriter, TestWriter};

static DEFAULT_LOG: OnceCell<Mutex<ScreenLog>> = OnceCell::new();

thread_local! {
    static IN_DEFAULT_LOG: Cell<bool> = Cell::new(false);
}

/// A log configured to send messages to the screen, formatted by a [`Brief`]
/// formatter.
///
/// Every record logged through a `ScreenLog` is stamped with its preamble,
/// which always contains the log's name as `LOG`. Records above the screen
/// threshold are dropped before they reach the formatter.
///
/// # Examples
///
/// ```
/// use screenlog::{level, ScreenLog};
///
/// let mut log = ScreenLog::new(false, level::INFO, None);
/// log.log(level::INFO, "shown").unwrap();
/// log.log(level::DEBUG, "dropped").unwrap();
///
/// log.set_screen_threshold(level::DEBUG);
/// log.set_screen_verbose(true);
/// log.log(level::DEBUG, "now shown, with every property").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ScreenLog<W = MakeStdout> {
    preamble: PropertySet,
    screen: Destination<W>,
    formatter: Brief,
}

impl ScreenLog {
    /// Returns a nameless log writing to stdout.
    ///
    /// If `verbose` is true, every property of a record is printed, not just
    /// `LOG` and `COMMENT`. `preamble` lists properties added to every record;
    /// the log name is added to it as `LOG`.
    pub fn new(verbose: bool, threshold: i32, preamble: Option<PropertySet>) -> Self {
        let mut builder = ScreenLog::builder().verbose(verbose).threshold(threshold);
        if let Some(preamble) = preamble {
            builder = builder.preamble(preamble);
        }
        builder.build()
    }

    /// Returns a [`ScreenLogBuilder`] writing to stdout at [`level::INFO`].
    pub fn builder() -> ScreenLogBuilder<MakeStdout> {
        ScreenLogBuilder {
            name: String::new(),
            verbose: false,
            threshold: level::INFO,
            preamble: PropertySet::new(),
            make_writer: MakeStdout,
        }
    }

    /// Create a new screen log and install it as the process-wide default.
    ///
    /// The default log can be installed only once. Install it before any
    /// thread starts logging through [`with_default_log`] or
    /// [`DefaultLog`](crate::processor::DefaultLog).
    ///
    /// # Errors
    ///
    /// Returns [`InstallError`] if a default log was already installed. The
    /// existing log is left untouched.
    pub fn create_default_log(
        verbose: bool,
        threshold: i32,
        preamble: Option<PropertySet>,
    ) -> Result<(), InstallError> {
        let log = ScreenLog::new(verbose, threshold, preamble);
        DEFAULT_LOG
            .set(Mutex::new(log))
            .map_err(|_| InstallError(()))?;

        tracing::debug!(verbose, threshold, "installed default screen log");
        Ok(())
    }
}

impl Default for ScreenLog {
    fn default() -> Self {
        ScreenLog::builder().build()
    }
}

impl<W> ScreenLog<W>
where
    W: for<'a> MakeWriter<'a>,
{
    /// Returns the name stamped on every record as `LOG`.
    pub fn name(&self) -> &str {
        self.preamble
            .get(keys::LOG)
            .and_then(|value| value.as_str())
            .unwrap_or("")
    }

    /// Returns the properties added to every record, starting with `LOG`.
    pub fn preamble(&self) -> &PropertySet {
        &self.preamble
    }

    /// Returns the verbosity threshold currently set for the screen.
    pub fn screen_threshold(&self) -> i32 {
        self.screen.threshold()
    }

    /// Set the verbosity threshold for the screen.
    pub fn set_screen_threshold(&mut self, threshold: i32) {
        self.screen.set_threshold(threshold);
    }

    /// Returns `true` if every property is printed to the screen, or `false`
    /// if just `LOG` and `COMMENT` are printed.
    pub fn is_screen_verbose(&self) -> bool {
        self.formatter.is_verbose()
    }

    /// Set whether every property is printed to the screen, or just `LOG` and
    /// `COMMENT`.
    pub fn set_screen_verbose(&mut self, verbose: bool) {
        self.formatter.set_verbose(verbose);
    }

    /// Returns the formatter used for the screen.
    pub fn formatter(&self) -> &Brief {
        &self.formatter
    }

    /// Returns `true` if a record at `verbosity` would reach the screen.
    pub fn will_log(&self, verbosity: i32) -> bool {
        self.screen.accepts(verbosity)
    }

    /// Log a single comment at `verbosity`.
    ///
    /// # Errors
    ///
    /// Errors from the screen stream are returned unchanged.
    pub fn log(&self, verbosity: i32, comment: impl Into<String>) -> io::Result<()> {
        let record = Record::from_properties(PropertySet::new(), verbosity).comment(comment);
        self.log_record(record)
    }

    /// Stamp `record` with the preamble and write it to the screen if it
    /// passes the threshold.
    ///
    /// Preamble properties come first, so a property set on the record itself
    /// takes precedence over a preamble property with the same name.
    ///
    /// # Errors
    ///
    /// Errors from the screen stream are returned unchanged.
    pub fn log_record(&self, record: Record) -> io::Result<()> {
        // No `tracing` events here: a `RecordLayer` wrapping this log would
        // receive them and recurse.
        if !self.will_log(record.verbosity()) {
            return Ok(());
        }

        let mut properties = self.preamble.clone();
        properties.extend(record.properties());
        let record = Record::from_properties(properties, record.verbosity())
            .show_all(record.will_show_all());

        self.screen.write(&self.formatter, &record).map(drop)
    }
}

impl<W> Processor for ScreenLog<W>
where
    W: 'static + for<'a> MakeWriter<'a>,
{
    fn process(&self, record: Record) -> io::Result<()> {
        self.log_record(record)
    }
}

/// Run `f` with the default screen log.
///
/// Returns `None` if [`ScreenLog::create_default_log`] hasn't been called.
/// There is no implicit creation.
///
/// The default log stays locked while `f` runs. A call made from inside `f` on
/// the same thread returns `None` without running its closure. This includes
/// records that reach [`DefaultLog`] through `tracing` events fired in `f`,
/// which are dropped.
///
/// [`DefaultLog`]: crate::processor::DefaultLog
///
/// # Examples
///
/// ```
/// use screenlog::{level, screen, ScreenLog};
///
/// assert!(screen::with_default_log(|_| ()).is_none());
///
/// ScreenLog::create_default_log(false, level::INFO, None).unwrap();
/// screen::with_default_log(|log| log.set_screen_verbose(true));
/// assert_eq!(screen::with_default_log(|log| log.is_screen_verbose()), Some(true));
/// ```
pub fn with_default_log<R>(f: impl FnOnce(&mut ScreenLog) -> R) -> Option<R> {
    let log = DEFAULT_LOG.get()?;
    let _entered = Entered::enter()?;
    let mut guard = log.lock().unwrap_or_else(PoisonError::into_inner);
    Some(f(&mut *guard))
}

// Marks the current thread as holding the default log until dropped.
struct Entered(());

impl Entered {
    fn enter() -> Option<Self> {
        if IN_DEFAULT_LOG.with(|entered| entered.replace(true)) {
            None
        } else {
            Some(Entered(()))
        }
    }
}

impl Drop for Entered {
    fn drop(&mut self) {
        IN_DEFAULT_LOG.with(|entered| entered.set(false));
    }
}

/// A type for configuring [`ScreenLog`]s.
///
/// Created by [`ScreenLog::builder`].
///
/// # Examples
///
/// ```
/// use screenlog::{level, PropertySet, ScreenLog};
///
/// let mut preamble = PropertySet::new();
/// preamble.add("NODE", 3);
///
/// let log = ScreenLog::builder()
///     .name("pipeline")
///     .verbose(true)
///     .threshold(level::DEBUG)
///     .preamble(preamble)
///     .with_writer(std::io::stderr)
///     .build();
///
/// assert_eq!(log.name(), "pipeline");
/// ```
#[derive(Clone, Debug)]
pub struct ScreenLogBuilder<W> {
    name: String,
    verbose: bool,
    threshold: i32,
    preamble: PropertySet,
    make_writer: W,
}

impl<W> ScreenLogBuilder<W>
where
    W: for<'a> MakeWriter<'a>,
{
    /// Set the name stamped on every record as `LOG`. Defaults to the empty
    /// name of the root log.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set whether every property is printed by default.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the screen threshold. Defaults to [`level::INFO`].
    pub fn threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set properties to include with every record.
    pub fn preamble(mut self, preamble: PropertySet) -> Self {
        self.preamble = preamble;
        self
    }

    /// Applies the specified [`MakeWriter`].
    pub fn with_writer<W2>(self, make_writer: W2) -> ScreenLogBuilder<W2>
    where
        W2: for<'a> MakeWriter<'a>,
    {
        ScreenLogBuilder {
            name: self.name,
            verbose: self.verbose,
            threshold: self.threshold,
            preamble: self.preamble,
            make_writer,
        }
    }

    /// Applies a writer that is suitable for test environments.
    pub fn with_test_writer(self) -> ScreenLogBuilder<TestWriter> {
        self.with_writer(TestWriter::new())
    }

    pub fn build(self) -> ScreenLog<W> {
        let mut preamble = PropertySet::new();
        preamble.add(keys::LOG, self.name);
        preamble.extend(&self.preamble);

        ScreenLog {
            preamble,
            screen: Destination::new(self.make_writer, self.threshold),
            formatter: Brief::new(self.verbose),
        }
    }
}
