//! Utilities for writing formatted records to streams.
use crate::formatter::{Brief, Formatter};
use crate::processor::Processor;
use crate::record::Record;
use std::io;
use tracing_subscriber::fmt::MakeWriter;

/// The stream a [`ScreenLog`] writes to unless the builder is given another.
///
/// Any [`MakeWriter`] works as a destination. This one exists so the default
/// writer can be named in `ScreenLog<MakeStdout>`, which a bare function item
/// like [`std::io::stdout`] can't be.
///
/// [`ScreenLog`]: crate::ScreenLog
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeStdout;

impl<'a> MakeWriter<'a> for MakeStdout {
    type Writer = io::Stdout;

    fn make_writer(&'a self) -> Self::Writer {
        io::stdout()
    }
}

/// A [`Processor`] that formats and writes every record it receives.
///
/// Unlike a [`ScreenLog`], a `Printer` has no threshold and no preamble, which
/// makes it the simplest way to pair any [`Formatter`] with a stream.
///
/// # Examples
///
/// Writing NetLogger lines to stderr:
/// ```
/// use screenlog::formatter::NetLogger;
/// use screenlog::printer::Printer;
/// use screenlog::processor::Processor;
/// use screenlog::{level, Record};
///
/// let printer = Printer::new().formatter(NetLogger::default()).writer(std::io::stderr);
/// printer.process(Record::new("app", level::INFO).comment("ready")).unwrap();
/// ```
///
/// [`ScreenLog`]: crate::ScreenLog
#[derive(Clone, Debug)]
pub struct Printer<F, W> {
    formatter: F,
    make_writer: W,
}

impl Printer<Brief, MakeStdout> {
    /// Returns a [`Printer`] writing brief records to stdout.
    ///
    /// Use [`Printer::formatter`] and [`Printer::writer`] for custom configuration.
    pub const fn new() -> Self {
        Printer {
            formatter: Brief::new(false),
            make_writer: MakeStdout,
        }
    }
}

impl Default for Printer<Brief, MakeStdout> {
    fn default() -> Self {
        Printer::new()
    }
}

impl<F, W> Printer<F, W>
where
    F: 'static + Formatter,
    W: 'static + for<'a> MakeWriter<'a>,
{
    /// Set the formatter.
    pub fn formatter<F2>(self, formatter: F2) -> Printer<F2, W>
    where
        F2: 'static + Formatter,
    {
        Printer {
            formatter,
            make_writer: self.make_writer,
        }
    }

    /// Set the writer.
    pub fn writer<W2>(self, make_writer: W2) -> Printer<F, W2>
    where
        W2: 'static + for<'a> MakeWriter<'a>,
    {
        Printer {
            formatter: self.formatter,
            make_writer,
        }
    }
}

impl<F, W> Processor for Printer<F, W>
where
    F: 'static + Formatter,
    W: 'static + for<'a> MakeWriter<'a>,
{
    fn process(&self, record: Record) -> io::Result<()> {
        let mut writer = self.make_writer.make_writer();
        self.formatter.write(Some(&mut writer), &record)
    }
}
