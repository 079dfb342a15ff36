//! Screen-oriented formatters.
//!
//! See [`Brief`] for more details.
use crate::formatter::{log_name, Formatter};
use crate::level;
use crate::property::keys;
use crate::record::Record;
use std::fmt::{self, Write};

/// Indentation emitted per verbosity step by [`Style::Indented`].
pub const INDENT_UNIT: &str = " ";

/// Deepest indentation [`Style::Indented`] emits, in [`INDENT_UNIT`]s.
/// Records with a higher verbosity are indented this far.
pub const MAX_INDENT_DEPTH: i32 = level::TRACE;

/// Layout variations of the [`Brief`] formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// No decoration.
    Plain,
    /// Every line is indented by the record's verbosity, up to
    /// [`MAX_INDENT_DEPTH`], so debugging messages nest below informational
    /// ones.
    Indented,
    /// Every line starts with the record's `LABEL` in brackets, so output
    /// interleaved from several producers can be told apart.
    Prepended,
}

impl Default for Style {
    fn default() -> Self {
        Style::Plain
    }
}

/// Render records in a brief format for screen display.
///
/// In normal mode, only the log name (`LOG`) and the text messages
/// (`COMMENT`) are printed, one line per message. In verbose mode, every
/// other property follows on its own line. A record whose
/// [`will_show_all`] returns `true` is always printed in verbose mode.
///
/// # Examples
///
/// ```log
/// pipeline: reading input
/// pipeline WARNING: input is empty
///   PID: 4242
///   NODE: 3
/// ```
///
/// With [`Style::Indented`], a record at verbosity 3:
/// ```log
///    pipeline: entering stage
/// ```
///
/// With [`Style::Prepended`], a record labelled `worker-2`:
/// ```log
/// [worker-2] pipeline: reading input
/// ```
///
/// [`will_show_all`]: Record::will_show_all
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Brief {
    verbose: bool,
    style: Style,
}

impl Brief {
    /// Returns a plain formatter.
    ///
    /// If `verbose` is true, all properties are printed by default.
    pub const fn new(verbose: bool) -> Self {
        Brief {
            verbose,
            style: Style::Plain,
        }
    }

    /// Returns a formatter that indents lines according to the record's
    /// verbosity.
    pub const fn indented(verbose: bool) -> Self {
        Brief {
            verbose,
            style: Style::Indented,
        }
    }

    /// Returns a formatter that prefixes lines with the record's `LABEL`.
    pub const fn prepended(verbose: bool) -> Self {
        Brief {
            verbose,
            style: Style::Prepended,
        }
    }

    /// Returns `true` if all properties are printed by default.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set whether all properties are printed by default, or just `LOG` and
    /// `COMMENT`. Records that ask to show everything override this.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Returns the layout this formatter applies to every line.
    pub fn style(&self) -> Style {
        self.style
    }

    fn is_verbose_for(&self, record: &Record) -> bool {
        self.verbose || record.will_show_all()
    }

    fn format_prefix(&self, record: &Record, buf: &mut String) -> fmt::Result {
        match self.style {
            Style::Plain => Ok(()),
            Style::Indented => {
                let depth = record.verbosity().clamp(0, MAX_INDENT_DEPTH) as usize;
                buf.push_str(&INDENT_UNIT.repeat(depth));
                Ok(())
            }
            Style::Prepended => write!(buf, "[{}] ", record.label()),
        }
    }

    fn format_header(&self, record: &Record, buf: &mut String) -> fmt::Result {
        if let Some(log) = log_name(record) {
            write!(buf, "{}", log)?;
        }

        match level::marker(record.verbosity()) {
            Some(marker) => write!(buf, " {}", marker),
            None => Ok(()),
        }
    }
}

impl Formatter for Brief {
    fn fmt(&self, record: &Record, buf: &mut String) -> fmt::Result {
        let props = record.properties();
        let mut comments = props.get_all(keys::COMMENT).peekable();

        if comments.peek().is_none() {
            self.format_prefix(record, buf)?;
            self.format_header(record, buf)?;
            writeln!(buf)?;
        }

        for comment in comments {
            self.format_prefix(record, buf)?;
            self.format_header(record, buf)?;
            writeln!(buf, ": {}", comment)?;
        }

        if self.is_verbose_for(record) {
            for name in props.names() {
                if name == keys::LOG || name == keys::COMMENT {
                    continue;
                }
                if let Some(value) = props.get(name) {
                    self.format_prefix(record, buf)?;
                    writeln!(buf, "  {}: {}", name, value)?;
                }
            }
        }

        Ok(())
    }
}
