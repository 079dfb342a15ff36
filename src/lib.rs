//! Render property-based log records as text.
//!
//! # Overview
//!
//! A [`Record`] is a set of named, typed properties plus a verbosity level.
//! A few property names carry a defined meaning (see [`property::keys`]):
//! `LOG` names the log that produced the record, `COMMENT` holds a text
//! message and may repeat, `LABEL` groups output from related producers, and
//! so on.
//!
//! A [`Formatter`] renders a record into a text stream. This crate provides:
//!
//! * [`Brief`]: the log name and messages, plus every other property in
//!   verbose mode. [`Style::Indented`] nests lines by verbosity and
//!   [`Style::Prepended`] prefixes them with the record's label.
//! * [`NetLogger`]: one machine-readable line of `name:value` tokens.
//! * `Json` (with the `json` feature): one JSON object per record.
//!
//! A [`ScreenLog`] ties a [`Brief`] formatter to stdout through a
//! [`Destination`], which drops records above a verbosity threshold.
//!
//! # Getting started
//!
//! ```
//! use screenlog::{level, Record, ScreenLog};
//!
//! let log = ScreenLog::builder().name("pipeline").build();
//!
//! log.log(level::INFO, "reading input").unwrap();
//! log.log_record(
//!     Record::new("pipeline.io", level::WARN)
//!         .comment("input is empty")
//!         .with("PID", 4242)
//!         .show_all(true),
//! )
//! .unwrap();
//! ```
//! ```log
//! pipeline: reading input
//! pipeline.io WARNING: input is empty
//!   PID: 4242
//! ```
//!
//! # Using with `tracing`
//!
//! Every [`Processor`], including [`ScreenLog`] and [`Printer`], converts into
//! a [`RecordLayer`], a [`tracing_subscriber::Layer`] that turns `tracing`
//! events into records.
//!
//! ```
//! use screenlog::processor::{DefaultLog, Processor};
//! use screenlog::{level, ScreenLog};
//! use tracing_subscriber::layer::SubscriberExt;
//! use tracing_subscriber::Registry;
//!
//! ScreenLog::create_default_log(false, level::INFO, None).unwrap();
//!
//! let subscriber = Registry::default().with(DefaultLog.into_layer());
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!("Hello, world!");
//! });
//! ```
//! ```log
//! rust_out: Hello, world!
//! ```
//!
//! # Feature flags
//!
//! * `full`: Enables all features listed below.
//! * `json`: Enables the `Json` formatter and `Serialize` for records.
//! * `smallvec`: Stores small property sets on the stack.
//!
//! [`Formatter`]: formatter::Formatter
//! [`Brief`]: formatter::Brief
//! [`Style::Indented`]: formatter::Style::Indented
//! [`Style::Prepended`]: formatter::Style::Prepended
//! [`NetLogger`]: formatter::NetLogger
//! [`Processor`]: processor::Processor
//! [`Printer`]: printer::Printer
//! [`RecordLayer`]: layer::RecordLayer

pub mod formatter;
pub mod layer;
pub mod level;
pub mod printer;
pub mod processor;
pub mod property;
pub mod screen;
#[doc(hidden)]
#[macro_use]
mod cfg;
#[macro_use]
mod macros;
mod destination;
mod error;
mod record;
#[cfg(feature = "json")]
mod ser;

pub use crate::destination::Destination;
pub use crate::error::InstallError;
pub use crate::property::{PropertySet, Value};
pub use crate::record::Record;
pub use crate::screen::{ScreenLog, ScreenLogBuilder};
