//! Bridge `tracing` events into [`Record`]s.
//!
//! See [`RecordLayer`] for more details.
use crate::level;
use crate::processor::Processor;
use crate::property::{keys, PropertySet};
use crate::record::Record;
use std::convert::TryFrom;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A [`Layer`] that turns every `tracing` event into a [`Record`] and hands it
/// to a [`Processor`].
///
/// Events are mapped as follows:
/// * `LOG` is the event's target.
/// * `LABEL` is the name of the innermost span the event occurred in, if any.
/// * `COMMENT` is the event's message.
/// * `TIMESTAMP` and `DATE` are the current time.
/// * Every other field keeps its type where possible: integers, floats and
///   booleans stay typed, anything else is recorded through its `Debug` form.
/// * A boolean `show_all` field sets [`Record::will_show_all`] instead of
///   becoming a property.
///
/// The verbosity comes from the event's level, see [`level::from_tracing`].
///
/// # Examples
///
/// ```
/// use screenlog::processor::Processor;
/// use screenlog::{level, ScreenLog};
/// use tracing_subscriber::layer::SubscriberExt;
/// use tracing_subscriber::Registry;
///
/// let log = ScreenLog::builder().threshold(level::DEBUG).build();
/// let subscriber = Registry::default().with(log.into_layer());
///
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!(attempt = 3, "connecting");
/// });
/// ```
#[derive(Clone, Debug)]
pub struct RecordLayer<P> {
    processor: P,
}

impl<P: Processor> RecordLayer<P> {
    pub fn new(processor: P) -> Self {
        RecordLayer { processor }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }
}

struct Visitor {
    properties: PropertySet,
    show_all: bool,
}

impl Visit for Visitor {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.properties.add(field.name(), value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match i64::try_from(value) {
            Ok(value) => self.properties.add(field.name(), value),
            Err(_) => self.properties.add(field.name(), value.to_string()),
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.properties.add(field.name(), value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "show_all" => self.show_all |= value,
            name => self.properties.add(name, value),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_string(field, value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_string(field, format!("{:?}", value));
    }
}

impl Visitor {
    fn record_string(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.properties.add(keys::COMMENT, value),
            name => self.properties.add(name, value),
        }
    }
}

impl<P, S> Layer<S> for RecordLayer<P>
where
    P: Processor,
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event, ctx: Context<S>) {
        let metadata = event.metadata();

        let mut visitor = Visitor {
            properties: PropertySet::new(),
            show_all: false,
        };
        visitor.properties.add(keys::LOG, metadata.target());
        if let Some(span) = ctx.event_span(event) {
            visitor.properties.add(keys::LABEL, span.name());
        }

        event.record(&mut visitor);

        let verbosity = level::from_tracing(*metadata.level());
        let record = Record::from_properties(visitor.properties, verbosity)
            .show_all(visitor.show_all)
            .stamp();

        // Logging the failure through `tracing` would re-enter this layer.
        if let Err(err) = self.processor.process(record) {
            eprintln!("screenlog: failed to write record: {}", err);
        }
    }
}
