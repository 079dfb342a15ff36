mod common;

use common::Buffer;
use screenlog::formatter::NetLogger;
use screenlog::printer::Printer;
use screenlog::processor::Processor;
use screenlog::{level, ScreenLog};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

#[test]
fn events_become_brief_lines() {
    let buffer = Buffer::default();
    let log = ScreenLog::builder().with_writer(buffer.clone()).build();
    let subscriber = Registry::default().with(log.into_layer());

    tracing::subscriber::with_default(subscriber, || {
        info!(target: "pipeline", "reading input");
        warn!(target: "pipeline", rows = 0, "input is empty");
        debug!(target: "pipeline", "filtered out by the threshold");
    });

    assert_eq!(
        buffer.contents(),
        "pipeline: reading input\npipeline WARNING: input is empty\n"
    );
}

#[test]
fn fields_keep_their_types() {
    let buffer = Buffer::default();
    let printer = Printer::new()
        .formatter(NetLogger::default())
        .writer(buffer.clone());
    let subscriber = Registry::default().with(printer.into_layer());

    tracing::subscriber::with_default(subscriber, || {
        info!(target: "pipeline", rows = 3, ratio = 0.5, ok = true, host = "node07", "done");
    });

    let out = buffer.contents();
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("LOG:pipeline "));
    for token in [
        "COMMENT:done",
        "rows:i:3",
        "ratio:f:0.5",
        "ok:b:true",
        "host:node07",
        "TIMESTAMP:T:",
        "DATE:",
    ] {
        assert!(out.contains(token), "missing {:?} in {:?}", token, out);
    }
}

#[test]
fn span_name_becomes_label() {
    let buffer = Buffer::default();
    let printer = Printer::new()
        .formatter(screenlog::formatter::Brief::prepended(false))
        .writer(buffer.clone());
    let subscriber = Registry::default().with(printer.into_layer());

    tracing::subscriber::with_default(subscriber, || {
        info_span!("worker-2").in_scope(|| {
            info!(target: "pipeline", "inside");
        });
        info!(target: "pipeline", "outside");
    });

    assert_eq!(
        buffer.contents(),
        "[worker-2] pipeline: inside\n[] pipeline: outside\n"
    );
}

#[test]
fn show_all_field_forces_verbose_output() {
    let buffer = Buffer::default();
    let log = Arc::new(ScreenLog::builder().with_writer(buffer.clone()).build());
    let subscriber = Registry::default().with(Arc::clone(&log).into_layer());

    tracing::subscriber::with_default(subscriber, || {
        info!(target: "pipeline", rows = 3, "quiet");
        info!(target: "pipeline", rows = 3, show_all = true, "loud");
    });

    let out = buffer.contents();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "pipeline: quiet");
    assert_eq!(lines[1], "pipeline: loud");
    assert!(lines[2..].contains(&"  rows: 3"));
    assert!(lines[2..].iter().any(|line| line.starts_with("  TIMESTAMP: ")));
    assert!(!lines.iter().any(|line| line.contains("show_all")));
    assert!(!log.is_screen_verbose());
}

#[test]
fn verbosity_follows_level() {
    assert_eq!(level::from_tracing(tracing::Level::ERROR), level::FATAL);
    assert_eq!(level::from_tracing(tracing::Level::WARN), level::WARN);
    assert_eq!(level::from_tracing(tracing::Level::INFO), level::INFO);
    assert_eq!(level::from_tracing(tracing::Level::DEBUG), level::DEBUG);
    assert_eq!(level::from_tracing(tracing::Level::TRACE), level::TRACE);
}
