use screenlog::formatter::netlogger::type_symbol;
use screenlog::formatter::{Formatter, NetLogger};
use screenlog::property::keys;
use screenlog::{level, Record, Value};

fn render(formatter: &NetLogger, record: &Record) -> String {
    let mut out = String::new();
    formatter.fmt(record, &mut out).expect("rendering to a String can't fail");
    out
}

#[test]
fn log_and_pid() -> Result<(), Box<dyn std::error::Error>> {
    let record = Record::new("x", level::INFO).with(keys::PID, 42);

    let mut out = Vec::new();
    NetLogger::default().write(Some(&mut out), &record)?;
    let out = String::from_utf8(out)?;

    assert_eq!(out, "LOG:x PID:i:42\n");
    assert_eq!(out.lines().count(), 1);

    Ok(())
}

#[test]
fn every_property_is_printed_regardless_of_show_all() {
    let record = Record::new("pipeline", level::INFO)
        .comment("starting")
        .with(keys::HOST, "node07")
        .with("ratio", 0.25)
        .with("dry_run", false);

    let quiet = render(&NetLogger::default(), &record);
    let loud = render(&NetLogger::default(), &record.clone().show_all(true));

    assert_eq!(
        quiet,
        "LOG:pipeline COMMENT:starting HOST:node07 ratio:f:0.25 dry_run:b:false\n"
    );
    assert_eq!(quiet, loud);
}

#[test]
fn each_comment_is_a_token() {
    let record = Record::new("app", level::INFO)
        .comment("one")
        .with(keys::NODE, 3)
        .comment("two");

    let out = render(&NetLogger::default(), &record);

    assert_eq!(out, "LOG:app COMMENT:one COMMENT:two NODE:i:3\n");
}

#[test]
fn other_repeats_use_last_value() {
    let record = Record::new("app", level::INFO)
        .with(keys::NODE, 1)
        .with(keys::NODE, 2);

    assert_eq!(render(&NetLogger::default(), &record), "LOG:app NODE:i:2\n");
}

#[test]
fn custom_delimiter() {
    let formatter = NetLogger::new("=");
    let record = Record::new("app", level::INFO).with(keys::PID, 7);

    assert_eq!(formatter.value_delimiter(), "=");
    assert_eq!(render(&formatter, &record), "LOG=app PID=i=7\n");
}

#[test]
fn strings_are_not_quoted() {
    let record = Record::new("app", level::INFO).comment("two words");

    assert_eq!(render(&NetLogger::default(), &record), "LOG:app COMMENT:two words\n");
}

#[test]
fn timestamps_are_tagged() {
    let ts = chrono::DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
        .expect("valid timestamp")
        .with_timezone(&chrono::Utc);
    let record = Record::new("app", level::INFO).with(keys::TIMESTAMP, ts);

    assert_eq!(
        render(&NetLogger::default(), &record),
        "LOG:app TIMESTAMP:T:2024-05-01T12:30:00+00:00\n"
    );
}

#[test]
fn clones_render_identically() {
    let original = NetLogger::new("|");
    let copy = original.clone();
    let record = Record::new("app", level::INFO).with(keys::PID, 1).with("ok", true);

    assert_eq!(copy, original);
    assert_eq!(render(&copy, &record), render(&original, &record));
}

#[test]
fn type_symbols() {
    assert_eq!(type_symbol(&Value::from("s")), None);
    assert_eq!(type_symbol(&Value::from(1)), Some('i'));
    assert_eq!(type_symbol(&Value::from(1.5)), Some('f'));
    assert_eq!(type_symbol(&Value::from(true)), Some('b'));
    assert_eq!(type_symbol(&Value::from(chrono::Utc::now())), Some('T'));
}

#[test]
fn none_sink_is_a_no_op() -> Result<(), Box<dyn std::error::Error>> {
    NetLogger::default().write(None, &Record::new("app", level::INFO))?;
    Ok(())
}

#[test]
fn empty_record_is_an_empty_line() {
    assert_eq!(render(&NetLogger::default(), &Record::default()), "\n");
}
