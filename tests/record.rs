use screenlog::property::{keys, Property};
use screenlog::{level, record, PropertySet, Record, Value};

#[test]
fn set_replaces_all_values_in_place() {
    let mut props = PropertySet::new();
    props.add(keys::LOG, "app");
    props.add(keys::NODE, 1);
    props.add(keys::PID, 10);
    props.add(keys::NODE, 2);

    props.set(keys::NODE, 3);

    assert_eq!(props.names(), vec![keys::LOG, keys::NODE, keys::PID]);
    assert_eq!(props.get_all(keys::NODE).count(), 1);
    assert_eq!(props.get(keys::NODE), Some(&Value::Int(3)));
    assert_eq!(props.len(), 3);
}

#[test]
fn set_appends_missing_names() {
    let mut props = PropertySet::new();
    props.set(keys::HOST, "node07");

    assert!(props.contains(keys::HOST));
    assert_eq!(props.get(keys::HOST).and_then(Value::as_str), Some("node07"));
}

#[test]
fn names_are_case_sensitive() {
    let mut props = PropertySet::new();
    props.add("log", "lower");
    props.add(keys::LOG, "upper");

    assert_eq!(props.names(), vec!["log", keys::LOG]);
    assert_eq!(props.get("Log"), None);
}

#[test]
fn extend_keeps_order() {
    let mut preamble: PropertySet = vec![(keys::LOG, "app"), (keys::HOST, "node07")]
        .into_iter()
        .collect();
    let mut own = PropertySet::new();
    own.add(keys::COMMENT, "hi");
    own.add(keys::HOST, "node08");

    preamble.extend(&own);

    assert_eq!(preamble.names(), vec![keys::LOG, keys::HOST, keys::COMMENT]);
    assert_eq!(preamble.get(keys::HOST).and_then(Value::as_str), Some("node08"));
    assert_eq!(preamble.iter().count(), 4);
}

#[test]
fn record_accessors() {
    let record = Record::new("app", level::DEBUG)
        .with(keys::LABEL, "worker-1")
        .comment("a")
        .with(keys::COMMENT, 5)
        .comment("b");

    assert_eq!(record.log(), "app");
    assert_eq!(record.label(), "worker-1");
    assert_eq!(record.verbosity(), level::DEBUG);
    assert!(!record.will_show_all());
    assert_eq!(record.comments().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn missing_reserved_names_are_empty() {
    let record = Record::default();

    assert_eq!(record.log(), "");
    assert_eq!(record.label(), "");
    assert_eq!(record.comments().count(), 0);
    assert!(record.properties().is_empty());
}

#[test]
fn stamp_sets_timestamp_and_date_once() {
    let record = Record::new("app", level::INFO).stamp().stamp();
    let props = record.properties();

    assert_eq!(props.get_all(keys::TIMESTAMP).count(), 1);
    assert_eq!(props.get_all(keys::DATE).count(), 1);

    let date = props
        .get(keys::DATE)
        .and_then(Value::as_str)
        .expect("DATE is a string");
    let parsed = chrono::DateTime::parse_from_rfc3339(date).expect("DATE is ISO 8601");
    match props.get(keys::TIMESTAMP) {
        Some(Value::Timestamp(ts)) => {
            assert_eq!(parsed.timestamp_millis(), ts.timestamp_millis())
        }
        other => panic!("unexpected TIMESTAMP {:?}", other),
    }
}

#[test]
fn record_macro() {
    let record = record!("pipeline", level::WARN, "input is empty", PID = 4242, HOST = "node07",);

    assert_eq!(record.log(), "pipeline");
    assert_eq!(record.verbosity(), level::WARN);
    assert_eq!(record.comments().collect::<Vec<_>>(), vec!["input is empty"]);
    assert_eq!(record.properties().get(keys::PID), Some(&Value::Int(4242)));
    assert_eq!(
        record.properties().get(keys::HOST).and_then(Value::as_str),
        Some("node07")
    );
}

#[test]
fn value_display() {
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::from(-3i64).to_string(), "-3");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
    assert_eq!(Value::from(false).to_string(), "false");
}

#[test]
fn properties_iterate_in_insertion_order() {
    let record = Record::new("app", level::INFO).with(keys::PID, 7).comment("hi");
    let pairs: Vec<(&str, String)> = record
        .properties()
        .iter()
        .map(|p| (p.key(), p.value().to_string()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            (keys::LOG, "app".to_string()),
            (keys::PID, "7".to_string()),
            (keys::COMMENT, "hi".to_string()),
        ]
    );
    assert_eq!(Property::new("ok", true).value(), &Value::Bool(true));
}
