use crate::property::{PropertySet, Value};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Timestamp(ts) => serializer.serialize_str(&ts.to_rfc3339()),
        }
    }
}

struct Values<'a>(&'a PropertySet, &'a str);

impl Serialize for Values<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for value in self.0.get_all(self.1) {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

// Names with one value map to that value, repeated names map to an array.
pub(crate) fn properties<S: Serializer>(
    properties: &PropertySet,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let names = properties.names();
    let mut model = serializer.serialize_map(Some(names.len()))?;
    for name in names {
        if properties.get_all(name).nth(1).is_some() {
            model.serialize_entry(name, &Values(properties, name))?;
        } else if let Some(value) = properties.get(name) {
            model.serialize_entry(name, value)?;
        }
    }
    model.end()
}
