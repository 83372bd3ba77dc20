//! Terminal rendering of read results.

use crate::error::Result;
use crate::read::common::Item;

use colored::Colorize;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde_json::{Map, Number, Value};
use std::{fmt, io};

/// JSON view of a stored value.
///
/// Unlike [`Value`] itself this accepts binary attributes, which are shown as
/// arrays of bytes.
#[derive(Clone, Debug, PartialEq)]
struct JsonValue(Value);

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a DynamoDB attribute value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(JsonValue(Value::Bool(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(JsonValue(Value::Number(value.into())))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(JsonValue(Value::Number(value.into())))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(JsonValue(Number::from_f64(value).map_or(Value::Null, Value::Number)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(JsonValue(Value::String(value.to_string())))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(JsonValue(Value::String(value)))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        Ok(JsonValue(Value::Array(
            value.iter().map(|byte| Value::Number((*byte).into())).collect(),
        )))
    }

    fn visit_byte_buf<E: de::Error>(self, value: Vec<u8>) -> Result<Self::Value, E> {
        self.visit_bytes(&value)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(JsonValue(Value::Null))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(JsonValue(Value::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        JsonValue::deserialize(deserializer)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(JsonValue(value)) = seq.next_element()? {
            values.push(value);
        }
        Ok(JsonValue(Value::Array(values)))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut values = Map::new();
        while let Some((key, JsonValue(value))) = map.next_entry::<String, JsonValue>()? {
            values.insert(key, value);
        }
        Ok(JsonValue(Value::Object(values)))
    }
}

/// Convert a stored item into plain JSON.
pub fn item_to_json(item: &Item) -> Result<Value> {
    let value: JsonValue = serde_dynamo::from_item(item.clone())?;
    Ok(value.0)
}

/// Write every item of a page as pretty JSON, followed by the page's item count.
///
/// Output is cyan unless colouring is turned off through [`colored::control`].
pub fn render_items<W: io::Write>(out: &mut W, items: &[Item]) -> Result<()> {
    for item in items {
        let value = item_to_json(item)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?.cyan())?;
    }
    writeln!(out, "{}", format!("{} item(s) found", items.len()).cyan())?;
    Ok(())
}
