//! JSON record encoder
//!
//! Renders one [`LogEntry`] plus its fields as a single JSON object followed
//! by the layout's line ending. Keys are written in a fixed order: time,
//! level, name, caller, function, message, fields, stacktrace. A field
//! named like one of those keys is written as `fields.<key>`.

use super::encoder_config::EncoderConfig;
use super::entry::LogEntry;
use super::error::Result;
use super::field::{Field, FieldValue};
use serde_json::{Map, Value};

/// Prefix for a field whose key would shadow one of the layout's keys
pub const FIELD_KEY_PREFIX: &str = "fields.";

#[derive(Debug, Clone, Default)]
pub struct JsonEncoder {
    config: EncoderConfig,
}

impl JsonEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encode an entry into the bytes of one record, line ending included
    pub fn encode(&self, entry: &LogEntry, fields: &[Field]) -> Result<Vec<u8>> {
        let object = self.to_object(entry, fields);
        let mut buf = serde_json::to_vec(&Value::Object(object))?;
        buf.extend_from_slice(self.config.line_ending.as_bytes());
        Ok(buf)
    }

    fn to_object(&self, entry: &LogEntry, fields: &[Field]) -> Map<String, Value> {
        let config = &self.config;
        let mut json_obj = Map::new();

        if !config.time_key.is_empty() {
            json_obj.insert(config.time_key.clone(), config.encode_time.encode(&entry.time));
        }

        if !config.level_key.is_empty() {
            json_obj.insert(config.level_key.clone(), config.encode_level.encode(entry.level));
        }

        if let Some(ref name) = entry.logger_name {
            if !config.name_key.is_empty() {
                json_obj.insert(config.name_key.clone(), Value::String(name.clone()));
            }
        }

        if let Some(ref caller) = entry.caller {
            if !config.caller_key.is_empty() {
                json_obj.insert(config.caller_key.clone(), config.encode_caller.encode(caller));
            }
            if let Some(function) = caller.function {
                if !config.function_key.is_empty() {
                    json_obj.insert(
                        config.function_key.clone(),
                        Value::String(function.to_string()),
                    );
                }
            }
        }

        if !config.message_key.is_empty() {
            json_obj.insert(config.message_key.clone(), Value::String(entry.message.clone()));
        }

        for field in fields {
            let key = if self.is_layout_key(&field.key) {
                format!("{}{}", FIELD_KEY_PREFIX, field.key)
            } else {
                field.key.clone()
            };
            json_obj.insert(key, self.encode_value(&field.value));
        }

        if let Some(ref stack) = entry.stack {
            if !config.stacktrace_key.is_empty() {
                json_obj.insert(config.stacktrace_key.clone(), Value::String(stack.clone()));
            }
        }

        json_obj
    }

    /// Whether `key` is one of the layout's enabled (non-empty) keys
    fn is_layout_key(&self, key: &str) -> bool {
        let config = &self.config;
        [
            &config.time_key,
            &config.level_key,
            &config.name_key,
            &config.caller_key,
            &config.function_key,
            &config.message_key,
            &config.stacktrace_key,
        ]
        .into_iter()
        .any(|layout_key| !layout_key.is_empty() && layout_key == key)
    }

    fn encode_value(&self, value: &FieldValue) -> Value {
        match value {
            FieldValue::String(s) => Value::String(s.clone()),
            FieldValue::Int(i) => Value::from(*i),
            FieldValue::Uint(u) => Value::from(*u),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(f.to_string())),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Duration(d) => self.config.encode_duration.encode(*d),
            FieldValue::Null => Value::Null,
        }
    }
}
