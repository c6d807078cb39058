//! JSON tree decoding shared by the search and category fetchers.
//!
//! Responses are parsed into a generic [`Value`] tree and walked by key, so
//! fields the upstream adds later are ignored. Values of the wrong type are
//! coerced rather than rejected:
//!
//! | JSON value | [`as_text`]             | [`as_int`]                     |
//! |------------|-------------------------|--------------------------------|
//! | string     | as-is                   | parsed if numeric, else `0`    |
//! | number     | JSON textual form       | truncated, clamped to `i32`    |
//! | boolean    | `"true"` / `"false"`    | `1` / `0`                      |
//! | null       | `""`                    | `0`                            |
//! | array/obj  | `""`                    | `0`                            |
//!
//! Only an absent key is an error ([`FetchError::MissingField`]).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FetchError;

/// How category ids and names are matched up in the category response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPairing {
    /// Flatten every `id` and every `name` in the tree separately and pair
    /// them by index. Misaligns silently if the tree is asymmetric.
    #[default]
    Positional,
    /// Read `id` and `name` from the same JSON object.
    ObjectScoped,
}

/// Immutable decoder settings, built once and borrowed by every fetcher.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    pairing: CategoryPairing,
}

impl JsonDecoder {
    pub fn new(pairing: CategoryPairing) -> Self {
        Self { pairing }
    }

    pub fn pairing(&self) -> CategoryPairing {
        self.pairing
    }

    pub fn parse(&self, body: &str) -> Result<Value, FetchError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn required<'v>(
        &self,
        node: &'v Value,
        field: &'static str,
    ) -> Result<&'v Value, FetchError> {
        node.get(field).ok_or(FetchError::MissingField(field))
    }

    pub fn text(&self, node: &Value, field: &'static str) -> Result<String, FetchError> {
        self.required(node, field).map(as_text)
    }

    pub fn int(&self, node: &Value, field: &'static str) -> Result<i32, FetchError> {
        self.required(node, field).map(as_int)
    }
}

pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

pub fn as_int(value: &Value) -> i32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                clamp_i64(i)
            } else if n.as_u64().is_some() {
                i32::MAX
            } else {
                // `as` saturates and maps NaN to zero
                n.as_f64().map(|f| f as i32).unwrap_or(0)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .map(clamp_i64)
                .or_else(|_| s.parse::<f64>().map(|f| f as i32))
                .unwrap_or(0)
        }
        Value::Bool(b) => i32::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

fn clamp_i64(i: i64) -> i32 {
    i.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Every value stored under `key` anywhere below `node`, in document order.
///
/// A matched value is not searched any further.
pub fn find_values<'v>(node: &'v Value, key: &str) -> Vec<&'v Value> {
    let mut found = Vec::new();
    collect_values(node, key, &mut found);
    found
}

fn collect_values<'v>(node: &'v Value, key: &str, found: &mut Vec<&'v Value>) {
    match node {
        Value::Object(map) => {
            for (k, v) in map {
                if k == key {
                    found.push(v);
                } else {
                    collect_values(v, key, found);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_values(item, key, found);
            }
        }
        _ => {}
    }
}

/// Every object below `node` (itself included) that carries `key`, in
/// document order.
pub fn find_objects_with<'v>(node: &'v Value, key: &str) -> Vec<&'v Map<String, Value>> {
    let mut found = Vec::new();
    collect_objects(node, key, &mut found);
    found
}

fn collect_objects<'v>(node: &'v Value, key: &str, found: &mut Vec<&'v Map<String, Value>>) {
    match node {
        Value::Object(map) => {
            if map.contains_key(key) {
                found.push(map);
            }
            for (k, v) in map {
                if k != key {
                    collect_objects(v, key, found);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_objects(item, key, found);
            }
        }
        _ => {}
    }
}
