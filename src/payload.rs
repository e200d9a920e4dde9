use crate::error::{FormPostError, Result};
use serde_json::{Map, Value};

/// Where the payload travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Body,
    Header,
    Query,
}

impl Channel {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "body" => Ok(Channel::Body),
            "header" => Ok(Channel::Header),
            "query" => Ok(Channel::Query),
            other => Err(FormPostError::Payload(format!(
                "unknown channel '{}' (expected body, header, or query)",
                other
            ))),
        }
    }
}

/// Parse `key=value` command-line items into ordered pairs.
///
/// The split happens on the first `=`, so values may contain `=` themselves.
/// `key=` yields an empty value. Order is preserved so form bodies and query
/// strings come out deterministic.
pub fn parse_pairs(items: &[String]) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(items.len());

    for item in items {
        let (key, value) = item.split_once('=').ok_or_else(|| {
            FormPostError::Payload(format!("missing '=' in data item '{}'", item))
        })?;

        if key.is_empty() {
            return Err(FormPostError::Payload(format!(
                "empty key in data item '{}'",
                item
            )));
        }

        pairs.push((key.to_string(), value.to_string()));
    }

    Ok(pairs)
}

/// Build a flat JSON object from the pairs. Duplicate keys keep the last value.
pub fn to_json_object(pairs: &[(String, String)]) -> Value {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert(key.clone(), Value::String(value.clone()));
    }
    Value::Object(map)
}
