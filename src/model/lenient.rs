//! Field deserializers for bodies sent by the Minecraft plugin and the browser.
//!
//! A field holding the wrong JSON type reads as absent instead of failing the whole
//! body, so handlers answer with their own validation message. Use together with
//! `#[serde(default)]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

/// Only a JSON boolean counts; `"true"` or `1` read as absent.
pub fn bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(value) => Some(value),
        _ => None,
    })
}

/// Accepts a JSON integer or a string holding one.
pub fn i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(value) => value
            .as_i64()
            .or_else(|| value.as_f64().map(|value| value.trunc() as i64)),
        Value::String(value) => value.trim().parse().ok(),
        _ => None,
    })
}

pub fn i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(self::i64(deserializer)?.and_then(|value| i32::try_from(value).ok()))
}
