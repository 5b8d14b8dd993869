//! Wire DTOs for the community message API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes. The backend owns `id` and
//! `timestamp`; the client only ever sends `NewMessage`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A community message as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Backend-assigned identifier, used as the rendering key.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    /// Display name of the author.
    pub sender: String,
    /// Body text.
    pub message: String,
    /// RFC 3339 timestamp recorded by the backend.
    pub timestamp: String,
}

/// Outbound payload for `POST <base>`. Both fields are already trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender: String,
    pub message: String,
}

/// Envelope returned by `POST <base>`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedMessage {
    pub data: Message,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom("expected numeric id string")),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}
