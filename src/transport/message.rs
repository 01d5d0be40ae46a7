//! Wire formats shared by the inbound handler and the broker relay.
//!
//! Both directions use the same envelope: `{"message": <any>, "tags": ...}`.
//! Clients are decoded leniently (anything that is not JSON is a plain
//! message) while broker payloads are decoded strictly.

use serde_json::{Map, Value};

use crate::utils::RelayError;

/// Keepalive token sent by clients.
pub const PING: &str = "ping";

/// Reply to [`PING`].
pub const PONG: &str = "pong";

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Payload to deliver.
    pub message: Value,

    /// Target tags. `None` when the field is absent or empty.
    pub tags: Option<Vec<String>>,
}

impl Envelope {
    /// Decodes a payload received from a client.
    ///
    /// Text that is not valid JSON becomes a message-only envelope. Only a
    /// malformed `tags` field is an error.
    pub fn from_client(raw: &str) -> Result<Self, RelayError> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => Ok(Self {
                message: fields.get("message").cloned().unwrap_or(Value::Null),
                tags: tags_field(&fields)?,
            }),
            Ok(other) => Ok(Self::message_only(other)),
            Err(_) => Ok(Self::message_only(Value::String(raw.to_string()))),
        }
    }

    /// Decodes a payload published on the broker channel.
    ///
    /// The payload must be a JSON object carrying a `message` field.
    pub fn from_broker(raw: &str) -> Result<Self, RelayError> {
        let Value::Object(mut fields) = serde_json::from_str::<Value>(raw)? else {
            return Err(RelayError::NotAnObject);
        };
        let tags = tags_field(&fields)?;
        let message = fields.remove("message").ok_or(RelayError::MissingMessage)?;
        Ok(Self { message, tags })
    }

    fn message_only(message: Value) -> Self {
        Self {
            message,
            tags: None,
        }
    }

    /// Tags to broadcast to; empty means everyone.
    pub fn target_tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// Tags carried by a client registration message, if any.
///
/// Returns `Ok(None)` when the payload is not JSON or carries no tags, in
/// which case the client's tags must be left untouched.
pub fn registration_tags(raw: &str) -> Result<Option<Vec<String>>, RelayError> {
    Envelope::from_client(raw).map(|envelope| envelope.tags)
}

/// Renders a payload for an outbound text frame.
pub fn render_outbound(message: &Value) -> String {
    match message {
        Value::String(text) => text.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn tags_field(fields: &Map<String, Value>) -> Result<Option<Vec<String>>, RelayError> {
    match fields.get("tags") {
        Some(tags) if !is_blank(tags) => decode_tags(tags).map(Some),
        _ => Ok(None),
    }
}

// A scalar is wrapped as a one-element list.
fn decode_tags(value: &Value) -> Result<Vec<String>, RelayError> {
    match value {
        Value::Array(items) => items.iter().map(scalar_tag).collect(),
        other => scalar_tag(other).map(|tag| vec![tag]),
    }
}

fn scalar_tag(value: &Value) -> Result<String, RelayError> {
    match value {
        Value::String(tag) => Ok(tag.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(RelayError::InvalidTag(other.to_string())),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
