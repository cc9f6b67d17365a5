use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::OtpReply;

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("invalid JSON response (HTTP {status}): {source}")]
    Parse {
        status: u16,
        body: String,
        source: serde_json::Error,
    },

    #[error("provider reported errors")]
    Provider { errors: Value, data: Value },

    #[error("unexpected HTTP status: {status}")]
    Status { status: u16, data: Value },
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ReplyEnvelope {
    #[serde(rename = "type", default)]
    kind: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

/// Map an HTTP response onto the uniform reply contract.
///
/// Resolution order is fixed: parse failure, then the provider's `errors`
/// key, then the HTTP status class, then success. The `errors` check runs
/// before the status check because MSG91 is known to deliver error payloads
/// with a 200 status; presence of the key counts, whatever its value.
pub fn decode_reply(status: u16, body: &str) -> Result<OtpReply, ResponseError> {
    // An empty string is a valid response.
    let raw: Value = if body.is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_str(body).map_err(|source| ResponseError::Parse {
            status,
            body: body.to_owned(),
            source,
        })?
    };

    if let Some(errors) = raw.get("errors").cloned() {
        return Err(ResponseError::Provider { errors, data: raw });
    }

    if !(200..=299).contains(&status) {
        return Err(ResponseError::Status { status, data: raw });
    }

    Ok(reply_from_value(raw))
}

fn reply_from_value(raw: Value) -> OtpReply {
    let envelope = match &raw {
        Value::Object(_) => {
            serde_json::from_value::<ReplyEnvelope>(raw.clone()).unwrap_or_default()
        }
        _ => ReplyEnvelope::default(),
    };

    OtpReply {
        kind: envelope
            .kind
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_owned),
        message: envelope
            .message
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_owned),
        raw,
    }
}
