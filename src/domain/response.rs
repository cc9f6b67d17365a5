use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
/// Successful provider reply.
///
/// MSG91 payloads are free-form JSON; the parsed value is preserved verbatim
/// in `raw` (an empty response body parses as `{}`). `kind` and `message` are
/// lifted out of the customary `{"type": ..., "message": ...}` shape when
/// present.
pub struct OtpReply {
    /// Provider outcome tag, usually `"success"`.
    pub kind: Option<String>,
    /// Human-readable provider message, or the request id for sends.
    pub message: Option<String>,
    /// Full parsed payload.
    pub raw: Value,
}

impl OtpReply {
    /// Borrow the full parsed payload.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consume the reply, yielding the full parsed payload.
    pub fn into_raw(self) -> Value {
        self.raw
    }
}
