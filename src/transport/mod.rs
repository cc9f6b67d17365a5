//! Transport layer: query-string encoding and response normalization.

mod response;
mod retry;
mod send;
mod verify;

pub use response::{ResponseError, decode_reply};
pub use retry::encode_retry_query;
pub use send::encode_send_query;
pub use verify::encode_verify_query;
