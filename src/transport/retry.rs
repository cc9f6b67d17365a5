use crate::domain::{ContactNumber, RetryChannel, RetryOtp};

pub fn encode_retry_query(request: &RetryOtp) -> Vec<(String, String)> {
    vec![
        (
            ContactNumber::FIELD.to_owned(),
            request.contact().raw().to_owned(),
        ),
        (
            RetryChannel::FIELD.to_owned(),
            request.channel().as_str().to_owned(),
        ),
    ]
}
