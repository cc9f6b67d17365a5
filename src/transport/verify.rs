use crate::domain::{ContactNumber, OtpCode, VerifyOtp};

pub fn encode_verify_query(request: &VerifyOtp) -> Vec<(String, String)> {
    vec![
        (
            ContactNumber::FIELD.to_owned(),
            request.contact().raw().to_owned(),
        ),
        (OtpCode::FIELD.to_owned(), request.otp().as_str().to_owned()),
    ]
}
