//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{OtpSettings, RetryChannel, RetryOtp, SendOtp, VerifyOtp};
pub use response::OtpReply;
pub use validation::ValidationError;
pub use value::{
    AuthKey, ContactNumber, MessageTemplate, OtpCode, OtpExpiryMinutes, OtpLength, PhoneNumber,
    SenderId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_key_rejects_empty() {
        assert!(matches!(
            AuthKey::new("   "),
            Err(ValidationError::Empty {
                field: AuthKey::FIELD
            })
        ));
    }

    #[test]
    fn contact_number_from_parsed_phone_uses_bare_digits() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::IN), " 9999999999 ").unwrap();
        let contact: ContactNumber = pn.into();
        assert_eq!(contact.raw(), "919999999999");
    }

    #[test]
    fn otp_length_range_is_enforced() {
        assert!(OtpLength::new(3).is_err());
        assert!(OtpLength::new(4).is_ok());
        assert!(OtpLength::new(9).is_ok());
        assert!(OtpLength::new(10).is_err());
    }

    #[test]
    fn retry_channel_wire_values() {
        assert_eq!(RetryChannel::Voice.as_str(), "voice");
        assert_eq!(RetryChannel::Text.as_str(), "text");
    }

    #[test]
    fn send_otp_accessors_expose_parts() {
        let contact = ContactNumber::new("919999999999").unwrap();
        let sender = SenderId::new("OTPSMS").unwrap();

        let request = SendOtp::new(contact.clone(), sender.clone());
        assert!(request.otp().is_none());

        let otp = OtpCode::new("1234").unwrap();
        let request = SendOtp::with_code(contact, sender, otp.clone());
        assert_eq!(request.otp(), Some(&otp));
        assert_eq!(request.contact().raw(), "919999999999");
        assert_eq!(request.sender().as_str(), "OTPSMS");
    }

    #[test]
    fn default_settings_match_provider_defaults() {
        let settings = OtpSettings::default();
        assert_eq!(settings.template.as_str(), "Your otp is ##OTP##.");
        assert_eq!(settings.expiry.value(), 1440);
        assert_eq!(settings.length.value(), 4);
    }
}
