use crate::domain::{
    ContactNumber, MessageTemplate, OtpCode, OtpExpiryMinutes, OtpLength, OtpSettings, SendOtp,
    SenderId,
};

pub fn encode_send_query(settings: &OtpSettings, request: &SendOtp) -> Vec<(String, String)> {
    let message = match request.otp() {
        Some(otp) => settings.template.render(otp),
        None => settings.template.as_str().to_owned(),
    };

    let mut params = vec![
        (
            ContactNumber::FIELD.to_owned(),
            request.contact().raw().to_owned(),
        ),
        (
            SenderId::FIELD.to_owned(),
            request.sender().as_str().to_owned(),
        ),
        (MessageTemplate::FIELD.to_owned(), message),
        (
            OtpExpiryMinutes::FIELD.to_owned(),
            settings.expiry.value().to_string(),
        ),
        (
            OtpLength::FIELD.to_owned(),
            settings.length.value().to_string(),
        ),
    ];

    if let Some(otp) = request.otp() {
        params.push((OtpCode::FIELD.to_owned(), otp.as_str().to_owned()));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> OtpSettings {
        OtpSettings::default()
    }

    fn contact() -> ContactNumber {
        ContactNumber::new("919999999999").unwrap()
    }

    fn sender() -> SenderId {
        SenderId::new("OTPSMS").unwrap()
    }

    #[test]
    fn encode_without_custom_otp_leaves_template_untouched() {
        let request = SendOtp::new(contact(), sender());
        let params = encode_send_query(&settings(), &request);

        assert_eq!(
            params,
            vec![
                ("mobile".to_owned(), "919999999999".to_owned()),
                ("sender".to_owned(), "OTPSMS".to_owned()),
                ("message".to_owned(), "Your otp is ##OTP##.".to_owned()),
                ("otp_expiry".to_owned(), "1440".to_owned()),
                ("otp_length".to_owned(), "4".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_with_custom_otp_substitutes_and_adds_param() {
        let otp = OtpCode::new("4821").unwrap();
        let request = SendOtp::with_code(contact(), sender(), otp);
        let params = encode_send_query(&settings(), &request);

        assert_eq!(
            params,
            vec![
                ("mobile".to_owned(), "919999999999".to_owned()),
                ("sender".to_owned(), "OTPSMS".to_owned()),
                ("message".to_owned(), "Your otp is 4821.".to_owned()),
                ("otp_expiry".to_owned(), "1440".to_owned()),
                ("otp_length".to_owned(), "4".to_owned()),
                ("otp".to_owned(), "4821".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_reflects_overridden_settings() {
        let settings = OtpSettings {
            template: MessageTemplate::new("##OTP## is your login code").unwrap(),
            expiry: OtpExpiryMinutes::new(5),
            length: OtpLength::new(6).unwrap(),
        };
        let otp = OtpCode::new("482135").unwrap();
        let request = SendOtp::with_code(contact(), sender(), otp);
        let params = encode_send_query(&settings, &request);

        assert!(
            params.contains(&("message".to_owned(), "482135 is your login code".to_owned()))
        );
        assert!(params.contains(&("otp_expiry".to_owned(), "5".to_owned())));
        assert!(params.contains(&("otp_length".to_owned(), "6".to_owned())));
    }
}
