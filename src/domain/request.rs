use crate::domain::value::{
    ContactNumber, MessageTemplate, OtpCode, OtpExpiryMinutes, OtpLength, SenderId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Delivery channel used when asking MSG91 to re-send an OTP (`retrytype`).
///
/// This is a provider-side re-delivery choice, not a network-level retry.
pub enum RetryChannel {
    /// Re-deliver via an automated voice call.
    Voice,
    /// Re-deliver via a text message.
    Text,
}

impl RetryChannel {
    /// Query parameter name used by MSG91 (`retrytype`).
    pub const FIELD: &'static str = "retrytype";

    /// Wire value for this channel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Voice => "voice",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Per-client OTP configuration forwarded with every send request.
pub struct OtpSettings {
    pub template: MessageTemplate,
    pub expiry: OtpExpiryMinutes,
    pub length: OtpLength,
}

#[derive(Debug, Clone)]
/// Request to deliver an OTP via `sendotp.php`.
///
/// With a custom code the template placeholder is substituted and the code is
/// forwarded in the `otp` parameter; without one the provider generates the
/// code and renders the template server-side.
pub struct SendOtp {
    contact: ContactNumber,
    sender: SenderId,
    otp: Option<OtpCode>,
}

impl SendOtp {
    /// Request a provider-generated OTP.
    pub fn new(contact: ContactNumber, sender: SenderId) -> Self {
        Self {
            contact,
            sender,
            otp: None,
        }
    }

    /// Request delivery of a caller-supplied OTP.
    ///
    /// The code's character count must match the client's configured
    /// [`OtpLength`]; [`SendOtpClient::send`](crate::SendOtpClient::send)
    /// rejects the request before any I/O otherwise.
    pub fn with_code(contact: ContactNumber, sender: SenderId, otp: OtpCode) -> Self {
        Self {
            contact,
            sender,
            otp: Some(otp),
        }
    }

    pub fn contact(&self) -> &ContactNumber {
        &self.contact
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn otp(&self) -> Option<&OtpCode> {
        self.otp.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Request to re-deliver a previously sent OTP via `retryotp.php`.
pub struct RetryOtp {
    contact: ContactNumber,
    channel: RetryChannel,
}

impl RetryOtp {
    pub fn new(contact: ContactNumber, channel: RetryChannel) -> Self {
        Self { contact, channel }
    }

    pub fn contact(&self) -> &ContactNumber {
        &self.contact
    }

    pub fn channel(&self) -> RetryChannel {
        self.channel
    }
}

#[derive(Debug, Clone)]
/// Request to check a user-submitted OTP via `verifyRequestOTP.php`.
///
/// The submitted value is forwarded as-is; no length check is applied, since
/// mistyped input is exactly what verification is for.
pub struct VerifyOtp {
    contact: ContactNumber,
    otp: OtpCode,
}

impl VerifyOtp {
    pub fn new(contact: ContactNumber, otp: OtpCode) -> Self {
        Self { contact, otp }
    }

    pub fn contact(&self) -> &ContactNumber {
        &self.contact
    }

    pub fn otp(&self) -> &OtpCode {
        &self.otp
    }
}
