use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MSG91 `authkey` token.
///
/// Invariant: non-empty after trimming.
pub struct AuthKey(String);

impl AuthKey {
    /// Query parameter name used by MSG91 (`authkey`).
    pub const FIELD: &'static str = "authkey";

    /// Create a validated [`AuthKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated mobile number as sent to MSG91 (`mobile`), country code included.
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want E.164 parsing, go through [`PhoneNumber`] and convert it into a
/// [`ContactNumber`].
pub struct ContactNumber(String);

impl ContactNumber {
    /// Query parameter name used by MSG91 (`mobile`).
    pub const FIELD: &'static str = "mobile";

    /// Create a validated (non-empty) contact number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to MSG91.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for ContactNumber {
    /// Convert a parsed phone number into the wire form MSG91 expects:
    /// E.164 digits without the leading `+`.
    fn from(value: PhoneNumber) -> Self {
        match value.e164.strip_prefix('+') {
            Some(digits) => Self(digits.to_owned()),
            None => Self(value.e164),
        }
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: ContactNumber::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MSG91 sender id (`sender`).
///
/// Invariant: non-empty after trimming. The value must be approved for your
/// MSG91 account.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by MSG91 (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One-time password value (`otp`).
///
/// Invariant: must not be empty. The value is preserved as provided; whether
/// its length matches the configured [`OtpLength`] is checked at send time,
/// not here (verification passes arbitrary user input through).
pub struct OtpCode(String);

impl OtpCode {
    /// Query parameter name used by MSG91 (`otp`).
    pub const FIELD: &'static str = "otp";

    /// Create a validated (non-empty) OTP value.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the OTP value as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the value.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<u32> for OtpCode {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS body template (`message`).
///
/// The literal token `##OTP##` marks where a custom OTP is substituted. Its
/// presence is not validated; a template without it is sent as-is even in
/// custom-OTP mode.
pub struct MessageTemplate(String);

impl MessageTemplate {
    /// Query parameter name used by MSG91 (`message`).
    pub const FIELD: &'static str = "message";

    /// Placeholder token replaced by the OTP value.
    pub const PLACEHOLDER: &'static str = "##OTP##";

    /// Create a validated (non-empty after trimming) template.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the template text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute the first occurrence of [`MessageTemplate::PLACEHOLDER`]
    /// with the given OTP.
    pub fn render(&self, otp: &OtpCode) -> String {
        self.0.replacen(Self::PLACEHOLDER, otp.as_str(), 1)
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self("Your otp is ##OTP##.".to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Digit count for provider-generated OTPs (`otp_length`).
///
/// Invariant: `4..=9`.
pub struct OtpLength(u8);

impl OtpLength {
    /// Query parameter name used by MSG91 (`otp_length`).
    pub const FIELD: &'static str = "otp_length";

    /// Minimum allowed length.
    pub const MIN: u8 = 4;
    /// Maximum allowed length.
    pub const MAX: u8 = 9;

    /// Create a validated length value.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OtpLengthOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying length.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for OtpLength {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// OTP validity window in minutes (`otp_expiry`).
///
/// MSG91 documents the accepted range as `1..=1440` (one day). The range is
/// not enforced here; out-of-range values are forwarded and rejected by the
/// provider.
pub struct OtpExpiryMinutes(u16);

impl OtpExpiryMinutes {
    /// Query parameter name used by MSG91 (`otp_expiry`).
    pub const FIELD: &'static str = "otp_expiry";

    /// Smallest value MSG91 documents as accepted.
    pub const MIN: u16 = 1;
    /// Largest value MSG91 documents as accepted (one day).
    pub const MAX: u16 = 1440;

    /// Create an expiry value (no range validation is performed).
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the underlying expiry in minutes.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for OtpExpiryMinutes {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let auth = AuthKey::new("  key ").unwrap();
        assert_eq!(auth.as_str(), "key");
        assert!(AuthKey::new("  ").is_err());

        let contact = ContactNumber::new(" 919999999999 ").unwrap();
        assert_eq!(contact.raw(), "919999999999");
        assert!(ContactNumber::new("").is_err());

        let sender = SenderId::new(" OTPSMS ").unwrap();
        assert_eq!(sender.as_str(), "OTPSMS");
        assert!(SenderId::new("  ").is_err());

        let otp = OtpCode::new("1234").unwrap();
        assert_eq!(otp.as_str(), "1234");
        assert_eq!(otp.char_count(), 4);
        assert!(OtpCode::new("").is_err());
    }

    #[test]
    fn otp_code_from_integer_stringifies() {
        let otp = OtpCode::from(4096u32);
        assert_eq!(otp.as_str(), "4096");
        assert_eq!(otp.char_count(), 4);
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+919999999999").unwrap();
        let p2 = PhoneNumber::parse(None, "+91 99999 99999").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+919999999999");
        assert_eq!(p1.raw(), "+919999999999");

        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
        assert!(PhoneNumber::parse(None, "  ").is_err());
    }

    #[test]
    fn contact_number_from_phone_number_drops_plus() {
        let parsed = PhoneNumber::parse(None, "+91 99999 99999").unwrap();
        let contact: ContactNumber = parsed.into();
        assert_eq!(contact.raw(), "919999999999");
    }

    #[test]
    fn template_renders_first_placeholder_only() {
        let template = MessageTemplate::new("Code ##OTP## (repeat: ##OTP##)").unwrap();
        let otp = OtpCode::new("1234").unwrap();
        assert_eq!(template.render(&otp), "Code 1234 (repeat: ##OTP##)");
    }

    #[test]
    fn template_without_placeholder_is_rendered_verbatim() {
        let template = MessageTemplate::new("Use the code we sent you.").unwrap();
        let otp = OtpCode::new("1234").unwrap();
        assert_eq!(template.render(&otp), "Use the code we sent you.");
    }

    #[test]
    fn default_template_matches_provider_wording() {
        assert_eq!(MessageTemplate::default().as_str(), "Your otp is ##OTP##.");
    }

    #[test]
    fn otp_length_enforces_range() {
        for value in OtpLength::MIN..=OtpLength::MAX {
            assert_eq!(OtpLength::new(value).unwrap().value(), value);
        }
        assert!(OtpLength::new(3).is_err());
        assert!(OtpLength::new(10).is_err());
        assert_eq!(OtpLength::default().value(), 4);
    }

    #[test]
    fn otp_expiry_accepts_any_value() {
        assert_eq!(OtpExpiryMinutes::new(0).value(), 0);
        assert_eq!(OtpExpiryMinutes::new(2000).value(), 2000);
        assert_eq!(OtpExpiryMinutes::default().value(), 1440);
    }
}
