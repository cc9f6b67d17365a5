//! Client layer: request orchestration over the transport, plus configuration.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde_json::Value;
use url::Url;

use crate::domain::{
    AuthKey, MessageTemplate, OtpExpiryMinutes, OtpLength, OtpReply, OtpSettings, RetryOtp,
    SendOtp, ValidationError, VerifyOtp,
};
use crate::transport::ResponseError;

/// Base URL all endpoint paths are appended to.
pub const DEFAULT_BASE_URL: &str = "https://control.msg91.com/api/";

const SEND_PATH: &str = "sendotp.php";
const RETRY_PATH: &str = "retryotp.php";
const VERIFY_PATH: &str = "verifyRequestOTP.php";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SendOtpClient`].
///
/// Outcomes are resolved in a fixed order: transport failure, then a
/// malformed body, then the provider's `errors` payload, then the HTTP
/// status class. Every variant preserves whatever payload the provider
/// produced alongside the error.
pub enum SendOtpError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body was neither empty nor valid JSON. The unparsed body is
    /// kept verbatim.
    #[error("invalid JSON response (HTTP {status})")]
    Parse {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// MSG91 reported application-level errors, possibly with a 2xx status.
    /// `errors` is the provider's value exactly as sent, not wrapped.
    #[error("provider reported errors: {errors}")]
    Provider { errors: Value, data: Value },

    /// Non-2xx HTTP status with an otherwise well-formed body.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, data: Value },

    /// One of the domain constructors or pre-flight checks rejected a value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<ResponseError> for SendOtpError {
    fn from(value: ResponseError) -> Self {
        match value {
            ResponseError::Parse {
                status,
                body,
                source,
            } => Self::Parse {
                status,
                body,
                source,
            },
            ResponseError::Provider { errors, data } => Self::Provider { errors, data },
            ResponseError::Status { status, data } => Self::HttpStatus { status, data },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SendOtpClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or
/// OTP settings up front.
pub struct SendOtpClientBuilder {
    auth: AuthKey,
    base_url: String,
    settings: OtpSettings,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SendOtpClientBuilder {
    /// Create a builder with the default base URL and OTP settings.
    pub fn new(auth: AuthKey) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            settings: OtpSettings::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the MSG91 base URL. A missing trailing slash is added, since
    /// endpoint paths are appended directly.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the message template.
    pub fn template(mut self, template: MessageTemplate) -> Self {
        self.settings.template = template;
        self
    }

    /// Override the OTP expiry forwarded to the provider.
    pub fn otp_expiry(mut self, expiry: OtpExpiryMinutes) -> Self {
        self.settings.expiry = expiry;
        self
    }

    /// Override the OTP length.
    pub fn otp_length(mut self, length: OtpLength) -> Self {
        self.settings.length = length;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SendOtpClient`].
    pub fn build(self) -> Result<SendOtpClient, SendOtpError> {
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        if Url::parse(&base_url).is_err() {
            return Err(SendOtpError::Validation(ValidationError::InvalidBaseUrl {
                input: base_url,
            }));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendOtpError::Transport(Box::new(err)))?;

        Ok(SendOtpClient {
            auth: self.auth,
            base_url,
            settings: self.settings,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level MSG91 SendOTP client.
///
/// Holds the authentication key and per-instance OTP settings, and exposes
/// the three provider operations (`send`, `retry`, `verify`). Each call
/// issues exactly one HTTP GET; the library never retries, caches, or rate
/// limits on its own. The `retry` operation is MSG91's voice/text
/// re-delivery feature, not a network-level retry.
pub struct SendOtpClient {
    auth: AuthKey,
    base_url: String,
    settings: OtpSettings,
    http: Arc<dyn HttpTransport>,
}

impl SendOtpClient {
    /// Create a client with the default base URL and OTP settings
    /// (template `"Your otp is ##OTP##."`, expiry 1440 minutes, length 4).
    ///
    /// For more customization, use [`SendOtpClient::builder`].
    pub fn new(auth: AuthKey) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            settings: OtpSettings::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: AuthKey) -> SendOtpClientBuilder {
        SendOtpClientBuilder::new(auth)
    }

    /// The base URL new clients use unless overridden.
    pub fn default_base_url() -> &'static str {
        DEFAULT_BASE_URL
    }

    /// The base URL this client appends endpoint paths to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current OTP settings.
    pub fn settings(&self) -> &OtpSettings {
        &self.settings
    }

    /// Set the OTP validity window forwarded to the provider.
    ///
    /// MSG91 documents the accepted range as 1..=1440 minutes; the value is
    /// not checked here.
    pub fn set_otp_expiry(&mut self, expiry: OtpExpiryMinutes) {
        self.settings.expiry = expiry;
    }

    /// Set the message template. `##OTP##` marks where a custom OTP is
    /// substituted.
    pub fn set_otp_template(&mut self, template: MessageTemplate) {
        self.settings.template = template;
    }

    /// Set the OTP length. Fails for values outside 4..=9 and leaves the
    /// previous length unchanged.
    pub fn set_otp_length(&mut self, length: u8) -> Result<(), ValidationError> {
        self.settings.length = OtpLength::new(length)?;
        Ok(())
    }

    /// A uniformly random 4-digit code in `1000..=9999`.
    ///
    /// Convenience only: the generator is not cryptographically secure.
    /// Callers with security requirements should substitute their own source
    /// and pass the result via [`SendOtp::with_code`].
    pub fn generate_otp() -> u32 {
        rand::rng().random_range(1_000..=9_999)
    }

    /// Deliver an OTP to a mobile number via `sendotp.php`.
    ///
    /// With a caller-supplied code, the code's character count must equal the
    /// configured OTP length; mismatches fail with
    /// [`SendOtpError::Validation`] before any I/O.
    pub async fn send(&self, request: SendOtp) -> Result<OtpReply, SendOtpError> {
        if let Some(otp) = request.otp() {
            let expected = self.settings.length.value();
            let actual = otp.char_count();
            if actual != usize::from(expected) {
                return Err(SendOtpError::Validation(
                    ValidationError::OtpLengthMismatch { expected, actual },
                ));
            }
        }

        let mut params = self.auth_params();
        params.extend(crate::transport::encode_send_query(&self.settings, &request));
        self.execute(SEND_PATH, params).await
    }

    /// Ask MSG91 to re-deliver the pending OTP via voice call or text
    /// message (`retryotp.php`).
    pub async fn retry(&self, request: RetryOtp) -> Result<OtpReply, SendOtpError> {
        let mut params = self.auth_params();
        params.extend(crate::transport::encode_retry_query(&request));
        self.execute(RETRY_PATH, params).await
    }

    /// Check a user-submitted OTP against the one previously sent
    /// (`verifyRequestOTP.php`).
    pub async fn verify(&self, request: VerifyOtp) -> Result<OtpReply, SendOtpError> {
        let mut params = self.auth_params();
        params.extend(crate::transport::encode_verify_query(&request));
        self.execute(VERIFY_PATH, params).await
    }

    fn auth_params(&self) -> Vec<(String, String)> {
        vec![(AuthKey::FIELD.to_owned(), self.auth.as_str().to_owned())]
    }

    async fn execute(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<OtpReply, SendOtpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "dispatching request");

        let response = self
            .http
            .get(&url, params)
            .await
            .map_err(SendOtpError::Transport)?;

        tracing::debug!(status = response.status, "response received");
        let reply = crate::transport::decode_reply(response.status, &response.body)?;
        Ok(reply)
    }
}
