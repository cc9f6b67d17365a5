//! Typed Rust client for the MSG91 SendOTP HTTP API.
//!
//! The crate covers the three SendOTP operations (deliver an OTP, ask for
//! provider-side re-delivery via voice or text, verify a submitted code).
//! The design follows the usual layering for API clients: a domain layer of
//! strong types, a transport layer that normalizes the provider's uneven
//! success/error shapes onto one result contract, and a small client layer
//! orchestrating requests.
//!
//! ```rust,no_run
//! use sendotp::{AuthKey, ContactNumber, SendOtp, SendOtpClient, SenderId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendotp::SendOtpError> {
//!     let client = SendOtpClient::new(AuthKey::new("...")?);
//!     let contact = ContactNumber::new("919999999999")?;
//!     let sender = SenderId::new("OTPSMS")?;
//!     let reply = client.send(SendOtp::new(contact, sender)).await?;
//!     println!("provider said: {:?}", reply.message);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_BASE_URL, SendOtpClient, SendOtpClientBuilder, SendOtpError};
pub use domain::{
    AuthKey, ContactNumber, MessageTemplate, OtpCode, OtpExpiryMinutes, OtpLength, OtpReply,
    OtpSettings, PhoneNumber, RetryChannel, RetryOtp, SendOtp, SenderId, ValidationError,
    VerifyOtp,
};
