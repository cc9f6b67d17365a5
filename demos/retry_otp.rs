use std::io;

use sendotp::{AuthKey, ContactNumber, RetryChannel, RetryOtp, SendOtpClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = std::env::var("MSG91_AUTH_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_AUTH_KEY environment variable is required",
        )
    })?;
    let mobile = std::env::var("MSG91_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_MOBILE environment variable is required",
        )
    })?;
    let channel = match std::env::var("MSG91_RETRY_CHANNEL").as_deref() {
        Ok("text") => RetryChannel::Text,
        _ => RetryChannel::Voice,
    };

    let client = SendOtpClient::new(AuthKey::new(auth_key)?);
    let contact = ContactNumber::new(mobile)?;

    let reply = client.retry(RetryOtp::new(contact, channel)).await?;
    println!("type: {:?}, message: {:?}", reply.kind, reply.message);

    Ok(())
}
