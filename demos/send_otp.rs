use std::io;

use sendotp::{AuthKey, ContactNumber, SendOtp, SendOtpClient, SenderId};

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
    let sender = std::env::var("MSG91_SENDER").unwrap_or_else(|_| "OTPSMS".to_owned());

    let client = SendOtpClient::new(AuthKey::new(auth_key)?);
    let contact = ContactNumber::new(mobile)?;
    let sender = SenderId::new(sender)?;

    let reply = client.send(SendOtp::new(contact, sender)).await?;
    println!("type: {:?}, message: {:?}", reply.kind, reply.message);

    Ok(())
}
