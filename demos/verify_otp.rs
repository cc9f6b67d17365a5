use std::io;

use sendotp::{AuthKey, ContactNumber, OtpCode, SendOtpClient, VerifyOtp};

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
    let otp = std::env::var("MSG91_OTP").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_OTP environment variable is required",
        )
    })?;

    let client = SendOtpClient::new(AuthKey::new(auth_key)?);
    let contact = ContactNumber::new(mobile)?;

    let reply = client
        .verify(VerifyOtp::new(contact, OtpCode::new(otp)?))
        .await?;
    println!("type: {:?}, message: {:?}", reply.kind, reply.message);

    Ok(())
}
