use std::io;

use globeconnect::GlobeSmsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_token = std::env::var("GLOBE_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBE_ACCESS_TOKEN environment variable is required",
        )
    })?;
    let short_code = std::env::var("GLOBE_SHORT_CODE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBE_SHORT_CODE environment variable is required",
        )
    })?;
    let subscriber = std::env::var("GLOBE_SUBSCRIBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBE_SUBSCRIBER environment variable is required",
        )
    })?;
    let message = std::env::var("GLOBE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the globeconnect demo.".to_owned());

    let client = GlobeSmsClient::new(access_token, short_code);
    let response = client.send_message(subscriber, message).await?;
    println!(
        "accepted: {:?}",
        response.get("outboundSMSMessageRequest")
    );

    Ok(())
}
