//! Typed Rust client for the Globe Labs Connect outbound SMS API.
//!
//! The crate is a thin binding around one gateway operation: POST an outbound
//! SMS request and return the gateway's JSON response verbatim. It is split
//! into a domain layer of value types, a transport layer for the wire format,
//! and a small client layer orchestrating the HTTP call.
//!
//! ```rust,no_run
//! use globeconnect::GlobeSmsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), globeconnect::GlobeError> {
//!     let client = GlobeSmsClient::new("access_token", "short_code");
//!     let response = client.send_message("9171234567", "hello").await?;
//!     println!("{:?}", response.get("outboundSMSMessageRequest"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{GlobeError, GlobeSmsClient, GlobeSmsClientBuilder};
pub use domain::{
    AccessToken, MessageText, OutboundSms, OutboundSmsResponse, SenderAddress, SubscriberAddress,
};
