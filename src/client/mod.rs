//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    AccessToken, MessageText, OutboundSms, OutboundSmsResponse, SenderAddress, SubscriberAddress,
};

const DEFAULT_BASE_URL: &str = "https://devapi.globelabs.com.ph";
const APPLICATION_JSON: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync + std::fmt::Debug {
    fn post<'a>(
        &'a self,
        url: &'a str,
        content_type: &'static str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a str,
        content_type: &'static str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GlobeSmsClient`].
///
/// Failures are surfaced directly to the caller with whatever diagnostics the
/// transport and decode layers provide; the client never retries or recovers.
pub enum GlobeError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the gateway.
    ///
    /// The raw response body is kept when non-blank.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// A JSON body could not be encoded or decoded.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL cannot carry the gateway's request path.
    #[error("invalid base URL: {input}")]
    InvalidBaseUrl { input: String },
}

#[derive(Debug, Clone)]
/// Builder for [`GlobeSmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct GlobeSmsClientBuilder {
    access_token: AccessToken,
    sender_address: SenderAddress,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GlobeSmsClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(access_token: impl Into<String>, sender_address: impl Into<String>) -> Self {
        Self {
            access_token: AccessToken::new(access_token),
            sender_address: SenderAddress::new(sender_address),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway base URL (defaults to `https://devapi.globelabs.com.ph`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
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

    /// Build a [`GlobeSmsClient`].
    ///
    /// Fails with [`GlobeError::InvalidBaseUrl`] when the base URL does not
    /// parse as an absolute URL able to carry path segments.
    pub fn build(self) -> Result<GlobeSmsClient, GlobeError> {
        match Url::parse(&self.base_url) {
            Ok(url) if !url.cannot_be_a_base() => {}
            _ => {
                return Err(GlobeError::InvalidBaseUrl {
                    input: self.base_url,
                });
            }
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
            .map_err(|err| GlobeError::Transport(Box::new(err)))?;

        Ok(GlobeSmsClient {
            access_token: self.access_token,
            sender_address: self.sender_address,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Debug, Clone)]
/// Client for the Globe Labs Connect outbound SMS API.
///
/// Holds an access token and a sender short code, both stored as provided;
/// the gateway is the sole authority on their validity. The client keeps no
/// other state, so clones are cheap and safe to use concurrently.
pub struct GlobeSmsClient {
    access_token: AccessToken,
    sender_address: SenderAddress,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl GlobeSmsClient {
    /// Create a client against the production gateway.
    ///
    /// For more customization, use [`GlobeSmsClient::builder`].
    pub fn new(access_token: impl Into<String>, sender_address: impl Into<String>) -> Self {
        Self {
            access_token: AccessToken::new(access_token),
            sender_address: SenderAddress::new(sender_address),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(
        access_token: impl Into<String>,
        sender_address: impl Into<String>,
    ) -> GlobeSmsClientBuilder {
        GlobeSmsClientBuilder::new(access_token, sender_address)
    }

    /// Send one SMS to one recipient.
    ///
    /// `recipient` is the subscriber number without the `tel:` prefix;
    /// `message` is the free-form text body. Performs exactly one POST to
    /// `<base_url>/smsmessaging/v1/outbound/<sender>/requests` with the
    /// access token as a query parameter, and returns the gateway's JSON
    /// response verbatim.
    ///
    /// Errors:
    /// - [`GlobeError::Transport`] when the HTTP call cannot complete,
    /// - [`GlobeError::HttpStatus`] for non-2xx responses,
    /// - [`GlobeError::Parse`] when the body is not a JSON object.
    pub async fn send_message(
        &self,
        recipient: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<OutboundSmsResponse, GlobeError> {
        let request = OutboundSms::new(
            SubscriberAddress::new(recipient),
            MessageText::new(message),
        );
        self.send(request).await
    }

    /// Send a pre-built [`OutboundSms`] request.
    pub async fn send(&self, request: OutboundSms) -> Result<OutboundSmsResponse, GlobeError> {
        let url = self.send_message_url()?;
        let body = crate::transport::encode_send_message_json(&self.sender_address, &request)
            .map_err(|err| GlobeError::Parse(Box::new(err)))?;

        let response = self
            .http
            .post(url.as_str(), APPLICATION_JSON, body)
            .await
            .map_err(GlobeError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(GlobeError::HttpStatus {
                status: response.status,
                body,
            });
        }

        crate::transport::decode_send_message_json_response(&response.body)
            .map_err(|err| GlobeError::Parse(Box::new(err)))
    }

    fn send_message_url(&self) -> Result<Url, GlobeError> {
        let invalid = || GlobeError::InvalidBaseUrl {
            input: self.base_url.clone(),
        };

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend([
                "smsmessaging",
                "v1",
                "outbound",
                self.sender_address.as_str(),
                "requests",
            ]);
        url.query_pairs_mut()
            .append_pair("access_token", self.access_token.as_str());
        Ok(url)
    }
}
