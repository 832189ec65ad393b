#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Globe Labs access token.
///
/// Stored exactly as provided; the gateway authenticates it as a query
/// parameter, so the client never inspects or normalizes the value.
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap an access token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender short code (the SMS origination address assigned by Globe).
///
/// Stored exactly as provided, without the `tel:` scheme prefix.
pub struct SenderAddress(String);

impl SenderAddress {
    /// Wrap a sender short code.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the short code as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The short code in the gateway's `tel:` URI form.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient subscriber number.
///
/// Stored exactly as provided, without the `tel:` scheme prefix.
pub struct SubscriberAddress(String);

impl SubscriberAddress {
    /// Wrap a subscriber number.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the subscriber number as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The subscriber number in the gateway's `tel:` URI form.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Free-form SMS text body, preserved byte-for-byte.
pub struct MessageText(String);

impl MessageText {
    /// Wrap a message body.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message body as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
