use crate::domain::value::{MessageText, SubscriberAddress};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outbound SMS send: a single recipient and a text body.
///
/// Constructed fresh per call and never mutated. Together with the client's
/// access token and sender short code this fully determines the wire body.
pub struct OutboundSms {
    to: SubscriberAddress,
    message: MessageText,
}

impl OutboundSms {
    pub fn new(to: SubscriberAddress, message: MessageText) -> Self {
        Self { to, message }
    }

    pub fn to(&self) -> &SubscriberAddress {
        &self.to
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}
