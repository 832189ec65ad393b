use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
/// Gateway response to an outbound SMS send, passed through verbatim.
///
/// The gateway echoes the accepted request under `outboundSMSMessageRequest`,
/// but no schema is enforced beyond "valid JSON object": whatever the
/// gateway returns is preserved as-is.
pub struct OutboundSmsResponse(Map<String, Value>);

impl OutboundSmsResponse {
    pub fn new(body: Map<String, Value>) -> Self {
        Self(body)
    }

    /// Look up a top-level key in the response body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Borrow the full response body.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take ownership of the full response body.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
