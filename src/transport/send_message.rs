use serde::Serialize;
use serde_json::Value;

use crate::domain::{OutboundSms, OutboundSmsResponse, SenderAddress};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,
}

// Field order below is the wire layout; the gateway contract is keyed on it,
// so these structs serialize in declaration order with no map in between.
#[derive(Debug, Serialize)]
struct SendMessageJsonBody {
    #[serde(rename = "outboundSMSMessageRequest")]
    outbound_sms_message_request: OutboundSmsMessageRequest,
}

#[derive(Debug, Serialize)]
struct OutboundSmsMessageRequest {
    #[serde(rename = "senderAddress")]
    sender_address: String,
    address: Vec<String>,
    #[serde(rename = "outboundSMSTextMessage")]
    outbound_sms_text_message: OutboundSmsTextMessage,
}

#[derive(Debug, Serialize)]
struct OutboundSmsTextMessage {
    message: String,
}

/// Serialize an outbound SMS request into the gateway's JSON body.
///
/// `sender` and the recipient are prefixed with the `tel:` scheme; `address`
/// always carries exactly one entry.
pub fn encode_send_message_json(
    sender: &SenderAddress,
    request: &OutboundSms,
) -> Result<String, TransportError> {
    let body = SendMessageJsonBody {
        outbound_sms_message_request: OutboundSmsMessageRequest {
            sender_address: sender.tel_uri(),
            address: vec![request.to().tel_uri()],
            outbound_sms_text_message: OutboundSmsTextMessage {
                message: request.message().as_str().to_owned(),
            },
        },
    };
    Ok(serde_json::to_string(&body)?)
}

/// Decode the gateway's response body into the opaque response map.
pub fn decode_send_message_json_response(
    body: &str,
) -> Result<OutboundSmsResponse, TransportError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(OutboundSmsResponse::new(map)),
        _ => Err(TransportError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{MessageText, SubscriberAddress};

    use super::*;

    fn request(to: &str, message: &str) -> OutboundSms {
        OutboundSms::new(SubscriberAddress::new(to), MessageText::new(message))
    }

    #[test]
    fn encode_produces_exact_wire_bytes() {
        let sender = SenderAddress::new("short_code");
        let body =
            encode_send_message_json(&sender, &request("subscriber_number", "message")).unwrap();

        assert_eq!(
            body,
            r#"{"outboundSMSMessageRequest":{"senderAddress":"tel:short_code","address":["tel:subscriber_number"],"outboundSMSTextMessage":{"message":"message"}}}"#
        );
    }

    #[test]
    fn encode_uses_standard_json_escaping() {
        let sender = SenderAddress::new("1234");
        let body =
            encode_send_message_json(&sender, &request("9171234567", "say \"hi\"\nnow")).unwrap();

        assert!(body.contains(r#""message":"say \"hi\"\nnow""#));
    }

    #[test]
    fn encode_then_decode_round_trips_the_body_structure() {
        let sender = SenderAddress::new("short_code");
        let body = encode_send_message_json(&sender, &request("subscriber_number", "message")).unwrap();

        let decoded: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            decoded,
            json!({
                "outboundSMSMessageRequest": {
                    "senderAddress": "tel:short_code",
                    "address": ["tel:subscriber_number"],
                    "outboundSMSTextMessage": { "message": "message" }
                }
            })
        );
    }

    #[test]
    fn decode_accepts_any_json_object() {
        let response =
            decode_send_message_json_response(r#"{"outboundSMSMessageRequest":{},"extra":42}"#)
                .unwrap();
        assert!(response.contains_key("outboundSMSMessageRequest"));
        assert_eq!(response.get("extra"), Some(&json!(42)));
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = decode_send_message_json_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_rejects_non_object_bodies() {
        let err = decode_send_message_json_response("[1,2,3]").unwrap_err();
        assert!(matches!(err, TransportError::NotAnObject));

        let err = decode_send_message_json_response("\"ok\"").unwrap_err();
        assert!(matches!(err, TransportError::NotAnObject));
    }
}
