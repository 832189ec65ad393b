//! Domain layer: the request/response value objects and their parts (no I/O).
//!
//! The gateway accepts opaque strings for every field, so the wrappers here
//! store values as-is without validation; even empty strings pass through.

mod request;
mod response;
mod value;

pub use request::OutboundSms;
pub use response::OutboundSmsResponse;
pub use value::{AccessToken, MessageText, SenderAddress, SubscriberAddress};

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;

    #[test]
    fn sender_address_formats_tel_uri() {
        let sender = SenderAddress::new("short_code");
        assert_eq!(sender.as_str(), "short_code");
        assert_eq!(sender.tel_uri(), "tel:short_code");
    }

    #[test]
    fn subscriber_address_formats_tel_uri() {
        let to = SubscriberAddress::new("subscriber_number");
        assert_eq!(to.tel_uri(), "tel:subscriber_number");
    }

    #[test]
    fn values_are_stored_verbatim_including_empty() {
        assert_eq!(AccessToken::new("").as_str(), "");
        assert_eq!(SenderAddress::new(" 1234 ").as_str(), " 1234 ");
        assert_eq!(MessageText::new("  hi  ").as_str(), "  hi  ");
    }

    #[test]
    fn outbound_sms_exposes_its_parts() {
        let request = OutboundSms::new(
            SubscriberAddress::new("9171234567"),
            MessageText::new("hello"),
        );
        assert_eq!(request.to().as_str(), "9171234567");
        assert_eq!(request.message().as_str(), "hello");
    }

    #[test]
    fn response_is_an_opaque_map() {
        let mut body = Map::new();
        body.insert("outboundSMSMessageRequest".to_owned(), json!({"x": 1}));
        body.insert("extra".to_owned(), json!("kept"));

        let response = OutboundSmsResponse::new(body.clone());
        assert!(response.contains_key("outboundSMSMessageRequest"));
        assert_eq!(response.get("extra"), Some(&Value::String("kept".into())));
        assert_eq!(response.get("missing"), None);
        assert_eq!(response.into_inner(), body);
    }
}
