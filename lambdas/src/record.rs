use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use lambda_http::{Request, RequestExt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::common::utils::header_pairs;

pub const ID_ATTRIBUTE: &str = "id";
pub const VALUE_ATTRIBUTE: &str = "value";

/// A single write-once item, keyed by the invocation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    value: String,
}

impl Record {
    /// Builds a record whose value is every `key=value` pair of `headers`
    /// concatenated without a separator, in iteration order.
    pub fn from_headers<I, K, V>(invocation_id: impl Into<String>, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let value = headers
            .into_iter()
            .fold(String::new(), |mut value, (key, header)| {
                value.push_str(key.as_ref());
                value.push('=');
                value.push_str(header.as_ref());
                value
            });

        Self {
            id: invocation_id.into(),
            value,
        }
    }

    /// Builds the record for an inbound Lambda HTTP request. Headers are
    /// taken in header-name order.
    pub fn from_request(request: &Request) -> Self {
        info!("{:?}", request);

        Self::from_headers(invocation_id(request), &header_pairs(request.headers()))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<Record> for HashMap<String, AttributeValue> {
    fn from(record: Record) -> Self {
        HashMap::from([
            (ID_ATTRIBUTE.to_string(), AttributeValue::S(record.id)),
            (VALUE_ATTRIBUTE.to_string(), AttributeValue::S(record.value)),
        ])
    }
}

/// The Lambda request id of the current invocation. Requests that reach the
/// handler without a Lambda context (local harnesses) get a fresh UUID.
pub fn invocation_id(request: &Request) -> String {
    match request.lambda_context_ref() {
        Some(context) if !context.request_id.is_empty() => context.request_id.clone(),
        _ => {
            let id = Uuid::new_v4().to_string();
            warn!("No lambda request id, generated {}", id);
            id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use lambda_http::{Body, Context};

    fn request_with_id(request_id: &str) -> Request {
        let mut context = Context::default();
        context.request_id = request_id.to_string();

        lambda_http::http::Request::builder()
            .uri("https://a.com/without")
            .header("Host", "a.com")
            .header("Accept", "*/*")
            .body(Body::Empty)
            .unwrap()
            .with_lambda_context(context)
    }

    #[test]
    fn single_header() {
        let record = Record::from_headers("req-1", [("Host", "a.com")]);

        assert_eq!(record.id(), "req-1");
        assert_eq!(record.value(), "Host=a.com");
    }

    #[test]
    fn no_headers() {
        let record = Record::from_headers("req-2", BTreeMap::<String, String>::new());

        assert_eq!(record.id(), "req-2");
        assert_eq!(record.value(), "");
    }

    #[test]
    fn pairs_are_concatenated_in_iteration_order() {
        let ordered = Record::from_headers("req-3", [("X", "1"), ("Y", "2")]);
        let reversed = Record::from_headers("req-3", [("Y", "2"), ("X", "1")]);

        assert_eq!(ordered.value(), "X=1Y=2");
        assert_eq!(reversed.value(), "Y=2X=1");
    }

    #[test]
    fn separators_inside_values_are_kept() {
        let record = Record::from_headers("req-4", [("cookie", "a=b; c=d"), ("empty", "")]);

        assert_eq!(record.value(), "cookie=a=b; c=dempty=");
    }

    #[test]
    fn id_comes_from_the_lambda_context() {
        let record = Record::from_request(&request_with_id("8476a536-e9f4-11e8-9739-2dfe598c3fcd"));

        assert_eq!(record.id(), "8476a536-e9f4-11e8-9739-2dfe598c3fcd");
        assert_eq!(record.value(), "accept=*/*host=a.com");
    }

    #[test]
    fn missing_context_gets_a_generated_id() {
        let request = lambda_http::http::Request::builder()
            .body(Body::Empty)
            .unwrap();

        let first = invocation_id(&request);
        let second = invocation_id(&request);

        assert!(Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second);
    }

    #[test]
    fn empty_request_id_gets_a_generated_id() {
        let record = Record::from_request(&request_with_id(""));

        assert!(!record.id().is_empty());
        assert!(Uuid::parse_str(record.id()).is_ok());
    }

    #[test]
    fn converts_into_a_dynamodb_item() {
        let item: HashMap<String, AttributeValue> =
            Record::from_headers("req-1", [("Host", "a.com")]).into();

        assert_eq!(item.len(), 2);
        assert_eq!(item["id"], AttributeValue::S("req-1".to_string()));
        assert_eq!(item["value"], AttributeValue::S("Host=a.com".to_string()));
    }
}
