use std::collections::BTreeMap;

use lambda_http::http::{HeaderMap, StatusCode};
use lambda_http::Response;

use crate::common::errors::Error;

/// Flattens a header map into name/value pairs ordered by header name.
///
/// Repeated headers are joined with `,`. Values that are not valid UTF-8 are
/// converted lossily.
pub fn header_pairs(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::<String, String>::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        pairs
            .entry(name.as_str().to_owned())
            .and_modify(|joined| {
                joined.push(',');
                joined.push_str(&value);
            })
            .or_insert_with(|| value.to_string());
    }

    pairs
}

pub fn text_response(status: StatusCode, body: &str) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(body.to_owned())?;

    Ok(response)
}
