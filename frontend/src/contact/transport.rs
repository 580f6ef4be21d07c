use gloo_net::http::Request;
use thiserror::Error;

use crate::contact::validation::SubmissionPayload;

#[derive(Debug, Error)]
pub enum TransmitError {
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Network(gloo_net::Error),
    #[error("failed to read response: {0}")]
    Read(gloo_net::Error),
    #[error("unreadable response: {0}")]
    Response(serde_json::Error),
}

/// The request body: the payload as a JSON object, sent as plain text.
pub fn encode_body(payload: &SubmissionPayload) -> Result<String, serde_json::Error> {
    serde_json::to_string(payload)
}

/// A reply counts as delivered only if its body is JSON. Contents are ignored.
pub fn reply_ok(body: &str) -> Result<(), serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(body).map(|_| ())
}

/// Posts the payload once. The body goes through `Request::body` rather than
/// `.json()`, so no `Content-Type` header is added. The status code is not
/// checked.
pub async fn transmit(endpoint: &str, payload: &SubmissionPayload) -> Result<(), TransmitError> {
    let body = encode_body(payload)?;

    let response = Request::post(endpoint)
        .body(body)
        .send()
        .await
        .map_err(TransmitError::Network)?;

    log::info!("contact endpoint answered with status {}", response.status());

    let text = response.text().await.map_err(TransmitError::Read)?;
    reply_ok(&text).map_err(TransmitError::Response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_reply_is_success() {
        assert!(reply_ok(r#"{"result":"success","row":42}"#).is_ok());
        assert!(reply_ok("[]").is_ok());
        assert!(reply_ok(r#""queued""#).is_ok());
    }

    #[test]
    fn html_error_page_is_failure() {
        let page = "<!DOCTYPE html><html><body><h1>Error 500</h1></body></html>";
        assert!(reply_ok(page).is_err());
    }

    #[test]
    fn empty_or_truncated_reply_is_failure() {
        assert!(reply_ok("").is_err());
        assert!(reply_ok("   ").is_err());
        assert!(reply_ok(r#"{"result":"succ"#).is_err());
    }

    #[test]
    fn body_is_the_payload_as_a_json_object() {
        let payload = SubmissionPayload::capture(
            "Ada",
            "ada@example.org",
            "Engines",
            "one two three four five six seven eight nine ten",
        );
        let body = encode_body(&payload).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.org",
                "org": "Engines",
                "message": "one two three four five six seven eight nine ten",
            })
        );
        assert_eq!(parsed.as_object().map(|o| o.len()), Some(4));
    }

    #[test]
    fn parse_failure_maps_to_response_error() {
        let err = reply_ok("<html>").map_err(TransmitError::Response).unwrap_err();
        assert!(matches!(err, TransmitError::Response(_)));
        assert!(err.to_string().starts_with("unreadable response"));
    }
}
