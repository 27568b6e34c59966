use serde_json::Value;
use thiserror::Error;

/// Coarse classification of a failed API call. `Network` means no response was
/// received at all; `Server` carries the HTTP status of an error response;
/// `Decode` covers responses that arrived but could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Server(u16),
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn network(source: &gloo::net::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: format!("No response from server: {source}"),
        }
    }

    pub fn server(status: u16, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Server(status),
            message: server_message(status, body),
        }
    }

    pub fn decode(source: &gloo::net::Error) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: format!("Failed to parse server response: {source}"),
        }
    }

    pub fn encode(source: &gloo::net::Error) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: format!("Failed to encode request: {source}"),
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }
}

/// Extracts a human-readable message from the error payloads the backend emits.
/// The API is not consistent: some endpoints return `{"detail": "..."}`, some
/// `{"message": "..."}` or `{"error": "..."}`, and validation failures come as
/// a field-to-messages map. Anything unrecognized falls back to the status code.
fn server_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_owned();
            }
        }
        if let Some(object) = value.as_object() {
            for (field, errors) in object {
                let first = errors
                    .as_array()
                    .and_then(|list| list.first())
                    .and_then(Value::as_str);
                if let Some(text) = first {
                    return format!("{field}: {text}");
                }
            }
        }
    } else {
        let trimmed = body.trim();
        if !trimmed.is_empty() && trimmed.len() <= 200 && !trimmed.starts_with('<') {
            return trimmed.to_owned();
        }
    }
    format!("HTTP {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_key_wins() {
        assert_eq!(
            server_message(400, r#"{"detail": "Not found."}"#),
            "Not found."
        );
    }

    #[test]
    fn message_and_error_keys_are_recognized() {
        assert_eq!(
            server_message(500, r#"{"message": "boom"}"#),
            "boom"
        );
        assert_eq!(
            server_message(500, r#"{"error": "broken"}"#),
            "broken"
        );
    }

    #[test]
    fn field_error_map_yields_field_prefixed_message() {
        let body = r#"{"email": ["This field is required."]}"#;
        assert_eq!(server_message(400, body), "email: This field is required.");
    }

    #[test]
    fn plain_text_bodies_pass_through() {
        assert_eq!(server_message(502, "upstream timed out"), "upstream timed out");
    }

    #[test]
    fn html_and_empty_bodies_fall_back_to_status() {
        assert_eq!(server_message(404, ""), "HTTP 404");
        assert_eq!(server_message(502, "<html><body>Bad Gateway</body></html>"), "HTTP 502");
    }

    #[test]
    fn unrecognized_json_falls_back_to_status() {
        assert_eq!(server_message(418, r#"{"odd": 1}"#), "HTTP 418");
    }
}
