//! Mapping of transport and HTTP failures onto [`GatewayError`].

use nh_core::GatewayError;
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Builds a server error from a non-2xx response.
///
/// Message precedence: the JSON body's `message`, then the raw body, then the
/// status reason phrase.
pub(crate) fn server_error(status: u16, reason: Option<&str>, body: &str) -> GatewayError {
    let from_json = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    let message = match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => reason
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {}", status)),
    };

    GatewayError::Server { status, message }
}

pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Network(format!("request timed out: {}", err))
    } else {
        GatewayError::Network(err.to_string())
    }
}

pub(crate) fn decode_error(err: serde_json::Error) -> GatewayError {
    GatewayError::InvalidResponse(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_json_message() {
        let err = server_error(400, Some("Bad Request"), r#"{"message":"title is required"}"#);
        assert_eq!(
            err,
            GatewayError::Server {
                status: 400,
                message: "title is required".to_string()
            }
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = server_error(502, Some("Bad Gateway"), "upstream down\n");
        assert_eq!(err.to_string(), "upstream down");
    }

    #[test]
    fn falls_back_to_reason_phrase_on_empty_body() {
        let err = server_error(404, Some("Not Found"), "");
        assert_eq!(err.to_string(), "Not Found");
        assert!(err.is_not_found());
    }

    #[test]
    fn falls_back_to_status_without_reason() {
        let err = server_error(599, None, "  ");
        assert_eq!(err.to_string(), "request failed with status 599");
    }
}
