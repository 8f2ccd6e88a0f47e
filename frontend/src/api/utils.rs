use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::Storage;
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, ServiceError};

/// localStorage key holding the organizer's session token
pub const SESSION_KEY: &str = "session_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Creates a request with Authorization header from localStorage
pub fn authenticated_request(method: Method, url: &str) -> RequestBuilder {
    let req = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Patch => Request::patch(url),
    };

    match gloo_storage::LocalStorage::get::<String>(SESSION_KEY) {
        Ok(session_id) => req.header("Authorization", &bearer(&session_id)),
        // Not signed in; the service decides what anonymous callers may see
        Err(_) => req,
    }
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request(Method::Get, url)
}

pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated_request(Method::Post, url)
}

pub fn authenticated_patch(url: &str) -> RequestBuilder {
    authenticated_request(Method::Patch, url)
}

pub fn bearer(session_id: &str) -> String {
    format!("Bearer {}", session_id)
}

pub fn transport_error(e: gloo_net::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

/// Maps a non-2xx response to a `ServiceError::Status`, keeping the
/// service's `{ "error": ... }` text when it sent one
pub async fn status_error(response: Response) -> ServiceError {
    let code = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = ErrorResponse::message_from(&body)
        .unwrap_or_else(|| status_fallback_message(code, &response.status_text()));
    ServiceError::status(code, message)
}

pub fn status_fallback_message(code: u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        format!("HTTP {}", code)
    } else {
        status_text.to_string()
    }
}

/// Checks the status and decodes a JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    let body = response.text().await.map_err(transport_error)?;
    decode_body(&body)
}

pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(ServiceError::from)
}

/// Checks the status and discards the body
pub async fn expect_success(response: Response) -> Result<(), ServiceError> {
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared::ApplicantsResponse;

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer("abc123"), "Bearer abc123");
    }

    #[test]
    fn test_status_fallback_message() {
        assert_eq!(status_fallback_message(502, ""), "HTTP 502");
        assert_eq!(status_fallback_message(404, "Not Found"), "Not Found");
    }

    #[test]
    fn test_decode_body_maps_to_decode_error() {
        let err = decode_body::<ApplicantsResponse>(r#"{"unexpected": true}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }
}
