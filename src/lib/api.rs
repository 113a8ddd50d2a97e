//! HTTP helper for the form endpoints with a consistent timeout and error
//! mapping. The auth backend answers every outcome (success, validation
//! failure, rate limiting, server error) with the same JSON envelope, so the
//! body is decoded regardless of the status code. The helper never logs the
//! request body; it carries passwords and the CSRF token.

use super::errors::AppError;
use serde::de::DeserializeOwned;

/// Request timeout (milliseconds) applied to every form submission.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced in logs.
const MAX_ERROR_CHARS: usize = 200;

/// Posts an `application/x-www-form-urlencoded` body and decodes the JSON reply.
/// Cookies are included because the backend validates the CSRF token against
/// the session.
#[cfg(target_arch = "wasm32")]
pub async fn post_form<T: DeserializeOwned>(path: &str, body: String) -> Result<T, AppError> {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(body)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;

    decode_envelope(status, ok, &text)
}

/// Builds a URL from the configured base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = super::config::AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout so a stalled server cannot leave the
/// form stuck in its submitting state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Decodes the JSON envelope. A non-JSON body on an error status keeps the
/// status for diagnostics; a non-JSON body on a success status is a parse error.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(AppError::Http {
            status,
            message: sanitize_body(body),
        }),
        Err(err) => Err(AppError::Parse(format!("Failed to decode response: {err}"))),
    }
}

/// Trims and truncates error bodies so an HTML error page cannot flood the logs.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, decode_envelope, sanitize_body, MAX_ERROR_CHARS};
    use crate::app_lib::AppError;
    use crate::features::auth::types::AuthResponse;

    #[test]
    fn build_url_keeps_relative_paths_without_base() {
        assert_eq!(build_url_with_base("", "/auth/login"), "/auth/login");
        assert_eq!(build_url_with_base("   ", " /site/register "), "/site/register");
    }

    #[test]
    fn build_url_joins_base_and_path_with_single_slash() {
        assert_eq!(
            build_url_with_base("https://auth.example.com/", "/password/change"),
            "https://auth.example.com/password/change"
        );
        assert_eq!(
            build_url_with_base("https://auth.example.com", "password/email"),
            "https://auth.example.com/password/email"
        );
    }

    #[test]
    fn decode_envelope_accepts_json_on_error_status() {
        let body = r#"{"error":"Too many attempts","csrf":"fresh"}"#;
        let response: AuthResponse = decode_envelope(429, false, body).unwrap();
        assert_eq!(response.error.as_deref(), Some("Too many attempts"));
        assert_eq!(response.csrf.as_deref(), Some("fresh"));
    }

    #[test]
    fn decode_envelope_keeps_status_for_non_json_errors() {
        let err = decode_envelope::<AuthResponse>(502, false, "<html>Bad Gateway</html>")
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Http {
                status: 502,
                message: "<html>Bad Gateway</html>".to_string(),
            }
        );
    }

    #[test]
    fn decode_envelope_reports_parse_error_on_success_status() {
        let err = decode_envelope::<AuthResponse>(200, true, "not json").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn sanitize_body_truncates_and_defaults() {
        assert_eq!(sanitize_body("  "), "Request failed.");
        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        assert_eq!(sanitize_body(&long).chars().count(), MAX_ERROR_CHARS);
    }
}
