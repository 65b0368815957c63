//! Shared HTTP client, headers and status mapping.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::FitError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// The 120 s client timeout is the only timeout applied to a plan request.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

/// Build Gemini-style headers (x-goog-api-key).
pub fn google_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(mut val) = HeaderValue::from_str(api_key) {
        val.set_sensitive(true);
        headers.insert("x-goog-api-key", val);
    }
    headers
}

/// Map a non-success HTTP status to a transport error.
pub fn status_to_error(status: u16, body: &str) -> FitError {
    let message = extract_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => FitError::Authentication(message),
        429 => FitError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => FitError::api(status, message),
    }
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Read `RetryInfo.retryDelay` (e.g. `"17s"` or `"1.5s"`) from a Google RPC error body.
fn extract_retry_after(body: &str) -> Option<u64> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .get("error")?
        .get("details")?
        .as_array()?
        .iter()
        .filter_map(|detail| detail.get("retryDelay")?.as_str())
        .find_map(|delay| delay.strip_suffix('s')?.parse::<f64>().ok())
        .map(|secs| (secs * 1000.0) as u64)
}
