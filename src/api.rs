//! Counter API Client
//!
//! Single POST to the counter backend via the browser fetch API.
//! The backend increments its stored count and returns the new value.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Why a fetch attempt failed. The UI renders all of these the same
/// way; the distinction only shows up in console diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (network down, CORS rejection, ...)
    Network(String),
    /// Non-2xx HTTP status
    Status(u16),
    /// Body was not JSON, or had no numeric `count` field
    Payload(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status(code) => write!(f, "API responded with status {code}"),
            FetchError::Payload(msg) => write!(f, "invalid response format: {msg}"),
        }
    }
}

/// Success payload. The backend also sends a `message` field; only
/// `count` matters here.
#[derive(Debug, Deserialize)]
struct CountPayload {
    count: u64,
}

/// Validate a response body: JSON object with a non-negative integer
/// `count` field. Anything else is a payload error.
pub fn parse_count(body: &str) -> Result<u64, FetchError> {
    serde_json::from_str::<CountPayload>(body)
        .map(|payload| payload.count)
        .map_err(|e| FetchError::Payload(e.to_string()))
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// POST to the counter endpoint and return the reported count.
///
/// Empty JSON body, CORS mode. No retry and no timeout beyond what
/// the browser transport itself enforces.
pub async fn fetch_count(endpoint: &str) -> Result<u64, FetchError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(endpoint, &init)
        .map_err(|e| FetchError::Network(js_error(e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| FetchError::Network(js_error(e)))?;

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(js_error(e)))?
        .dyn_into()
        .map_err(|e| FetchError::Network(js_error(e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(
        response
            .text()
            .map_err(|e| FetchError::Network(js_error(e)))?,
    )
    .await
    .map_err(|e| FetchError::Network(js_error(e)))?;

    parse_count(&body.as_string().unwrap_or_default())
}
