//! HTTP transport: request configuration and response-error normalization.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with a fixed
//! timeout and bearer injection from durable storage. Native builds get
//! `Err(ApiError::Unavailable)` stubs, keeping everything above this module
//! compilable and testable off-wasm.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response is classified into [`ApiError`]. A 401 always
//! scrubs the durable credentials; for any endpoint other than the login
//! call itself it also fires the credential-rejected hook so the navigation
//! layer can bounce the user to the login page. 403/404/5xx are logged and
//! propagated unchanged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::storage;
use crate::util::storage::{SESSION_KEY, TOKEN_KEY};

/// Request timeout, matching the original client configuration.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 30_000;

const FALLBACK_API_BASE: &str = "http://127.0.0.1:8000/api";
const FALLBACK_UPLOAD_BASE: &str = "http://127.0.0.1:8000/uploads";

/// Base URL of the REST API, fixed at compile time.
pub fn api_base() -> &'static str {
    option_env!("NIRD_API_BASE_URL").unwrap_or(FALLBACK_API_BASE)
}

/// Resolve a stored upload path to an absolute URL. Absolute inputs pass
/// through unchanged; empty input yields an empty string.
pub fn upload_url(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http") {
        return path.to_owned();
    }
    let base = option_env!("NIRD_UPLOAD_URL").unwrap_or(FALLBACK_UPLOAD_BASE);
    format!("{base}/{path}")
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// Normalized transport/API error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// 401: credentials missing, expired, or rejected.
    Unauthorized { detail: Option<String> },
    /// 403: authenticated but not allowed.
    Forbidden { detail: Option<String> },
    /// 404: resource does not exist.
    NotFound { detail: Option<String> },
    /// 5xx.
    Server { status: u16, detail: Option<String> },
    /// Any other non-success status (validation, conflict, ...).
    Request { status: u16, detail: Option<String> },
    /// Connection-level failure.
    Network(String),
    /// The fixed request timeout elapsed.
    Timeout,
    /// The response body did not match the expected shape.
    Decode(String),
    /// Not running in a browser (native/SSR stub).
    Unavailable,
}

impl ApiError {
    /// User-displayable message. Prefers the server-supplied detail and
    /// never panics; unrecognized shapes fall back to a generic message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized { detail }
            | ApiError::Forbidden { detail }
            | ApiError::NotFound { detail }
            | ApiError::Server { detail, .. }
            | ApiError::Request { detail, .. } => match detail {
                Some(d) if !d.is_empty() => d.clone(),
                _ => GENERIC_ERROR.to_owned(),
            },
            ApiError::Network(_) => {
                "Impossible de se connecter au serveur. Veuillez vérifier que le backend est en cours d'exécution.".to_owned()
            }
            ApiError::Timeout => "La requête a expiré. Veuillez réessayer.".to_owned(),
            ApiError::Decode(_) | ApiError::Unavailable => GENERIC_ERROR.to_owned(),
        }
    }
}

const GENERIC_ERROR: &str = "Une erreur inattendue s'est produite";

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ApiError {}

// -------------------------------------------------------------------------
// Credential-rejected hook
// -------------------------------------------------------------------------

thread_local! {
    static CREDENTIAL_REJECTED: std::cell::RefCell<Option<Box<dyn Fn()>>> =
        const { std::cell::RefCell::new(None) };
}

/// Register the callback fired when the backend rejects the stored
/// credential (a 401 outside the login endpoint). The application shell
/// registers a `/login` navigation here; tests register their own observer.
pub fn on_credential_rejected(hook: impl Fn() + 'static) {
    CREDENTIAL_REJECTED.with(|cell| {
        *cell.borrow_mut() = Some(Box::new(hook));
    });
}

/// Scrub durable credentials and, unless the 401 came from the login call
/// itself, notify the registered hook.
fn credential_rejected(login_call: bool) {
    storage::remove(TOKEN_KEY);
    storage::remove(SESSION_KEY);
    if login_call {
        return;
    }
    CREDENTIAL_REJECTED.with(|cell| {
        if let Some(hook) = cell.borrow().as_ref() {
            hook();
        }
    });
}

// -------------------------------------------------------------------------
// Status classification
// -------------------------------------------------------------------------

/// Pull a displayable message out of an error body: the backend puts
/// validation errors in `detail` (string or structured), some proxies in
/// `error.message`.
pub(crate) fn extract_detail(body: &serde_json::Value) -> Option<String> {
    match body.get("detail") {
        Some(serde_json::Value::String(s)) => return Some(s.clone()),
        Some(other) if !other.is_null() => return Some(other.to_string()),
        _ => {}
    }
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_owned)
}

/// Classify a non-success status and perform the 401 side effect.
pub(crate) fn handle_status(path: &str, status: u16, detail: Option<String>) -> ApiError {
    match status {
        401 => {
            credential_rejected(path.contains("/auth/login"));
            ApiError::Unauthorized { detail }
        }
        403 => {
            leptos::logging::warn!("forbidden: {path}");
            ApiError::Forbidden { detail }
        }
        404 => {
            leptos::logging::warn!("not found: {path}");
            ApiError::NotFound { detail }
        }
        500..=599 => {
            leptos::logging::warn!("server error {status}: {path}");
            ApiError::Server { status, detail }
        }
        _ => ApiError::Request { status, detail },
    }
}

// -------------------------------------------------------------------------
// Form encoding
// -------------------------------------------------------------------------

/// Encode pairs as `application/x-www-form-urlencoded`. Form bodies use the
/// `+`-for-space rule on top of percent-encoding.
pub(crate) fn form_urlencode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", form_component(k), form_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn form_component(input: &str) -> String {
    urlencoding::encode(input).replace("%20", "+")
}

// -------------------------------------------------------------------------
// Request execution (browser only)
// -------------------------------------------------------------------------

/// `Authorization` header value for the stored bearer token, if any.
/// A request with no stored token carries no credential header.
pub fn bearer_header() -> Option<String> {
    storage::get(TOKEN_KEY).map(|token| format!("Bearer {token}"))
}

#[cfg(feature = "hydrate")]
fn bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match bearer_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Run a request future against the fixed timeout and classify the outcome.
#[cfg(feature = "hydrate")]
async fn run<F>(path: &str, fut: F) -> Result<gloo_net::http::Response, ApiError>
where
    F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
{
    use futures::future::Either;

    let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(fut);
    futures::pin_mut!(timeout);

    let resp = match futures::future::select(fut, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
        Either::Right(((), _)) => return Err(ApiError::Timeout),
    };

    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let detail = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .as_ref()
        .and_then(extract_detail);
    Err(handle_status(path, status, detail))
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` and decode the JSON response.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = run(path, bearer(gloo_net::http::Request::get(&endpoint(path))).send()).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// GET `path` with query parameters and decode the JSON response.
pub async fn get_json_with_query<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, String)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = bearer(gloo_net::http::Request::get(&endpoint(path)))
            .query(params.iter().map(|(k, v)| (*k, v.as_str())));
        let resp = run(path, req.send()).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, params);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON body to `path` and decode the JSON response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = bearer(gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = run(path, req.send()).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// POST a url-encoded form to `path` and decode the JSON response. Used by
/// the login credential exchange, which the backend expects as form data.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    pairs: &[(&str, &str)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = bearer(gloo_net::http::Request::post(&endpoint(path)))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form_urlencode(pairs))
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = run(path, req.send()).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, pairs);
        Err(ApiError::Unavailable)
    }
}

/// PUT with an empty body (state-flip endpoints like mark-as-read) and
/// decode the JSON response.
pub async fn put_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = run(path, bearer(gloo_net::http::Request::put(&endpoint(path))).send()).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
