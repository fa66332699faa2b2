//! REST API client for the clinic backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable` since the
//! pages only fetch from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an `ApiError` whose `Display` is user-facing text.
//! Non-2xx bodies are mined for a `message`/`detail` string so raw JSON never
//! reaches the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{
    AppointmentPayload, DetailResponse, Dentist, ForgotPasswordRequest, LoginRequest, LoginResponse,
    ResetPasswordRequest, Service, SignupRequest, TimeSlot, VerifyEmailRequest,
};

/// Same-origin API prefix used when `CLINIC_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Shown for a 404 without a usable message, which usually means no backend.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str =
    "Service unavailable. Connect a backend or check the API base URL (CLINIC_API_URL).";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Base URL for API requests.
pub fn api_base() -> String {
    normalize_base(option_env!("CLINIC_API_URL"))
}

fn normalize_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Join `endpoint` onto `base` unless it is already absolute.
pub fn resolve_url(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http") {
        endpoint.to_owned()
    } else {
        format!("{base}{endpoint}")
    }
}

fn dentist_endpoint(id: i64) -> String {
    format!("/dentists/{id}/")
}

fn service_endpoint(slug: &str) -> String {
    format!("/services/{slug}/")
}

fn available_slots_endpoint(date: NaiveDate) -> String {
    format!("/appointments/available-slots/?date={}", date.format("%Y-%m-%d"))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build the user-facing message for a non-2xx response.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, status_text: &str, body: &str) -> String {
    let from_body = serde_json::from_str::<Value>(body).ok().and_then(|json| {
        ["message", "detail"].iter().find_map(|field| {
            json.get(field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        })
    });
    if let Some(message) = from_body {
        return message;
    }
    if status == 404 {
        return BACKEND_UNAVAILABLE_MESSAGE.to_owned();
    }
    let status_text = status_text.trim();
    if status_text.is_empty() {
        format!("Request failed with status {status}")
    } else {
        status_text.to_owned()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn http_error(status: u16, status_text: &str, body: &str) -> ApiError {
    ApiError::Http { status, message: error_message(status, status_text, body) }
}

/// A body that fails to arrive is a transport failure, never an empty success.
#[cfg(any(test, feature = "hydrate"))]
fn read_body<E: std::fmt::Display>(body: Result<String, E>) -> Result<String, ApiError> {
    body.map_err(|e| ApiError::Network(e.to_string()))
}

/// Strip a `{"success": .., "data": ..}` envelope, if present.
#[cfg(any(test, feature = "hydrate"))]
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("success").is_some_and(Value::is_boolean) && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decode a successful response body. `204` and empty bodies decode from `null`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value = if status == 204 || body.trim().is_empty() {
        Value::Null
    } else {
        let parsed: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        unwrap_envelope(parsed)
    };
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send<T: DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: Option<Value>,
) -> Result<T, ApiError> {
    use crate::state::auth::stored_token;
    use crate::util::storage::BrowserStorage;

    let mut builder = builder.header("Content-Type", "application/json");
    if let Some(token) = stored_token(&BrowserStorage) {
        builder = builder.header("Authorization", &bearer_header(&token));
    }
    let request = match body {
        Some(body) => builder.json(&body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let status_text = resp.status_text();
    let text = read_body(resp.text().await)?;
    if !resp.ok() {
        let err = http_error(status, &status_text, &text);
        leptos::logging::warn!("API {status} {}: {err}", resp.url());
        return Err(err);
    }
    decode_body(status, &text)
}

/// `GET` a JSON resource relative to the API base.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or undecodable body.
pub async fn get<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = resolve_url(&api_base(), endpoint);
        send(gloo_net::http::Request::get(&url), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

/// `POST` a JSON body relative to the API base.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or undecodable body.
pub async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    #[cfg(feature = "hydrate")]
    {
        let url = resolve_url(&api_base(), endpoint);
        send(gloo_net::http::Request::post(&url), Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(ApiError::Unavailable)
    }
}

async fn post_for_detail<B: Serialize>(endpoint: &str, body: &B) -> Result<String, ApiError> {
    let reply: Option<DetailResponse> = post(endpoint, body).await?;
    Ok(reply.map(|r| r.detail).unwrap_or_default())
}

/// # Errors
///
/// See [`get`].
pub async fn list_dentists() -> Result<Vec<Dentist>, ApiError> {
    get("/dentists/").await
}

/// # Errors
///
/// See [`get`].
pub async fn get_dentist(id: i64) -> Result<Dentist, ApiError> {
    get(&dentist_endpoint(id)).await
}

/// # Errors
///
/// See [`get`].
pub async fn list_services() -> Result<Vec<Service>, ApiError> {
    get("/services/").await
}

/// # Errors
///
/// See [`get`].
pub async fn get_service(slug: &str) -> Result<Service, ApiError> {
    get(&service_endpoint(slug)).await
}

/// Fetch open slots for `date`.
///
/// # Errors
///
/// See [`get`].
pub async fn available_slots(date: NaiveDate) -> Result<Vec<TimeSlot>, ApiError> {
    get(&available_slots_endpoint(date)).await
}

/// Submit a booking request. The backend echoes the payload.
///
/// # Errors
///
/// See [`post`].
pub async fn create_appointment(payload: &AppointmentPayload) -> Result<Value, ApiError> {
    post("/appointments/", payload).await
}

/// # Errors
///
/// See [`post`].
pub async fn signup(request: &SignupRequest) -> Result<String, ApiError> {
    post_for_detail("/auth/signup/", request).await
}

/// # Errors
///
/// See [`post`].
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<String, ApiError> {
    post_for_detail("/auth/verify-email/", request).await
}

/// Exchange credentials for a token pair.
///
/// # Errors
///
/// See [`post`].
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post("/auth/login/", request).await
}

/// # Errors
///
/// See [`post`].
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<String, ApiError> {
    post_for_detail("/auth/forgot-password/", request).await
}

/// # Errors
///
/// See [`post`].
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<String, ApiError> {
    post_for_detail("/auth/reset-password/", request).await
}
