//! `/api/*` reverse proxy to the clinic REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client calls same-origin `/api/...` by default. When
//! `BACKEND_URL` is set, requests are relayed there with method, query, body,
//! `Content-Type`, and `Authorization` intact, and the upstream status and
//! body come back unchanged. Without a backend the route answers a bare 404,
//! which the client turns into its "connect a backend" message.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers relayed upstream.
const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("no backend configured")]
    NotConfigured,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            Self::NotConfigured => StatusCode::NOT_FOUND.into_response(),
            Self::Upstream(_) => (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "success": false, "message": self.to_string() })),
            )
                .into_response(),
        }
    }
}

/// Append the captured path and query string to the backend base.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Still-encoded request path below `/api/`, so `%2F` is not turned into `/`.
pub fn captured_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix("/api/").unwrap_or_else(|| path.trim_start_matches('/'))
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.backend_url.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = upstream_url(base, captured_path(&uri), uri.query());

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, upstream = %url, %method, "proxy request failed");
        ProxyError::Upstream(e.to_string())
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, upstream = %url, "proxy body read failed");
        ProxyError::Upstream(e.to_string())
    })?;
    tracing::debug!(upstream = %url, %method, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
