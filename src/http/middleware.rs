//! HTTP middleware
//!
//! Cross-origin headers for every response and Basic auth for the private
//! route group.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::config::Credentials;

pub const ALLOW_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, \
     Authorization, accept, origin, Cache-Control, X-Requested-With";
pub const ALLOW_METHODS: &str = "POST, OPTIONS, GET, PUT, DELETE";
pub const BASIC_REALM: &str = "Basic realm=\"Authorization Required\"";

fn set_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
}

/// Permissive CORS. Preflight requests end here with 204 and never reach a
/// handler or the auth gate.
pub async fn cross_origin(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    set_cors_headers(response.headers_mut());
    response
}

/// Basic auth against a single account
pub async fn basic_auth(
    State(credentials): State<Arc<Credentials>>,
    request: Request,
    next: Next,
) -> Response {
    if authorized(request.headers(), &credentials) {
        return next.run(request).await;
    }

    tracing::debug!(
        "Rejected unauthenticated {} {}",
        request.method(),
        request.uri()
    );
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, BASIC_REALM)],
    )
        .into_response()
}

fn authorized(headers: &HeaderMap, credentials: &Credentials) -> bool {
    let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let Some(encoded) = value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return false;
    };

    let Some((login, password)) = decoded.split_once(':') else {
        return false;
    };

    // Both fields are always compared so a wrong login takes as long as a
    // wrong password.
    let login_ok = login.as_bytes().ct_eq(credentials.login.as_bytes());
    let password_ok = password.as_bytes().ct_eq(credentials.password.as_bytes());
    (login_ok & password_ok).into()
}
