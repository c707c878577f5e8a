//! HTTP request handlers
//!
//! JSON endpoints answering with the `{status, payload}` envelope.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::registry::{ChannelView, StreamSummary, StreamView};
use crate::state::AppState;

/// Response envelope shared by every JSON endpoint
#[derive(Debug, Serialize)]
pub struct Message<T> {
    /// 1 on success, 0 on error
    pub status: u8,
    /// Requested data, or the error text when `status` is 0
    pub payload: T,
}

impl<T: Serialize> Message<T> {
    pub fn ok(payload: T) -> Self {
        Self { status: 1, payload }
    }

    /// Serialize as JSON indented by four spaces, with the given status code
    pub fn into_response_with(self, status: StatusCode) -> Response {
        let mut body = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
        match self.serialize(&mut serializer) {
            Ok(()) => (
                status,
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}

impl Message<String> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            payload: message.into(),
        }
    }
}

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    StreamNotFound,
    ChannelNotFound,
    Registry(RegistryError),
    Render(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::StreamNotFound => {
                Message::error("stream not found").into_response_with(StatusCode::NOT_FOUND)
            }
            HttpError::ChannelNotFound => {
                Message::error("channel not found").into_response_with(StatusCode::NOT_FOUND)
            }
            HttpError::Registry(err) => {
                tracing::warn!("Stream listing failed: {}", err);
                Message::error(err.to_string()).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            }
            HttpError::Render(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

impl From<RegistryError> for HttpError {
    fn from(err: RegistryError) -> Self {
        HttpError::Registry(err)
    }
}

/// Extension trait for AppState
pub trait AppStateExt {
    fn get_stream_or_error(&self, uuid: &str) -> Result<StreamSummary, HttpError>;
}

impl AppStateExt for AppState {
    fn get_stream_or_error(&self, uuid: &str) -> Result<StreamSummary, HttpError> {
        self.registry.stream(uuid).ok_or(HttpError::StreamNotFound)
    }
}

/// Stream listing
/// GET /streams
pub async fn list_streams(State(state): State<Arc<AppState>>) -> Result<Response, HttpError> {
    let list = state.registry.list_streams()?;
    Ok(Message::ok(list).into_response_with(StatusCode::OK))
}

/// Single stream details
/// GET /stream/{uuid}/info
pub async fn stream_info(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> Result<Response, HttpError> {
    let stream = state.get_stream_or_error(&uuid)?;
    Ok(Message::ok(StreamView::from(&stream)).into_response_with(StatusCode::OK))
}

/// Single channel details
/// GET /stream/{uuid}/channel/{channel}/info
pub async fn channel_info(
    State(state): State<Arc<AppState>>,
    Path((uuid, channel)): Path<(String, String)>,
) -> Result<Response, HttpError> {
    let stream = state.get_stream_or_error(&uuid)?;
    let channel = stream
        .channels
        .get(&channel)
        .map(ChannelView::from)
        .ok_or(HttpError::ChannelNotFound)?;
    Ok(Message::ok(channel).into_response_with(StatusCode::OK))
}

/// Fallback for unregistered routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ok_envelope() {
        let response = Message::ok(vec!["a", "b"]).into_response_with(StatusCode::OK);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": 1, "payload": ["a", "b"]})
        );
    }

    #[tokio::test]
    async fn test_envelope_is_indented() {
        let response = Message::ok(serde_json::json!([1])).into_response_with(StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            "{\n    \"status\": 1,\n    \"payload\": [\n        1\n    ]\n}"
        );
    }

    #[tokio::test]
    async fn test_registry_error_envelope() {
        let response =
            HttpError::Registry(RegistryError::Unavailable("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": 0, "payload": "boom"})
        );
    }

    #[tokio::test]
    async fn test_not_found_envelopes() {
        let response = HttpError::StreamNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["payload"], "stream not found");

        let response = HttpError::ChannelNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["payload"], "channel not found");
    }
}
