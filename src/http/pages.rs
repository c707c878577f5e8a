//! Web UI pages
//!
//! Renders the operator views from `templates/*` under the web root.

use axum::{
    extract::{Path, State},
    response::Html,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tera::{Context, Tera};

use super::handlers::HttpError;
use crate::registry::StreamView;
use crate::state::AppState;

pub const INDEX_TEMPLATE: &str = "index.tmpl";
pub const PLAY_WEBRTC_TEMPLATE: &str = "play_webrtc.tmpl";

/// Loaded page templates
#[derive(Debug)]
pub struct Pages {
    tera: Tera,
}

impl Pages {
    /// Load every template matching `glob`. Templates are named by their
    /// file name, e.g. `index.tmpl`.
    pub fn load(glob: &str) -> tera::Result<Self> {
        let tera = Tera::new(glob)?;
        tracing::debug!(
            "Loaded templates: {:?}",
            tera.get_template_names().collect::<Vec<_>>()
        );
        Ok(Self::from_tera(tera))
    }

    /// Build from in-memory `(name, source)` pairs
    pub fn from_raw(templates: &[(&str, &str)]) -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())?;
        Ok(Self::from_tera(tera))
    }

    fn from_tera(mut tera: Tera) -> Self {
        tera.autoescape_on(vec![".tmpl", ".html"]);
        Self { tera }
    }

    #[cfg(test)]
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    pub fn render(&self, name: &str, context: &PageContext) -> tera::Result<String> {
        self.tera.render(name, &Context::from_serialize(context)?)
    }
}

/// Values exposed to every page template
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub port: String,
    pub streams: BTreeMap<String, StreamView>,
    pub version: String,
    pub page: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl PageContext {
    fn new(state: &AppState, page: &'static str) -> Self {
        Self {
            port: state.config.listen_address.clone(),
            streams: state
                .registry
                .streams()
                .iter()
                .map(|(uuid, stream)| (uuid.clone(), StreamView::from(stream)))
                .collect(),
            version: chrono::Local::now().to_string(),
            page,
            uuid: None,
            channel: None,
        }
    }

    pub fn index(state: &AppState) -> Self {
        Self::new(state, "index")
    }

    /// Path parameters are passed through untouched, empty strings included.
    pub fn play_webrtc(state: &AppState, uuid: String, channel: String) -> Self {
        Self {
            uuid: Some(uuid),
            channel: Some(channel),
            ..Self::new(state, "play_webrtc")
        }
    }
}

fn render(state: &AppState, template: &str, context: PageContext) -> Result<Html<String>, HttpError> {
    let pages = state
        .pages
        .as_ref()
        .ok_or_else(|| HttpError::Render("templates not loaded".to_string()))?;

    pages
        .render(template, &context)
        .map(Html)
        .map_err(|e| HttpError::Render(format!("Failed to render {}: {}", template, e)))
}

/// Stream overview page
/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, HttpError> {
    render(&state, INDEX_TEMPLATE, PageContext::index(&state))
}

/// WebRTC player page
/// GET /pages/player/webrtc/{uuid}/{channel}
pub async fn play_webrtc(
    State(state): State<Arc<AppState>>,
    Path((uuid, channel)): Path<(String, String)>,
) -> Result<Html<String>, HttpError> {
    let context = PageContext::play_webrtc(&state, uuid, channel);
    render(&state, PLAY_WEBRTC_TEMPLATE, context)
}
