//! Application state management
//!
//! `AppState` is shared by every handler and holds:
//! - The configuration snapshot
//! - The stream registry
//! - The page renderer (demo mode only)

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::error::Result;
use crate::http::pages::Pages;
use crate::registry::StreamRegistry;

/// Application state shared across all handlers
pub struct AppState {
    /// Configuration snapshot, fixed at startup
    pub config: Arc<GatewayConfig>,

    /// Source of stream metadata
    pub registry: Arc<dyn StreamRegistry>,

    /// Page templates, loaded only when the web UI is enabled
    pub pages: Option<Pages>,
}

impl AppState {
    /// Build state for `config`, loading templates from the web root when
    /// demo mode is enabled
    pub fn new(config: GatewayConfig, registry: Arc<dyn StreamRegistry>) -> Result<Self> {
        let pages = if config.demo {
            Some(Pages::load(&config.templates_glob())?)
        } else {
            None
        };

        Ok(Self::with_pages(config, registry, pages))
    }

    /// Build state with an already prepared renderer
    pub fn with_pages(
        config: GatewayConfig,
        registry: Arc<dyn StreamRegistry>,
        pages: Option<Pages>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            registry,
            pages,
        }
    }
}
