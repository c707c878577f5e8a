//! Axum router configuration

use axum::{
    middleware,
    routing::{on, MethodFilter},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::state::AppState;

use super::handlers::{channel_info, list_streams, not_found, stream_info};
use super::middleware::{basic_auth, cross_origin};
use super::pages::{index, play_webrtc};

/// Whether a route sits behind the auth gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Handler behind a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Index,
    PlayWebrtc,
    Streams,
    Static,
    StreamInfo,
    ChannelInfo,
}

/// One row of the route table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEntry {
    pub method: MethodFilter,
    pub pattern: &'static str,
    pub endpoint: Endpoint,
    pub visibility: Visibility,
}

impl RouteEntry {
    const fn get(pattern: &'static str, endpoint: Endpoint, visibility: Visibility) -> Self {
        Self {
            method: MethodFilter::GET,
            pattern,
            endpoint,
            visibility,
        }
    }
}

/// Routes registered only in demo mode.
///
/// `/streams` is public even when credentials are configured; the stream
/// lookups sit behind the auth gate.
const DEMO_ROUTES: [RouteEntry; 6] = [
    RouteEntry::get("/", Endpoint::Index, Visibility::Public),
    RouteEntry::get(
        "/pages/player/webrtc/{uuid}/{channel}",
        Endpoint::PlayWebrtc,
        Visibility::Public,
    ),
    RouteEntry::get("/streams", Endpoint::Streams, Visibility::Public),
    RouteEntry::get("/static", Endpoint::Static, Visibility::Public),
    RouteEntry::get("/stream/{uuid}/info", Endpoint::StreamInfo, Visibility::Private),
    RouteEntry::get(
        "/stream/{uuid}/channel/{channel}/info",
        Endpoint::ChannelInfo,
        Visibility::Private,
    ),
];

/// Route table for a configuration snapshot
pub fn route_table(config: &GatewayConfig) -> Vec<RouteEntry> {
    if config.demo {
        DEMO_ROUTES.to_vec()
    } else {
        Vec::new()
    }
}

fn mount(
    router: Router<Arc<AppState>>,
    entry: &RouteEntry,
    config: &GatewayConfig,
) -> Router<Arc<AppState>> {
    let pattern = entry.pattern;
    let method = entry.method;
    match entry.endpoint {
        Endpoint::Index => router.route(pattern, on(method, index)),
        Endpoint::PlayWebrtc => router.route(pattern, on(method, play_webrtc)),
        Endpoint::Streams => router.route(pattern, on(method, list_streams)),
        Endpoint::StreamInfo => router.route(pattern, on(method, stream_info)),
        Endpoint::ChannelInfo => router.route(pattern, on(method, channel_info)),
        Endpoint::Static => router.nest_service(pattern, ServeDir::new(config.static_dir())),
    }
}

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let config = state.config.clone();

    let mut public = Router::new();
    let mut private = Router::new();
    let mut has_private = false;

    for entry in route_table(&config) {
        match entry.visibility {
            Visibility::Public => public = mount(public, &entry, &config),
            Visibility::Private => {
                private = mount(private, &entry, &config);
                has_private = true;
            }
        }
    }

    // Without a complete login/password pair the private group is
    // indistinguishable from the public one.
    if let Some(credentials) = config.credentials() {
        if has_private {
            private = private.route_layer(middleware::from_fn_with_state(
                Arc::new(credentials),
                basic_auth,
            ));
        }
    }

    let mut app = public.merge(private).fallback(not_found);
    if config.debug {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.layer(middleware::from_fn(cross_origin)).with_state(state)
}
