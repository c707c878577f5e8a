//! Stream registry
//!
//! The gateway only ever reads from the registry:
//! - `list_streams` feeds the JSON listing
//! - `streams` feeds page rendering
//! - `stream` resolves a single stream by uuid

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::RegistryError;

/// Channel metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    #[serde(default)]
    pub name: String,
    /// Source URL, often carrying camera credentials
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub on_demand: bool,
    #[serde(default)]
    pub debug: bool,
}

/// Stream metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub channels: BTreeMap<String, ChannelSummary>,
}

/// Channel as shown over HTTP, without the source URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelView {
    pub name: String,
    pub on_demand: bool,
    pub debug: bool,
}

impl From<&ChannelSummary> for ChannelView {
    fn from(channel: &ChannelSummary) -> Self {
        Self {
            name: channel.name.clone(),
            on_demand: channel.on_demand,
            debug: channel.debug,
        }
    }
}

/// Stream as shown over HTTP
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamView {
    pub name: String,
    pub channels: BTreeMap<String, ChannelView>,
}

impl From<&StreamSummary> for StreamView {
    fn from(stream: &StreamSummary) -> Self {
        Self {
            name: stream.name.clone(),
            channels: stream
                .channels
                .iter()
                .map(|(id, channel)| (id.clone(), ChannelView::from(channel)))
                .collect(),
        }
    }
}

/// Entry of the JSON stream listing
#[derive(Debug, Serialize)]
struct ListedStream<'a> {
    uuid: &'a str,
    #[serde(flatten)]
    stream: StreamView,
}

/// Read-only view of the active streams.
///
/// Implementations must tolerate concurrent calls from request handlers.
pub trait StreamRegistry: Send + Sync {
    /// Serialized list of every active stream
    fn list_streams(&self) -> Result<serde_json::Value, RegistryError>;

    /// Live stream collection keyed by uuid
    fn streams(&self) -> BTreeMap<String, StreamSummary>;

    /// Look up one stream
    fn stream(&self, uuid: &str) -> Option<StreamSummary>;
}

/// In-memory registry, populated from the configuration file
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    streams: DashMap<String, StreamSummary>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_streams(streams: BTreeMap<String, StreamSummary>) -> Self {
        let registry = Self::new();
        for (uuid, stream) in streams {
            registry.insert(uuid, stream);
        }
        registry
    }

    /// Register or replace a stream
    pub fn insert(&self, uuid: impl Into<String>, stream: StreamSummary) {
        self.streams.insert(uuid.into(), stream);
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

impl StreamRegistry for MemoryRegistry {
    fn list_streams(&self) -> Result<serde_json::Value, RegistryError> {
        let streams = self.streams();
        let listed: Vec<_> = streams
            .iter()
            .map(|(uuid, stream)| ListedStream {
                uuid,
                stream: StreamView::from(stream),
            })
            .collect();
        Ok(serde_json::to_value(listed)?)
    }

    fn streams(&self) -> BTreeMap<String, StreamSummary> {
        self.streams
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }

    fn stream(&self, uuid: &str) -> Option<StreamSummary> {
        self.streams.get(uuid).map(|r| r.value().clone())
    }
}
