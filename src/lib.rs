//! Stream Gateway
//!
//! HTTP front door for a live-streaming backend: an operator web UI, a JSON
//! listing of active streams and optional Basic auth for the stream API.
//!
//! The stream backend plugs in through [`registry::StreamRegistry`]; the
//! bundled [`registry::MemoryRegistry`] serves streams from the config file.

pub mod config;
pub mod config_file;
pub mod error;
pub mod gateway;
pub mod http;
pub mod registry;
pub mod state;
