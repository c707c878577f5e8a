//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Route table split into public and private groups
//! - CORS and Basic auth middleware
//! - Web UI pages rendered from templates
//! - JSON stream endpoints with the `{status, payload}` envelope

pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;

pub use routes::create_router;
