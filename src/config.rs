//! Gateway configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// A single Basic auth account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// Operating mode of the gateway.
///
/// Captured once at startup and shared read-only afterwards; router assembly
/// is a pure function of this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Verbose request tracing and debug-level logs
    pub debug: bool,

    /// Register the web UI, the stream listing and static files
    pub demo: bool,

    /// Basic auth login for the private routes (empty disables auth)
    pub login: String,

    /// Basic auth password for the private routes (empty disables auth)
    pub password: String,

    /// Address to listen on, either `host:port` or `:port`
    pub listen_address: String,

    /// Web root holding `templates/` and `static/`
    pub dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            debug: false,
            demo: true,
            login: String::new(),
            password: String::new(),
            listen_address: ":8083".to_string(),
            dir: PathBuf::from("web"),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl GatewayConfig {
    /// Get the socket address string, filling in the wildcard host when the
    /// address only names a port.
    pub fn socket_addr(&self) -> String {
        if self.listen_address.starts_with(':') {
            format!("0.0.0.0{}", self.listen_address)
        } else {
            self.listen_address.clone()
        }
    }

    /// Credentials for the private route group.
    ///
    /// `None` unless both login and password are set, in which case the
    /// private group is served without any check.
    pub fn credentials(&self) -> Option<Credentials> {
        if self.login.is_empty() || self.password.is_empty() {
            return None;
        }
        Some(Credentials {
            login: self.login.clone(),
            password: self.password.clone(),
        })
    }

    /// Glob matching the page templates
    pub fn templates_glob(&self) -> String {
        format!("{}/templates/*", self.dir.display())
    }

    /// Directory served under `/static`
    pub fn static_dir(&self) -> PathBuf {
        self.dir.join("static")
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> String {
        if self.debug {
            "stream_gateway=debug,tower_http=debug".to_string()
        } else {
            format!("stream_gateway={}", self.log_level)
        }
    }
}
