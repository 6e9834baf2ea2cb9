use std::net::SocketAddr;

use serde::Deserialize;
use reqstat_core::error::{Result, ReqstatError};
use reqstat_core::naming::DEFAULT_GLOBAL_LABEL;

use crate::middleware::FilterMode;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    pub statsd: StatsdSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ReqstatError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.statsd.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            ReqstatError::InvalidConfig(format!(
                "server.listen must be a valid SocketAddr, got {:?}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsdSection {
    #[serde(default = "default_address")]
    pub address: String,

    pub prefix: String,

    #[serde(default)]
    pub filter: FilterMode,

    /// Path prefixes that never get a per-path timing.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub global: GlobalSection,
}

impl StatsdSection {
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() || self.prefix.chars().any(char::is_whitespace) {
            return Err(ReqstatError::InvalidConfig(
                "statsd.prefix must be non-empty and contain no whitespace".into(),
            ));
        }
        if let Some(bad) = self.exclude.iter().find(|p| !p.starts_with('/')) {
            return Err(ReqstatError::InvalidConfig(format!(
                "statsd.exclude entries must start with '/': {bad}"
            )));
        }
        self.global.validate()
    }
}

fn default_address() -> String {
    "127.0.0.1:8125".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalSection {
    #[serde(default = "default_global_enabled")]
    pub enabled: bool,

    #[serde(default = "default_global_label")]
    pub label: String,
}

impl Default for GlobalSection {
    fn default() -> Self {
        Self {
            enabled: default_global_enabled(),
            label: default_global_label(),
        }
    }
}

impl GlobalSection {
    pub fn validate(&self) -> Result<()> {
        let l = &self.label;
        if l.is_empty() || l.starts_with('.') || l.ends_with('.') || l.chars().any(char::is_whitespace) {
            return Err(ReqstatError::InvalidConfig(format!(
                "statsd.global.label is not a valid metric segment: {l:?}"
            )));
        }
        Ok(())
    }
}

fn default_global_enabled() -> bool {
    true
}
fn default_global_label() -> String {
    DEFAULT_GLOBAL_LABEL.into()
}
