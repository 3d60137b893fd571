//! Site configuration.
//!
//! The configuration file is TOML. Every key is optional:
//!
//! ```toml
//! host = "https://kalkyl.example.se"
//!
//! [flags]
//! show_footer_calculators = false
//!
//! [flags.calculator_visibility]
//! loan = true
//! mortgage = false
//! ```
//!
//! `flags` is merged over the hard-coded defaults exactly as the web front
//! end merges its initialization object, so ids not listed stay visible.
//! Without a file the launch visibility set applies instead.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use kalkyl_core::{FlagOverrides, Registry, Session};

pub const DEFAULT_HOST: &str = "https://kalkyl.example.se";

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
}

/// Mirrors the TOML layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    host: Option<String>,
    flags: Option<FlagOverrides>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: Url,
    pub overrides: FlagOverrides,
}

impl SiteConfig {
    /// Launch defaults: [`DEFAULT_HOST`] and [`FlagOverrides::launch`].
    pub fn launch(registry: &Registry) -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_host(DEFAULT_HOST)?,
            overrides: FlagOverrides::launch(registry),
        })
    }

    /// Parses TOML text. `origin` is only used in error messages.
    pub fn from_toml(
        text: &str,
        origin: &Path,
        registry: &Registry,
    ) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        let host = parse_host(file.host.as_deref().unwrap_or(DEFAULT_HOST))?;
        let overrides = file.flags.unwrap_or_default();

        for id in overrides.calculator_visibility.keys() {
            if registry.get(id).is_none() {
                tracing::warn!(id = %id, path = %origin.display(), "visibility set for unknown calculator");
            }
        }

        Ok(Self { host, overrides })
    }

    /// Reads and parses `path`.
    pub fn load(
        path: &Path,
        registry: &Registry,
    ) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path, registry)
    }

    /// Loads `path` when given, otherwise the launch defaults, then
    /// applies a `--host` override.
    pub fn resolve(
        path: Option<&Path>,
        host: Option<&str>,
        registry: &Registry,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path, registry)?,
            None => Self::launch(registry)?,
        };
        if let Some(host) = host {
            config.host = parse_host(host)?;
        }
        Ok(config)
    }

    /// Builds the session the commands run against.
    pub fn session(
        &self,
        registry: Registry,
    ) -> Session {
        Session::new(registry, self.overrides.clone())
    }
}

fn parse_host(host: &str) -> Result<Url, ConfigError> {
    Url::parse(host).map_err(|source| ConfigError::InvalidHost {
        host: host.to_string(),
        source,
    })
}
