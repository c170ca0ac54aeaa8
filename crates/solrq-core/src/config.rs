//! Endpoint configuration loader and path helpers.
//!
//! Uses Figment to merge `solrq.toml` + `solrq.<env>.toml` + `SOLRQ_*` env vars.
//! The loaded [`SolrqConfig`] is a plain value handed to whoever resolves
//! endpoints; nothing here is process-wide.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "solrq.toml";

/// One named endpoint: base URL plus default handler, headers and timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), handler: None, headers: BTreeMap::new(), timeout_ms: None }
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolrqConfig {
    #[serde(default)]
    pub endpoints: BTreeMap<String, EndpointConfig>,
}

impl SolrqConfig {
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment(Path::new(DEFAULT_CONFIG_FILE)))
    }

    /// Loads from an explicit file; `~` and `${VAR}` are expanded first.
    ///
    /// Unlike [`SolrqConfig::load`], the named file must exist.
    pub fn load_from<S: AsRef<str>>(path: S) -> Result<Self> {
        let path = expand_path(path);
        if !path.is_file() {
            return Err(Error::InvalidConfig(format!("config file {} not found", path.display())));
        }
        Self::from_figment(Self::figment(&path))
    }

    /// Base file, then its `<stem>.<env>.toml` sibling, then `SOLRQ_*` variables.
    pub fn figment(path: &Path) -> Figment {
        let env_name = env::var("SOLRQ_ENV").unwrap_or_else(|_| "dev".to_string());
        let mut figment = Figment::new().merge(Toml::file(path));
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            figment = figment.merge(Toml::file(path.with_file_name(format!("{stem}.{env_name}.toml"))));
        }
        figment.merge(Env::prefixed("SOLRQ_").split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract().map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, endpoint) in &self.endpoints {
            url::Url::parse(&endpoint.url)
                .map_err(|e| Error::InvalidConfig(format!("endpoint '{}' has invalid url '{}': {}", name, endpoint.url, e)))?;
        }
        Ok(())
    }

    pub fn endpoint(&self, name: &str) -> Result<&EndpointConfig> {
        self.endpoints.get(name).ok_or_else(|| Error::EndpointNotConfigured(name.to_string()))
    }

    pub fn with_endpoint(mut self, name: impl Into<String>, endpoint: EndpointConfig) -> Self {
        self.endpoints.insert(name.into(), endpoint);
        self
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
