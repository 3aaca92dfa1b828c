// ABOUTME: Configuration types and parsing for goploy.yml.
// ABOUTME: Handles YAML parsing, secret interpolation, and profile merging.

mod env_value;
mod init;

pub use env_value::{EnvValue, resolve_optional};
pub use init::init_config;

use crate::error::{Error, Result};
use crate::transport::{BaseUrl, HttpTransport, HttpTransportConfig};
use crate::types::NamespaceId;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "goploy.yml";
pub const CONFIG_FILENAME_ALT: &str = "goploy.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".goploy/config.yml";

pub const DEFAULT_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub url: String,

    #[serde(default)]
    pub namespace_id: Option<NamespaceId>,

    #[serde(default)]
    pub api_key: Option<EnvValue>,

    #[serde(default)]
    pub token: Option<EnvValue>,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Per-server overrides selected with `--profile`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub namespace_id: Option<NamespaceId>,

    #[serde(default)]
    pub api_key: Option<EnvValue>,

    #[serde(default)]
    pub token: Option<EnvValue>,

    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    pub fn for_profile(&self, name: &str) -> Result<Config> {
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))?;

        let mut merged = self.clone();

        if let Some(ref url) = profile.url {
            merged.url = url.clone();
        }
        if profile.namespace_id.is_some() {
            merged.namespace_id = profile.namespace_id;
        }
        if profile.api_key.is_some() {
            merged.api_key = profile.api_key.clone();
        }
        if profile.token.is_some() {
            merged.token = profile.token.clone();
        }
        if let Some(timeout) = profile.timeout {
            merged.timeout = timeout;
        }

        merged.validate()?;
        Ok(merged)
    }

    pub fn base_url(&self) -> Result<BaseUrl> {
        BaseUrl::parse(&self.url).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Resolve secrets and build the transport settings.
    pub fn transport_config(&self) -> Result<HttpTransportConfig> {
        let mut config = HttpTransportConfig::new(self.base_url()?).default_timeout(self.timeout);

        if let Some(id) = self.namespace_id {
            config = config.namespace_id(id);
        }
        if let Some(key) = resolve_optional(self.api_key.as_ref())? {
            config = config.api_key(key);
        }
        if let Some(token) = resolve_optional(self.token.as_ref())? {
            config = config.token(token);
        }

        Ok(config)
    }

    pub fn transport(&self) -> Result<HttpTransport> {
        Ok(HttpTransport::new(self.transport_config()?))
    }

    fn validate(&self) -> Result<()> {
        self.base_url()?;
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
