//! Configuration module.
//!
//! Gets connection settings from a named TOML config file and from
//! environment variables.  Values set as environment variables override
//! like values in the config file.

use crate::error::Result;
use serde_derive::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const BOSSHOST_ENV_NAME: &str = "BOSSHOST";
const BOSSTOKEN_ENV_NAME: &str = "BOSSTOKEN";

const PROTOCOL_DEFAULT: &str = "https";
const TOKEN_DEFAULT: &str = "public";

fn default_protocol() -> String {
    PROTOCOL_DEFAULT.to_string()
}

fn default_token() -> String {
    TOKEN_DEFAULT.to_string()
}

fn default_verify_ssl() -> bool {
    true
}

/// Connection settings shared by every service of a [`crate::BossRemote`].
#[derive(Clone, Debug, Deserialize)]
pub struct BossConfig {
    /// Generally one of `http` or `https`.
    #[serde(default = "default_protocol")]
    pub protocol: String,
    /// The API root of the Boss instance, e.g. `api.bossdb.io`.
    pub host: String,
    /// The token sent with ALL requests made through this config.
    #[serde(default = "default_token")]
    pub token: String,
    /// Set to false when talking to developer instances with self-signed
    /// certificates.
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

impl BossConfig {
    pub fn new(host: &str, token: &str) -> BossConfig {
        BossConfig {
            protocol: default_protocol(),
            host: host.to_string(),
            token: token.to_string(),
            verify_ssl: true,
        }
    }

    /// Load settings from a named TOML file, then let `BOSSHOST` and
    /// `BOSSTOKEN` environment variables override what the file said.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BossConfig> {
        let contents = fs::read_to_string(path)?;
        let mut config: BossConfig = toml::from_str(&contents)?;
        config.apply_overrides(
            env::var(BOSSHOST_ENV_NAME).ok(),
            env::var(BOSSTOKEN_ENV_NAME).ok(),
        );
        Ok(config)
    }

    fn apply_overrides(&mut self, host: Option<String>, token: Option<String>) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(token) = token {
            self.token = token;
        }
    }
}
