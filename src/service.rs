//! Service layer.
//!
//! Each Boss service (volume, project, metadata) is a thin router that
//! holds one HTTP session and one version-specific backend selected at
//! construction time.  The backends do the actual URL building and
//! request marshaling.

pub mod metadata;
pub mod project;
pub mod v0_7;
pub mod volume;

use crate::config::BossConfig;
use crate::error::{BossError, Result};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::AUTHORIZATION;

/// A half-open `[start, stop)` interval along one axis.
pub type Extents = (u64, u64);

/// Shared connection state handed to every backend call: base URL parts,
/// auth token, the HTTP client, and its send options.
pub struct BossSession {
    protocol: String,
    host: String,
    token: String,
    verify_ssl: bool,
    client: Client,
}

impl BossSession {
    pub fn new(config: &BossConfig) -> Result<BossSession> {
        Ok(BossSession {
            protocol: config.protocol.clone(),
            host: config.host.clone(),
            token: config.token.clone(),
            verify_ssl: config.verify_ssl,
            client: build_client(config.verify_ssl)?,
        })
    }

    /// Turn TLS certificate verification on or off.  Necessary for
    /// interacting with developer instances of the Boss.  The underlying
    /// client fixes its TLS policy at build time, so this rebuilds it.
    pub fn set_verify_ssl(&mut self, verify: bool) -> Result<()> {
        if verify != self.verify_ssl {
            self.client = build_client(verify)?;
            self.verify_ssl = verify;
        }
        Ok(())
    }

    /// Build a full endpoint URL for one API version.
    pub fn build_url(&self, version: &str, suffix: &str) -> String {
        format!("{}://{}/{}/{}", self.protocol, self.host, version, suffix)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        debug!("GET {}", url);
        self.authorized(self.client.get(url))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        debug!("POST {}", url);
        self.authorized(self.client.post(url))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        debug!("PUT {}", url);
        self.authorized(self.client.put(url))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        debug!("DELETE {}", url);
        self.authorized(self.client.delete(url))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("token {}", self.token))
    }

    /// Send a request and map any non-success status to
    /// [`BossError::Status`], body passed through untranslated.
    pub fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let body = response.text().unwrap_or_default();
        debug!("{} from {}", status, url);
        Err(BossError::Status { status, url, body })
    }
}

fn build_client(verify_ssl: bool) -> Result<Client> {
    let client = Client::builder()
        .danger_accept_invalid_certs(!verify_ssl)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BossSession {
        BossSession::new(&BossConfig::new("api.bossdb.io", "public")).unwrap()
    }

    #[test]
    fn build_url_includes_version() {
        let session = session();
        assert_eq!(
            session.build_url("v0.7", "sso/user/jdoe"),
            "https://api.bossdb.io/v0.7/sso/user/jdoe"
        );
    }

    #[test]
    fn toggle_verify_ssl() {
        let mut session = session();
        session.set_verify_ssl(false).unwrap();
        assert!(!session.verify_ssl);
        session.set_verify_ssl(true).unwrap();
        assert!(session.verify_ssl);
    }
}
