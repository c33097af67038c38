//! Metadata service.
//!
//! Routes key-value metadata calls to the appropriate API version.

use crate::config::BossConfig;
use crate::error::{BossError, Result};
use crate::resource::ChannelResource;
use crate::service::{v0_7, BossSession};

/// A version-specific implementation of the metadata operations.
pub trait MetadataBackend {
    fn list(&self, session: &BossSession, resource: &ChannelResource) -> Result<Vec<String>>;

    fn get(&self, session: &BossSession, resource: &ChannelResource, key: &str) -> Result<String>;

    fn create(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        key: &str,
        value: &str,
    ) -> Result<()>;

    fn update(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        key: &str,
        value: &str,
    ) -> Result<()>;

    fn delete(&self, session: &BossSession, resource: &ChannelResource, key: &str) -> Result<()>;
}

fn backend_for_version(version: &str) -> Result<Box<dyn MetadataBackend>> {
    match version {
        v0_7::VERSION => Ok(Box::new(v0_7::metadata::MetadataService0_7::new())),
        _ => Err(BossError::InvalidVersion(version.to_string())),
    }
}

pub struct MetadataService {
    session: BossSession,
    backend: Box<dyn MetadataBackend>,
}

impl MetadataService {
    pub fn new(config: &BossConfig, version: &str) -> Result<MetadataService> {
        let backend = backend_for_version(version)?;
        Ok(MetadataService {
            session: BossSession::new(config)?,
            backend,
        })
    }

    pub fn set_verify_ssl(&mut self, verify: bool) -> Result<()> {
        self.session.set_verify_ssl(verify)
    }

    /// List the metadata keys attached to a resource.
    pub fn list(&self, resource: &ChannelResource) -> Result<Vec<String>> {
        self.backend.list(&self.session, resource)
    }

    pub fn get(&self, resource: &ChannelResource, key: &str) -> Result<String> {
        self.backend.get(&self.session, resource, key)
    }

    pub fn create(&self, resource: &ChannelResource, key: &str, value: &str) -> Result<()> {
        self.backend.create(&self.session, resource, key, value)
    }

    pub fn update(&self, resource: &ChannelResource, key: &str, value: &str) -> Result<()> {
        self.backend.update(&self.session, resource, key, value)
    }

    pub fn delete(&self, resource: &ChannelResource, key: &str) -> Result<()> {
        self.backend.delete(&self.session, resource, key)
    }
}
