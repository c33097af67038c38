//! Top-level remote facade.
//!
//! A `BossRemote` bundles the project, metadata, and volume services for
//! one Boss instance and one API version, and forwards the common
//! operations so callers rarely need to touch the services directly.

use crate::config::BossConfig;
use crate::error::Result;
use crate::resource::ChannelResource;
use crate::service::metadata::MetadataService;
use crate::service::project::ProjectService;
use crate::service::v0_7::project::{ChannelMetadata, User};
use crate::service::volume::VolumeService;
use crate::service::Extents;
use ndarray::ArrayD;
use std::path::Path;

pub struct BossRemote {
    pub project_service: ProjectService,
    pub metadata_service: MetadataService,
    pub volume_service: VolumeService,
}

impl BossRemote {
    /// Build a remote from explicit settings.  Fails if `version` has no
    /// registered backend, before any network traffic.
    pub fn new(config: &BossConfig, version: &str) -> Result<BossRemote> {
        Ok(BossRemote {
            project_service: ProjectService::new(config, version)?,
            metadata_service: MetadataService::new(config, version)?,
            volume_service: VolumeService::new(config, version)?,
        })
    }

    /// Build a remote from a named config file (TOML), honoring the
    /// `BOSSHOST`/`BOSSTOKEN` environment overrides.
    pub fn from_config_file<P: AsRef<Path>>(path: P, version: &str) -> Result<BossRemote> {
        let config = BossConfig::from_file(path)?;
        BossRemote::new(&config, version)
    }

    /// Turn TLS certificate verification on or off for all three
    /// services.  Necessary for developer instances of the Boss.
    pub fn set_verify_ssl(&mut self, verify: bool) -> Result<()> {
        self.project_service.set_verify_ssl(verify)?;
        self.metadata_service.set_verify_ssl(verify)?;
        self.volume_service.set_verify_ssl(verify)
    }

    pub fn user_add(
        &self,
        username: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        self.project_service
            .user_add(username, first_name, last_name, email, password)
    }

    pub fn user_get(&self, username: &str) -> Result<User> {
        self.project_service.user_get(username)
    }

    pub fn user_delete(&self, username: &str) -> Result<()> {
        self.project_service.user_delete(username)
    }

    pub fn get_channel(&self, resource: &ChannelResource) -> Result<ChannelMetadata> {
        self.project_service.get_channel(resource)
    }

    pub fn list_metadata(&self, resource: &ChannelResource) -> Result<Vec<String>> {
        self.metadata_service.list(resource)
    }

    pub fn get_metadata(&self, resource: &ChannelResource, key: &str) -> Result<String> {
        self.metadata_service.get(resource, key)
    }

    pub fn create_metadata(
        &self,
        resource: &ChannelResource,
        key: &str,
        value: &str,
    ) -> Result<()> {
        self.metadata_service.create(resource, key, value)
    }

    pub fn update_metadata(
        &self,
        resource: &ChannelResource,
        key: &str,
        value: &str,
    ) -> Result<()> {
        self.metadata_service.update(resource, key, value)
    }

    pub fn delete_metadata(&self, resource: &ChannelResource, key: &str) -> Result<()> {
        self.metadata_service.delete(resource, key)
    }

    pub fn cutout_create(
        &self,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
        volume: &ArrayD<u8>,
        time_range: Option<Extents>,
    ) -> Result<()> {
        self.volume_service.cutout_create(
            resource, resolution, x_range, y_range, z_range, volume, time_range,
        )
    }

    pub fn cutout_get(
        &self,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
        time_range: Option<Extents>,
    ) -> Result<ArrayD<u8>> {
        self.volume_service
            .cutout_get(resource, resolution, x_range, y_range, z_range, time_range)
    }

    pub fn cutout_get_jpeg(
        &self,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
    ) -> Result<ArrayD<u8>> {
        self.volume_service
            .cutout_get_jpeg(resource, resolution, x_range, y_range, z_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BossError;

    #[test]
    fn unknown_version_fails_construction() {
        let config = BossConfig::new("api.bossdb.io", "public");
        assert!(matches!(
            BossRemote::new(&config, "v0.6"),
            Err(BossError::InvalidVersion(_))
        ));
    }

    #[test]
    fn known_version_constructs() {
        let config = BossConfig::new("api.bossdb.io", "public");
        assert!(BossRemote::new(&config, "v0.7").is_ok());
    }
}
