//! Volume service.
//!
//! Routes cutout calls to the appropriate API version.

use crate::config::BossConfig;
use crate::error::{BossError, Result};
use crate::resource::ChannelResource;
use crate::service::{v0_7, BossSession, Extents};
use ndarray::ArrayD;

/// A version-specific implementation of the cutout operations.  Backends
/// own the REST path layout and body encoding for their version; the
/// router hands them the shared session and passes results and errors
/// through unmodified.
pub trait VolumeBackend {
    fn cutout_create(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
        time_range: Option<Extents>,
        volume: &ArrayD<u8>,
    ) -> Result<()>;

    fn cutout_get(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
        time_range: Option<Extents>,
    ) -> Result<ArrayD<u8>>;

    fn cutout_get_jpeg(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
    ) -> Result<ArrayD<u8>>;
}

/// Map an API version string to its backend.  If no match is found,
/// return an InvalidVersion error.
fn backend_for_version(version: &str) -> Result<Box<dyn VolumeBackend>> {
    match version {
        v0_7::VERSION => Ok(Box::new(v0_7::volume::VolumeService0_7::new())),
        _ => Err(BossError::InvalidVersion(version.to_string())),
    }
}

pub struct VolumeService {
    session: BossSession,
    backend: Box<dyn VolumeBackend>,
}

impl VolumeService {
    /// The backend is chosen once, here, by the version string; an
    /// unknown version fails before any network traffic.
    pub fn new(config: &BossConfig, version: &str) -> Result<VolumeService> {
        let backend = backend_for_version(version)?;
        Ok(VolumeService {
            session: BossSession::new(config)?,
            backend,
        })
    }

    pub fn set_verify_ssl(&mut self, verify: bool) -> Result<()> {
        self.session.set_verify_ssl(verify)
    }

    /// Upload a cutout to the volume service.
    ///
    /// # Arguments:
    ///
    /// * `resource` - Channel to write into
    /// * `resolution` - 0 indicates native resolution
    /// * `x_range` - Half-open range, e.g. `(10, 20)` means x>=10 and x<20
    /// * `volume` - A 3D or 4D (time) matrix in (time)ZYX order
    /// * `time_range` - Optional half-open time range
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
        self.backend.cutout_create(
            &self.session,
            resource,
            resolution,
            x_range,
            y_range,
            z_range,
            time_range,
            volume,
        )
    }

    /// Get a cutout from the volume service as a 3D or 4D (time) matrix
    /// in (time)ZYX order.
    pub fn cutout_get(
        &self,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
        time_range: Option<Extents>,
    ) -> Result<ArrayD<u8>> {
        self.backend.cutout_get(
            &self.session,
            resource,
            resolution,
            x_range,
            y_range,
            z_range,
            time_range,
        )
    }

    /// Get a cutout as a JPEG filmstrip.  Only valid for uint8 channels.
    pub fn cutout_get_jpeg(
        &self,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
    ) -> Result<ArrayD<u8>> {
        self.backend.cutout_get_jpeg(
            &self.session,
            resource,
            resolution,
            x_range,
            y_range,
            z_range,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_version_constructs() {
        let config = BossConfig::new("api.bossdb.io", "public");
        assert!(VolumeService::new(&config, "v0.7").is_ok());
    }

    #[test]
    fn unknown_version_is_rejected() {
        let config = BossConfig::new("api.bossdb.io", "public");
        match VolumeService::new(&config, "v0.4") {
            Err(BossError::InvalidVersion(version)) => assert_eq!(version, "v0.4"),
            _ => panic!("expected an invalid-version error"),
        }
    }
}
