//! Project service.
//!
//! Routes user-account and channel-metadata calls to the appropriate
//! API version.

use crate::config::BossConfig;
use crate::error::{BossError, Result};
use crate::resource::ChannelResource;
use crate::service::v0_7::project::{ChannelMetadata, User};
use crate::service::{v0_7, BossSession};

/// A version-specific implementation of the project operations.
pub trait ProjectBackend {
    fn user_add(
        &self,
        session: &BossSession,
        username: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<()>;

    fn user_get(&self, session: &BossSession, username: &str) -> Result<User>;

    fn user_delete(&self, session: &BossSession, username: &str) -> Result<()>;

    fn get_channel(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
    ) -> Result<ChannelMetadata>;
}

fn backend_for_version(version: &str) -> Result<Box<dyn ProjectBackend>> {
    match version {
        v0_7::VERSION => Ok(Box::new(v0_7::project::ProjectService0_7::new())),
        _ => Err(BossError::InvalidVersion(version.to_string())),
    }
}

pub struct ProjectService {
    session: BossSession,
    backend: Box<dyn ProjectBackend>,
}

impl ProjectService {
    pub fn new(config: &BossConfig, version: &str) -> Result<ProjectService> {
        let backend = backend_for_version(version)?;
        Ok(ProjectService {
            session: BossSession::new(config)?,
            backend,
        })
    }

    pub fn set_verify_ssl(&mut self, verify: bool) -> Result<()> {
        self.session.set_verify_ssl(verify)
    }

    pub fn user_add(
        &self,
        username: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        self.backend.user_add(
            &self.session,
            username,
            first_name,
            last_name,
            email,
            password,
        )
    }

    /// Fails with an HTTP error when the user does not exist.
    pub fn user_get(&self, username: &str) -> Result<User> {
        self.backend.user_get(&self.session, username)
    }

    /// Fails with an HTTP error when the user does not exist.
    pub fn user_delete(&self, username: &str) -> Result<()> {
        self.backend.user_delete(&self.session, username)
    }

    pub fn get_channel(&self, resource: &ChannelResource) -> Result<ChannelMetadata> {
        self.backend.get_channel(&self.session, resource)
    }
}
