//! User and channel marshaling for API v0.7.

use crate::error::Result;
use crate::resource::ChannelResource;
use crate::service::project::ProjectBackend;
use crate::service::BossSession;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body posted to `sso/user/{username}`.
#[derive(Serialize)]
struct NewUser<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// A user record as the server returns it.  The server adds generated
/// fields such as creation time; those land in `extra` untouched.
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Metadata corresponding to a channel.
///
/// A struct holder for the metadata returned by Bosslikes at the
/// channel-metadata endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ChannelMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub experiment: String,
    pub collection: String,
    #[serde(default)]
    pub default_time_sample: u64,
    #[serde(rename = "type")]
    pub channel_type: String,
    #[serde(default)]
    pub base_resolution: u64,
    pub datatype: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub downsample_status: String,
    #[serde(default)]
    pub related: Vec<String>,
}

pub struct ProjectService0_7;

impl ProjectService0_7 {
    pub fn new() -> ProjectService0_7 {
        ProjectService0_7
    }
}

fn user_suffix(username: &str) -> String {
    format!("sso/user/{}", username)
}

fn channel_suffix(resource: &ChannelResource) -> String {
    format!(
        "collection/{}/experiment/{}/channel/{}",
        resource.collection, resource.experiment, resource.channel
    )
}

impl ProjectBackend for ProjectService0_7 {
    fn user_add(
        &self,
        session: &BossSession,
        username: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let url = session.build_url(super::VERSION, &user_suffix(username));
        let body = NewUser {
            first_name,
            last_name,
            email,
            password,
        };
        session.send(session.post(&url).json(&body))?;
        Ok(())
    }

    fn user_get(&self, session: &BossSession, username: &str) -> Result<User> {
        let url = session.build_url(super::VERSION, &user_suffix(username));
        let response = session.send(session.get(&url))?;
        Ok(response.json()?)
    }

    fn user_delete(&self, session: &BossSession, username: &str) -> Result<()> {
        let url = session.build_url(super::VERSION, &user_suffix(username));
        session.send(session.delete(&url))?;
        Ok(())
    }

    fn get_channel(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
    ) -> Result<ChannelMetadata> {
        let url = session.build_url(super::VERSION, &channel_suffix(resource));
        let response = session.send(session.get(&url))?;
        Ok(response.json()?)
    }
}
