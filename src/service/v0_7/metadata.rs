//! Key-value metadata marshaling for API v0.7.
//!
//! All operations go through `meta/{collection}/{experiment}/{channel}`
//! with the key and value carried as query parameters.

use crate::error::Result;
use crate::resource::ChannelResource;
use crate::service::metadata::MetadataBackend;
use crate::service::BossSession;
use serde_derive::Deserialize;

#[derive(Deserialize)]
struct KeyList {
    keys: Vec<String>,
}

#[derive(Deserialize)]
struct KeyValue {
    value: String,
}

pub struct MetadataService0_7;

impl MetadataService0_7 {
    pub fn new() -> MetadataService0_7 {
        MetadataService0_7
    }
}

fn meta_suffix(resource: &ChannelResource) -> String {
    format!("meta/{}", resource.route())
}

impl MetadataBackend for MetadataService0_7 {
    fn list(&self, session: &BossSession, resource: &ChannelResource) -> Result<Vec<String>> {
        let url = session.build_url(super::VERSION, &meta_suffix(resource));
        let response = session.send(session.get(&url))?;
        let list: KeyList = response.json()?;
        Ok(list.keys)
    }

    fn get(&self, session: &BossSession, resource: &ChannelResource, key: &str) -> Result<String> {
        let url = session.build_url(super::VERSION, &meta_suffix(resource));
        let response = session.send(session.get(&url).query(&[("key", key)]))?;
        let pair: KeyValue = response.json()?;
        Ok(pair.value)
    }

    fn create(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let url = session.build_url(super::VERSION, &meta_suffix(resource));
        session.send(session.post(&url).query(&[("key", key), ("value", value)]))?;
        Ok(())
    }

    fn update(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let url = session.build_url(super::VERSION, &meta_suffix(resource));
        session.send(session.put(&url).query(&[("key", key), ("value", value)]))?;
        Ok(())
    }

    fn delete(&self, session: &BossSession, resource: &ChannelResource, key: &str) -> Result<()> {
        let url = session.build_url(super::VERSION, &meta_suffix(resource));
        session.send(session.delete(&url).query(&[("key", key)]))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_url_suffix() {
        let resource = ChannelResource::new("kasthuri", "ac4", "em");
        assert_eq!(meta_suffix(&resource), "meta/kasthuri/ac4/em");
    }

    #[test]
    fn key_list_from_server_json() {
        let list: KeyList = serde_json::from_str(r#"{"keys": ["owner", "stage"]}"#).unwrap();
        assert_eq!(list.keys, ["owner", "stage"]);
    }

    #[test]
    fn key_value_from_server_json() {
        let pair: KeyValue =
            serde_json::from_str(r#"{"key": "owner", "value": "jdoe"}"#).unwrap();
        assert_eq!(pair.value, "jdoe");
    }
}
