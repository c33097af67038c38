//! Resource handles.
//!
//! A resource names a channel on the remote service.  The client never
//! interprets it beyond turning it into URL path segments.

use crate::error::BossError;
use std::fmt;
use std::str::FromStr;

const BOSSDB_SCHEME: &str = "bossdb://";

/// A channel (or layer) on the remote service, addressed as
/// collection/experiment/channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChannelResource {
    pub collection: String,
    pub experiment: String,
    pub channel: String,
}

impl ChannelResource {
    pub fn new(collection: &str, experiment: &str, channel: &str) -> ChannelResource {
        ChannelResource {
            collection: collection.to_string(),
            experiment: experiment.to_string(),
            channel: channel.to_string(),
        }
    }

    /// The `{collection}/{experiment}/{channel}` segment used by the cutout
    /// and metadata endpoints.
    pub fn route(&self) -> String {
        format!("{}/{}/{}", self.collection, self.experiment, self.channel)
    }
}

impl FromStr for ChannelResource {
    type Err = BossError;

    /// Parse a `bossdb://collection/experiment/channel` URI.
    fn from_str(uri: &str) -> Result<ChannelResource, BossError> {
        let rest = match uri.strip_prefix(BOSSDB_SCHEME) {
            Some(rest) => rest,
            None => return Err(BossError::InvalidUri(uri.to_string())),
        };
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(BossError::InvalidUri(uri.to_string()));
        }
        Ok(ChannelResource::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for ChannelResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", BOSSDB_SCHEME, self.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bossdb_uri() {
        let res: ChannelResource = "bossdb://kasthuri/ac4/em".parse().unwrap();
        assert_eq!(res, ChannelResource::new("kasthuri", "ac4", "em"));
        assert_eq!(res.route(), "kasthuri/ac4/em");
    }

    #[test]
    fn display_round_trips() {
        let res = ChannelResource::new("kasthuri", "ac4", "em");
        let parsed: ChannelResource = res.to_string().parse().unwrap();
        assert_eq!(parsed, res);
    }

    #[test]
    fn reject_malformed_uris() {
        for uri in &[
            "kasthuri/ac4/em",
            "bossdb://kasthuri/ac4",
            "bossdb://kasthuri/ac4/em/extra",
            "bossdb://kasthuri//em",
            "http://kasthuri/ac4/em",
        ] {
            assert!(uri.parse::<ChannelResource>().is_err(), "accepted {}", uri);
        }
    }
}
