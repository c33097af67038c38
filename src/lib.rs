//! Client for the Boss volumetric-data service.
//!
//! The heavy lifting (resolution addressing, storage, permissions) all
//! happens server-side; this crate does parameter marshaling, URL
//! construction, and API version dispatch over blocking HTTP.

pub mod config;
pub mod error;
pub mod remote;
pub mod resource;
pub mod service;

pub use crate::config::BossConfig;
pub use crate::error::{BossError, Result};
pub use crate::remote::BossRemote;
pub use crate::resource::ChannelResource;
