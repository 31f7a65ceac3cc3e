//! # Source Layer
//!
//! This module defines where the console's user list comes from. The [`UserSource`]
//! trait is the only thing the API layer knows about.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: Production source, one GET against a static JSON resource
//! - [`file::FileSource`]: The same payload read from a local file
//! - [`memory::InMemorySource`]: Fixed records for testing
//!
//! ## Payload Format
//!
//! ```text
//! [
//!   { "id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member" },
//!   ...
//! ]
//! ```
//!
//! Every source decodes through [`decode_users`], so format errors look the same
//! regardless of transport.

use crate::error::{Result, RosterError};
use crate::model::UserRecord;
use std::collections::HashSet;

pub mod file;
pub mod http;
pub mod memory;

/// Read-only provider of the initial user list.
#[allow(async_fn_in_trait)]
pub trait UserSource {
    /// Fetch every user record.
    ///
    /// Fails with [`RosterError::Network`] when the resource cannot be reached and
    /// with [`RosterError::Format`] when the payload is not a list of users.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>>;

    /// Human readable location, used in log lines.
    fn describe(&self) -> String;
}

/// A source picked at runtime from a location string.
///
/// `http://` and `https://` locations are fetched over the network; anything else
/// is treated as a path to a local JSON file.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(http::HttpSource),
    File(file::FileSource),
}

impl ConfiguredSource {
    pub fn from_location(location: &str) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(RosterError::Config("source location is empty".to_string()));
        }
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::Http(http::HttpSource::new(location)?))
        } else {
            Ok(Self::File(file::FileSource::new(location)))
        }
    }
}

impl UserSource for ConfiguredSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        match self {
            Self::Http(source) => source.fetch_users().await,
            Self::File(source) => source.fetch_users().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }
}

/// Decode a JSON payload into user records, rejecting duplicate ids.
pub fn decode_users(bytes: &[u8]) -> Result<Vec<UserRecord>> {
    let users: Vec<UserRecord> = serde_json::from_slice(bytes)
        .map_err(|e| RosterError::Format(format!("expected a list of users: {}", e)))?;

    let mut seen = HashSet::with_capacity(users.len());
    for user in &users {
        if !seen.insert(&user.id) {
            return Err(RosterError::Format(format!("duplicate user id {}", user.id)));
        }
    }

    Ok(users)
}
