//! Stored connection records used to resolve webhook credentials.
//!
//! A connection is a named set of host/credential fields. The resolver only
//! reads them, through the [`ConnectionStore`] capability, so callers decide
//! where records come from (memory, a TOML file, ...).

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::{ConnectionEntry, ExtraField, FileConnectionStore, store_from_entries};

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

/// Key inside a record's `extra` object that holds the webhook token.
pub const EXTRA_TOKEN_KEY: &str = "webhook_token";

/// A named, stored set of host/credential fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionRecord {
    /// Identifier the record is looked up by.
    pub id: String,
    /// Base URL (or bare host name) of the webhook endpoint.
    pub host: Option<String>,
    /// Secret part of the webhook URL.
    pub password: Option<String>,
    /// Free-form metadata; may carry a `webhook_token` field.
    pub extra: Option<serde_json::Value>,
}

impl ConnectionRecord {
    /// Creates an empty record with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the extra metadata object.
    #[must_use]
    pub fn with_extra(mut self, extra: serde_json::Value) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Returns the host, ignoring blank values.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        non_blank(self.host.as_deref())
    }

    /// Returns the password, ignoring blank values.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        non_blank(self.password.as_deref())
    }

    /// Returns the token stored under `extra.webhook_token`, if it is a non-blank string.
    #[must_use]
    pub fn extra_token(&self) -> Option<&str> {
        let value = self.extra.as_ref()?.get(EXTRA_TOKEN_KEY)?;
        non_blank(value.as_str())
    }

    /// Returns the token this record provides.
    ///
    /// `extra.webhook_token` wins over `password`.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.extra_token().or_else(|| self.password())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Errors raised while loading or looking up connection records.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// No record is stored under the requested identifier.
    #[error("Connection '{id}' is not defined")]
    NotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// Failed to read the connections file.
    #[error("Failed to read connections file '{}': {source}", path.display())]
    Read {
        /// Path to the connections file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the connections TOML.
    #[error("Failed to parse connections: {0}")]
    Parse(#[from] toml::de::Error),

    /// The `extra` field is not a JSON object.
    #[error("Invalid extra for connection '{id}': {reason}")]
    InvalidExtra {
        /// Identifier of the offending record
        id: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Read-only lookup of connection records by identifier.
///
/// Passed to the resolver explicitly; there is no process-wide registry.
pub trait ConnectionStore: Send + Sync {
    /// Returns the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::NotFound`] if no such record exists.
    fn get(&self, id: &str) -> Result<ConnectionRecord, ConnectionError>;
}

/// In-memory [`ConnectionStore`] backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryConnectionStore {
    records: HashMap<String, ConnectionRecord>,
}

impl MemoryConnectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any record with the same identifier.
    #[must_use]
    pub fn with(mut self, record: ConnectionRecord) -> Self {
        self.insert(record);
        self
    }

    /// Inserts a record, returning the record it replaced.
    pub fn insert(&mut self, record: ConnectionRecord) -> Option<ConnectionRecord> {
        self.records.insert(record.id.clone(), record)
    }

    /// Moves every record of `other` into this store; `other` wins on conflicts.
    pub fn merge(&mut self, other: Self) {
        self.records.extend(other.records);
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ConnectionStore for MemoryConnectionStore {
    fn get(&self, id: &str) -> Result<ConnectionRecord, ConnectionError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| ConnectionError::NotFound { id: id.to_string() })
    }
}
