//! TOML-file-backed connection records.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use super::{ConnectionError, ConnectionRecord, ConnectionStore, MemoryConnectionStore};

/// One `[connections.<id>]` table as written in TOML.
///
/// `extra` accepts either an inline table or a JSON-encoded string,
/// the form connection records are usually exported in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionEntry {
    /// Base URL of the webhook endpoint
    pub host: Option<String>,

    /// Secret part of the webhook URL
    pub password: Option<String>,

    /// Extra metadata (table or JSON string)
    pub extra: Option<ExtraField>,
}

/// Raw `extra` value before normalization to a JSON object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExtraField {
    /// JSON document stored as a string
    Json(String),
    /// Inline TOML table
    Table(serde_json::Map<String, serde_json::Value>),
}

impl ConnectionEntry {
    /// Converts the entry into a record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::InvalidExtra`] if `extra` is a string
    /// that is not a JSON object.
    pub fn into_record(self, id: &str) -> Result<ConnectionRecord, ConnectionError> {
        let extra = match self.extra {
            None => None,
            Some(ExtraField::Table(map)) => Some(serde_json::Value::Object(map)),
            Some(ExtraField::Json(raw)) if raw.trim().is_empty() => None,
            Some(ExtraField::Json(raw)) => Some(parse_extra(id, &raw)?),
        };

        Ok(ConnectionRecord {
            id: id.to_string(),
            host: self.host,
            password: self.password,
            extra,
        })
    }
}

fn parse_extra(id: &str, raw: &str) -> Result<serde_json::Value, ConnectionError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ConnectionError::InvalidExtra {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

    if !value.is_object() {
        return Err(ConnectionError::InvalidExtra {
            id: id.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    }

    Ok(value)
}

/// Builds a store from `[connections.<id>]` entries.
///
/// # Errors
///
/// Returns an error if any entry has an invalid `extra` field.
pub fn store_from_entries(
    entries: BTreeMap<String, ConnectionEntry>,
) -> Result<MemoryConnectionStore, ConnectionError> {
    let mut store = MemoryConnectionStore::new();
    for (id, entry) in entries {
        store.insert(entry.into_record(&id)?);
    }
    Ok(store)
}

/// On-disk layout of a connections file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConnectionsFile {
    #[serde(default)]
    connections: BTreeMap<String, ConnectionEntry>,
}

/// [`ConnectionStore`] loaded from a TOML file of `[connections.<id>]` tables.
///
/// ```toml
/// [connections.slack-webhook-default]
/// extra = '{"webhook_token": "T000/B000/XXX"}'
///
/// [connections.slack-webhook-host]
/// host = "https://hooks.slack.com/services/T000/"
/// ```
///
/// The file is read once at construction.
#[derive(Debug, Clone)]
pub struct FileConnectionStore {
    records: MemoryConnectionStore,
}

impl FileConnectionStore {
    /// Loads connection records from the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConnectionError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConnectionError::Read { path, source: e })?;

        Ok(Self {
            records: Self::parse(&content)?,
        })
    }

    /// Parses connection records from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or an entry is malformed.
    pub fn parse(content: &str) -> Result<MemoryConnectionStore, ConnectionError> {
        let file: ConnectionsFile = toml::from_str(content)?;
        store_from_entries(file.connections)
    }

    /// Consumes the store, returning the loaded records.
    #[must_use]
    pub fn into_records(self) -> MemoryConnectionStore {
        self.records
    }
}

impl ConnectionStore for FileConnectionStore {
    fn get(&self, id: &str) -> Result<ConnectionRecord, ConnectionError> {
        self.records.get(id)
    }
}
