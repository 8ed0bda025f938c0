use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resource record inside a zone.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": "90d81ac0-3a30-44d4-95a5-12959effa6ee",
///   "type": "record",
///   "metadata": { "state": "AVAILABLE", "fqdn": "_acme-challenge.example.com" },
///   "properties": {
///     "name": "_acme-challenge",
///     "type": "TXT",
///     "content": "gfj9Xq...Rg85nM",
///     "ttl": 3600,
///     "priority": 0,
///     "enabled": true
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Provider assigned identifier of the record.
    ///
    /// Only records that have one can be updated or deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<RecordProperties>,
}

impl Record {
    /// Name of the record, relative to its zone.
    pub fn name(&self) -> Option<&str> {
        self.properties.as_ref()?.name.as_deref()
    }

    /// Content of the record. For `TXT` records this is the unquoted text.
    pub fn content(&self) -> Option<&str> {
        self.properties.as_ref()?.content.as_deref()
    }
}

/// Properties of a [`Record`].
///
/// Properties without a field here are carried in `other` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub _type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Time to live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl RecordProperties {
    /// Properties of a new `TXT` record.
    pub(crate) fn txt(name: &str, content: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            _type: Some("TXT".to_owned()),
            content: Some(content.to_owned()),
            ..Default::default()
        }
    }
}

/// Request body for creating or replacing a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordEnsure {
    pub properties: RecordProperties,
}
