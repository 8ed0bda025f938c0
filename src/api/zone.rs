use serde::{Deserialize, Serialize};

/// A DNS zone of the account.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": "a5d6a1a7-7ec7-4a5b-8a1e-3c2f3c1b9e11",
///   "type": "zone",
///   "properties": {
///     "zoneName": "example.com",
///     "description": "",
///     "enabled": true
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Provider assigned identifier of the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ZoneProperties>,
}

impl Zone {
    /// Fully qualified name of the zone, e.g. `example.com`.
    pub fn zone_name(&self) -> Option<&str> {
        self.properties.as_ref()?.zone_name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
