//! JSON API payloads of the IONOS Cloud DNS API.
//!
//! The API is only loosely specified, so almost every field is optional. Properties this crate
//! doesn't know about are kept so that records can be written back without losing them.
//!
//! Not intended to be used directly. Provided to aid debugging.

use serde::{Deserialize, Serialize};

mod record;
mod zone;

pub use self::{
    record::{Record, RecordEnsure, RecordProperties},
    zone::{Zone, ZoneProperties},
};

/// A paginated collection as returned by the listing endpoints.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": "zones",
///   "type": "collection",
///   "href": "/zones",
///   "items": [],
///   "offset": 0,
///   "limit": 100
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// Entries of this page. A missing `items` key is read as an empty page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            offset: None,
            limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_list_without_items() {
        let list: List<Zone> = serde_json::from_value(json!({ "type": "collection" })).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_list_of_zones() {
        let list: List<Zone> = serde_json::from_value(json!({
            "id": "zones",
            "type": "collection",
            "items": [
                {
                    "id": "a5d6a1a7-7ec7-4a5b-8a1e-3c2f3c1b9e11",
                    "type": "zone",
                    "metadata": { "state": "AVAILABLE" },
                    "properties": { "zoneName": "test_domain.de", "enabled": true }
                },
                { "id": "bare" },
                { "properties": { "zoneName": "other.test_domain.de" } }
            ]
        }))
        .unwrap();

        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[0].zone_name(), Some("test_domain.de"));
        assert_eq!(list.items[1].zone_name(), None);
        assert_eq!(list.items[2].id, None);
        assert_eq!(list.items[2].zone_name(), Some("other.test_domain.de"));
    }
}
