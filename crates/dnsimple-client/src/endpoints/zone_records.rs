//! Zone records API endpoints

use super::zones::ZonesApi;
use super::AccountId;
use crate::error::ApiResult;
use crate::paginate::paginate;
use crate::request::RequestOptions;
use crate::response::{CollectionResponse, PaginatedResponse, Response};
use serde::{Deserialize, Serialize};

impl ZonesApi {
    /// List records in a zone, one page
    ///
    /// GET /{account}/zones/{zone}/records
    ///
    /// Pass `RequestOptions::new().page(2)` to request a specific page.
    pub async fn records(
        &self,
        account_id: impl Into<AccountId>,
        zone_id: &str,
        options: RequestOptions,
    ) -> ApiResult<PaginatedResponse<Record>> {
        let path = format!("/{}/zones/{zone_id}/records", account_id.into());
        self.client.get_paginated(&path, options).await
    }

    /// Alias of [`ZonesApi::records`]
    pub async fn list_records(
        &self,
        account_id: impl Into<AccountId>,
        zone_id: &str,
        options: RequestOptions,
    ) -> ApiResult<PaginatedResponse<Record>> {
        self.records(account_id, zone_id, options).await
    }

    /// List every record in a zone, walking all pages
    ///
    /// Issues one request per page; large zones can run into the API's
    /// request throttle.
    pub async fn all_records(
        &self,
        account_id: impl Into<AccountId>,
        zone_id: &str,
        options: RequestOptions,
    ) -> ApiResult<CollectionResponse<Record>> {
        let account_id = account_id.into();
        paginate(options, move |options| {
            self.records(account_id, zone_id, options)
        })
        .await
    }

    /// Get a record
    ///
    /// GET /{account}/zones/{zone}/records/{record}
    pub async fn record(
        &self,
        account_id: impl Into<AccountId>,
        zone_id: &str,
        record_id: u64,
        options: RequestOptions,
    ) -> ApiResult<Response<Record>> {
        let path = format!(
            "/{}/zones/{zone_id}/records/{record_id}",
            account_id.into()
        );
        self.client.get_response(&path, options).await
    }
}

/// Zone record entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Record ID
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u64,
    /// Zone name the record belongs to
    #[serde(deserialize_with = "super::null_as_default")]
    pub zone_id: String,
    /// Parent record, for records created by another record
    pub parent_id: Option<u64>,
    /// Record name, empty for the zone apex
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Record value
    #[serde(deserialize_with = "super::null_as_default")]
    pub content: String,
    /// Time to live in seconds
    #[serde(deserialize_with = "super::null_as_default")]
    pub ttl: u32,
    /// Priority for MX and SRV records
    pub priority: Option<u32>,
    /// Record type, e.g. `A` or `MX`
    #[serde(rename = "type", deserialize_with = "super::null_as_default")]
    pub record_type: String,
    /// Regions the record is served from
    #[serde(deserialize_with = "super::null_as_default")]
    pub regions: Vec<String>,
    /// True for records managed by DNSimple itself (SOA, NS)
    #[serde(deserialize_with = "super::null_as_default")]
    pub system_record: bool,
    /// When the record was created
    pub created_at: Option<String>,
    /// When the record was last updated
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record_json() -> serde_json::Value {
        serde_json::json!({
            "id": 5,
            "zone_id": "example.com",
            "parent_id": null,
            "name": "www",
            "content": "127.0.0.1",
            "ttl": 600,
            "priority": null,
            "type": "A",
            "regions": ["global"],
            "system_record": false,
            "created_at": "2016-01-07T17:45:13Z",
            "updated_at": "2016-01-07T17:45:13Z"
        })
    }

    #[test]
    fn test_record_deserialize() {
        let record: Record = serde_json::from_value(record_json()).unwrap();

        assert_eq!(record.id, 5);
        assert_eq!(record.zone_id, "example.com");
        assert_eq!(record.record_type, "A");
        assert_eq!(record.ttl, 600);
        assert_eq!(record.regions, vec!["global".to_string()]);
        assert!(record.parent_id.is_none());
    }

    #[test]
    fn test_record_round_trip() {
        let record: Record = serde_json::from_value(record_json()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), record_json());
    }

    #[test]
    fn test_record_ignores_unknown_keys() {
        let record: Record =
            serde_json::from_str(r#"{"id": 1, "type": "MX", "priority": 10, "extra": true}"#)
                .unwrap();

        assert_eq!(record.record_type, "MX");
        assert_eq!(record.priority, Some(10));
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_record_null_fields() {
        let record: Record = serde_json::from_str(
            r#"{"id": 7, "type": "TXT", "ttl": null, "regions": null, "system_record": null}"#,
        )
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.ttl, 0);
        assert!(record.regions.is_empty());
        assert!(!record.system_record);
    }
}
