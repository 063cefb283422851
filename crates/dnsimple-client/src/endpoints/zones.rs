//! Zones API endpoints
//!
//! - List zones in an account, one page or all pages
//! - Get a single zone by name

use super::AccountId;
use crate::client::DnsimpleClient;
use crate::error::ApiResult;
use crate::paginate::paginate;
use crate::request::RequestOptions;
use crate::response::{CollectionResponse, PaginatedResponse, Response};
use serde::{Deserialize, Serialize};

/// Zones and zone records API interface
#[derive(Clone)]
pub struct ZonesApi {
    pub(super) client: DnsimpleClient,
}

impl ZonesApi {
    /// Create a new zones API interface
    pub(crate) fn new(client: DnsimpleClient) -> Self {
        Self { client }
    }

    /// List zones, one page
    ///
    /// GET /{account}/zones
    pub async fn zones(
        &self,
        account_id: impl Into<AccountId>,
        options: RequestOptions,
    ) -> ApiResult<PaginatedResponse<Zone>> {
        let path = format!("/{}/zones", account_id.into());
        self.client.get_paginated(&path, options).await
    }

    /// Alias of [`ZonesApi::zones`]
    pub async fn list_zones(
        &self,
        account_id: impl Into<AccountId>,
        options: RequestOptions,
    ) -> ApiResult<PaginatedResponse<Zone>> {
        self.zones(account_id, options).await
    }

    /// List every zone, walking all pages
    pub async fn all_zones(
        &self,
        account_id: impl Into<AccountId>,
        options: RequestOptions,
    ) -> ApiResult<CollectionResponse<Zone>> {
        let account_id = account_id.into();
        paginate(options, move |options| self.zones(account_id, options)).await
    }

    /// Get a zone
    ///
    /// GET /{account}/zones/{zone}
    pub async fn zone(
        &self,
        account_id: impl Into<AccountId>,
        zone_id: &str,
        options: RequestOptions,
    ) -> ApiResult<Response<Zone>> {
        let path = format!("/{}/zones/{zone_id}", account_id.into());
        self.client.get_response(&path, options).await
    }
}

/// Zone entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    /// Zone ID
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u64,
    /// Account owning the zone
    #[serde(deserialize_with = "super::null_as_default")]
    pub account_id: u64,
    /// Zone name, e.g. `example.com`
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// True for reverse DNS zones
    #[serde(deserialize_with = "super::null_as_default")]
    pub reverse: bool,
    /// When the zone was created
    pub created_at: Option<String>,
    /// When the zone was last updated
    pub updated_at: Option<String>,
}
