//! Registrar API endpoints
//!
//! Inbound domain transfers:
//! - Start a transfer
//! - Get a transfer by ID
//! - Cancel a pending transfer

use super::AccountId;
use crate::client::DnsimpleClient;
use crate::error::ApiResult;
use crate::request::RequestOptions;
use crate::response::Response;
use serde::{Deserialize, Serialize};

/// Registrar API interface
#[derive(Clone)]
pub struct RegistrarApi {
    client: DnsimpleClient,
}

impl RegistrarApi {
    /// Create a new registrar API interface
    pub(crate) fn new(client: DnsimpleClient) -> Self {
        Self { client }
    }

    /// Start transferring a domain into the account
    ///
    /// POST /{account}/registrar/domains/{domain}/transfers
    pub async fn transfer_domain(
        &self,
        account_id: impl Into<AccountId>,
        domain_name: &str,
        attributes: &DomainTransferRequest,
        options: RequestOptions,
    ) -> ApiResult<Response<DomainTransfer>> {
        let path = format!(
            "/{}/registrar/domains/{domain_name}/transfers",
            account_id.into()
        );
        self.client.post_response(&path, attributes, options).await
    }

    /// Get a domain transfer
    ///
    /// GET /{account}/registrar/domains/{domain}/transfers/{transfer}
    pub async fn domain_transfer(
        &self,
        account_id: impl Into<AccountId>,
        domain_name: &str,
        transfer_id: u64,
        options: RequestOptions,
    ) -> ApiResult<Response<DomainTransfer>> {
        let path = format!(
            "/{}/registrar/domains/{domain_name}/transfers/{transfer_id}",
            account_id.into()
        );
        self.client.get_response(&path, options).await
    }

    /// Cancel a pending domain transfer
    ///
    /// DELETE /{account}/registrar/domains/{domain}/transfers/{transfer}
    pub async fn cancel_domain_transfer(
        &self,
        account_id: impl Into<AccountId>,
        domain_name: &str,
        transfer_id: u64,
        options: RequestOptions,
    ) -> ApiResult<Response<DomainTransfer>> {
        let path = format!(
            "/{}/registrar/domains/{domain_name}/transfers/{transfer_id}",
            account_id.into()
        );
        self.client.delete_response(&path, options).await
    }
}

/// Attributes for starting a domain transfer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTransferRequest {
    /// Contact that becomes the registrant
    pub registrant_id: u64,
    /// Authorization code from the losing registrar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Request WHOIS privacy for the transferred domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<bool>,
    /// Request auto-renewal for the transferred domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// Required when the domain is premium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_price: Option<String>,
}

impl DomainTransferRequest {
    /// Create transfer attributes for a registrant
    #[must_use]
    pub fn new(registrant_id: u64) -> Self {
        Self {
            registrant_id,
            ..Self::default()
        }
    }

    /// Set the authorization code
    #[must_use]
    pub fn with_auth_code(mut self, auth_code: impl Into<String>) -> Self {
        self.auth_code = Some(auth_code.into());
        self
    }

    /// Request WHOIS privacy
    #[must_use]
    pub fn with_whois_privacy(mut self, enabled: bool) -> Self {
        self.whois_privacy = Some(enabled);
        self
    }

    /// Request auto-renewal
    #[must_use]
    pub fn with_auto_renew(mut self, enabled: bool) -> Self {
        self.auto_renew = Some(enabled);
        self
    }
}

/// Domain transfer entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainTransfer {
    /// Domain transfer ID
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u64,
    /// Associated domain ID
    #[serde(deserialize_with = "super::null_as_default")]
    pub domain_id: u64,
    /// Associated registrant (contact) ID
    #[serde(deserialize_with = "super::null_as_default")]
    pub registrant_id: u64,
    /// Transfer state, e.g. `"transferring"`
    #[serde(deserialize_with = "super::null_as_default")]
    pub state: String,
    /// True if auto-renew was requested
    #[serde(deserialize_with = "super::null_as_default")]
    pub auto_renew: bool,
    /// True if WHOIS privacy was requested
    #[serde(deserialize_with = "super::null_as_default")]
    pub private_whois: bool,
    /// Premium price requested for the transfer
    pub premium_price: Option<String>,
    /// When the transfer was created
    pub created_at: Option<String>,
    /// When the transfer was last updated
    pub updated_at: Option<String>,
}
