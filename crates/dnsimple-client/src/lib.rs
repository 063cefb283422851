//! Client library for the DNSimple domain registration and DNS hosting API
//!
//! This crate wraps the DNSimple REST API with typed requests and
//! responses.
//!
//! # Features
//!
//! - **Credentials file**: YAML credentials located through `DNSIMPLE_CONFIG`
//!   or `~/.dnsimple`, merged under explicitly configured values
//! - **Auth selection**: HTTP Basic with a password, or the
//!   `X-DNSimple-Token` header with an API token
//! - **Typed resources**: zones, zone records and domain transfers
//! - **Pagination**: `all_*` helpers walk every page of a list endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use dnsimple_client::{ClientConfig, DnsimpleClient, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new()
//!         .with_username("user@example.com")
//!         .with_api_token("0123456789abcdef");
//!     let client = DnsimpleClient::with_config(config)?;
//!
//!     let page = client
//!         .zones()
//!         .records(1010, "example.com", RequestOptions::new().page(2))
//!         .await?;
//!     println!("page {} of {}", page.pagination.current_page, page.pagination.total_pages);
//!
//!     let all = client.zones().all_records(1010, "example.com", RequestOptions::new()).await?;
//!     println!("{} records", all.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod paginate;
pub mod request;
pub mod response;

pub use auth::Auth;
pub use client::DnsimpleClient;
pub use config::{ClientConfig, HttpProxy};
pub use endpoints::{AccountId, WILDCARD_ACCOUNT};
pub use error::{ApiError, ApiResult};
pub use paginate::paginate;
pub use request::RequestOptions;
pub use response::{CollectionResponse, PaginatedResponse, Pagination, Response};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::auth::Auth;
    pub use crate::client::DnsimpleClient;
    pub use crate::config::{ClientConfig, HttpProxy};
    pub use crate::endpoints::{
        AccountId, DomainTransfer, DomainTransferRequest, Record, RegistrarApi, Zone, ZonesApi,
        WILDCARD_ACCOUNT,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::request::RequestOptions;
    pub use crate::response::{CollectionResponse, PaginatedResponse, Pagination, Response};
}
