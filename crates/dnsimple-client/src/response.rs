//! Response envelopes
//!
//! Every API body carries its payload under `data`; list endpoints add a
//! `pagination` object. The envelopes keep the HTTP status and headers next
//! to the typed payload.

use crate::error::ApiResult;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Pagination metadata as reported by the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Page returned by this response, starting at 1
    pub current_page: u32,
    /// Entries per page
    pub per_page: u32,
    /// Entries across all pages
    pub total_entries: u64,
    /// Number of pages
    pub total_pages: u32,
}

impl Pagination {
    /// Whether a page follows this one
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.total_pages > 1 && self.current_page < self.total_pages
    }
}

/// Single item response
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded payload
    pub data: T,
}

/// One page of a list response
#[derive(Debug, Clone)]
pub struct PaginatedResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Items on this page
    pub data: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

/// Every item of a list endpoint, gathered across all pages
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResponse<T> {
    /// Items in page order
    pub data: Vec<T>,
}

#[derive(Deserialize)]
struct DataBody<T> {
    data: T,
}

#[derive(Deserialize)]
struct PaginatedBody<T> {
    data: Vec<T>,
    #[serde(default)]
    pagination: Pagination,
}

impl<T: DeserializeOwned> Response<T> {
    /// Decode a `{"data": ...}` body
    pub fn decode(status: u16, headers: HeaderMap, body: &[u8]) -> ApiResult<Self> {
        let body: DataBody<T> = serde_json::from_slice(body)?;
        Ok(Self::new(status, headers, body.data))
    }
}

impl<T> Response<T> {
    /// Wrap an already decoded payload
    pub fn new(status: u16, headers: HeaderMap, data: T) -> Self {
        Self {
            status,
            headers,
            data,
        }
    }
}

impl<T: DeserializeOwned> PaginatedResponse<T> {
    /// Decode a `{"data": [...], "pagination": {...}}` body
    ///
    /// A body without `pagination` is treated as a single page.
    pub fn decode(status: u16, headers: HeaderMap, body: &[u8]) -> ApiResult<Self> {
        let body: PaginatedBody<T> = serde_json::from_slice(body)?;
        Ok(Self::new(status, headers, body.data, body.pagination))
    }
}

impl<T> PaginatedResponse<T> {
    /// Wrap an already decoded page
    pub fn new(status: u16, headers: HeaderMap, data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            status,
            headers,
            data,
            pagination,
        }
    }
}

impl<T> CollectionResponse<T> {
    /// Wrap gathered items
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no item was returned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for CollectionResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    #[test]
    fn test_decode_single() {
        let response: Response<Item> =
            Response::decode(200, HeaderMap::new(), br#"{"data": {"id": 7}}"#).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.data, Item { id: 7 });
    }

    #[test]
    fn test_decode_paginated() {
        let body = br#"{
            "data": [{"id": 1}, {"id": 2}],
            "pagination": {"current_page": 1, "per_page": 2, "total_entries": 5, "total_pages": 3}
        }"#;
        let response: PaginatedResponse<Item> =
            PaginatedResponse::decode(200, HeaderMap::new(), body).unwrap();

        assert_eq!(response.data.len(), 2);
        assert_eq!(
            response.pagination,
            Pagination {
                current_page: 1,
                per_page: 2,
                total_entries: 5,
                total_pages: 3
            }
        );
        assert!(response.pagination.has_next_page());
    }

    #[test]
    fn test_decode_without_pagination() {
        let response: PaginatedResponse<Item> =
            PaginatedResponse::decode(200, HeaderMap::new(), br#"{"data": []}"#).unwrap();
        assert!(response.data.is_empty());
        assert_eq!(response.pagination, Pagination::default());
        assert!(!response.pagination.has_next_page());
    }

    #[test]
    fn test_decode_missing_data_is_json_error() {
        let result = Response::<Item>::decode(200, HeaderMap::new(), br#"{"id": 7}"#);
        assert!(matches!(result, Err(ApiError::Json(_))));
    }

    #[test]
    fn test_collection_iterates_in_order() {
        let collection = CollectionResponse::new(vec![3, 1, 2]);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
