//! Fetch every page of a list endpoint

use crate::error::ApiResult;
use crate::request::RequestOptions;
use crate::response::{CollectionResponse, PaginatedResponse};
use std::future::Future;
use tracing::debug;

/// Drive a single-page fetch across all pages.
///
/// `fetch` is called with `options` plus `page=1`, `page=2`, ... one page
/// at a time, until the reported pagination says the last page was reached.
/// Items keep page order. The first error stops the walk and is returned.
///
/// Fetching a whole collection costs one request per page, so prefer
/// single-page calls when the caller only needs part of it.
pub async fn paginate<T, F, Fut>(
    options: RequestOptions,
    mut fetch: F,
) -> ApiResult<CollectionResponse<T>>
where
    F: FnMut(RequestOptions) -> Fut,
    Fut: Future<Output = ApiResult<PaginatedResponse<T>>>,
{
    let mut data = Vec::new();
    let mut page: u32 = 1;

    loop {
        let response = fetch(options.clone().page(page)).await?;
        let pagination = response.pagination;

        debug!(
            page,
            total_pages = pagination.total_pages,
            items = response.data.len(),
            "Fetched page"
        );
        data.extend(response.data);

        if pagination.total_pages <= 1
            || pagination.current_page >= pagination.total_pages
            || page >= pagination.total_pages
        {
            break;
        }
        page += 1;
    }

    Ok(CollectionResponse::new(data))
}
