//! Query services: the pagination and random-pick policy shared by both
//! collections.

use crate::error::{StorageError, StorageResult};
use crate::store::EntityStore;
use galactic_model::{EntityId, Record};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a single request can fetch.
pub const MAX_LIMIT: i64 = 100;

/// Pagination input after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number, at least 1.
    pub page: u64,
    /// Page size in `1..=MAX_LIMIT`.
    pub limit: u64,
}

impl PageRequest {
    /// Clamps arbitrary caller input: `page >= 1`, `1 <= limit <= 100`.
    #[must_use]
    pub fn clamped(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            limit: limit.clamp(1, MAX_LIMIT) as u64,
        }
    }

    /// Number of rows to skip before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::clamped(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// One page of results plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Rows in the whole collection.
    pub total: u64,
    /// The clamped page number actually served.
    pub page: u64,
    pub total_pages: u64,
    /// The clamped page size actually used.
    pub limit: u64,
}

/// Read-only query service for one collection.
pub struct QueryService<T: Record> {
    store: Arc<dyn EntityStore<T>>,
}

impl<T: Record> Clone for QueryService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Record> QueryService<T> {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn EntityStore<T>>) -> Self {
        Self { store }
    }

    /// Lists one page of the collection ordered by name.
    ///
    /// Out-of-range input is clamped rather than rejected, and a page past
    /// the end is simply empty.
    pub fn find_all(&self, page: i64, limit: i64) -> StorageResult<Page<T>> {
        let request = PageRequest::clamped(page, limit);
        debug!(
            kind = %T::KIND,
            requested_page = page,
            requested_limit = limit,
            page = request.page,
            limit = request.limit,
            "Listing page"
        );

        let (data, total) = self.store.fetch_page(request.offset(), request.limit)?;
        Ok(Page {
            data,
            total,
            page: request.page,
            total_pages: total.div_ceil(request.limit),
            limit: request.limit,
        })
    }

    /// Looks up a single record by exact id.
    pub fn find_one(&self, id: &EntityId) -> StorageResult<T> {
        self.store
            .fetch_by_id(id)?
            .ok_or_else(|| StorageError::NotFound {
                kind: T::KIND,
                id: id.clone(),
            })
    }

    /// Picks a record at random.
    ///
    /// The collection is counted first so an empty collection
    /// (`Unavailable`) is told apart from a pick that came back empty
    /// anyway (`SelectionFailed`).
    pub fn find_random(&self) -> StorageResult<T> {
        if self.store.count()? == 0 {
            return Err(StorageError::Unavailable(T::KIND));
        }

        match self.store.fetch_random()? {
            Some(record) => Ok(record),
            None => {
                warn!(kind = %T::KIND, "Random pick returned no row from a non-empty collection");
                Err(StorageError::SelectionFailed(T::KIND))
            }
        }
    }

    /// Number of records in the collection.
    pub fn count(&self) -> StorageResult<u64> {
        self.store.count()
    }
}
