//! The row-source abstraction behind the query services.

use crate::error::StorageResult;
use galactic_model::{EntityId, Record};

/// Raw data access for one entity collection.
///
/// Implementations execute the query shapes and return rows exactly as
/// found. Clamping, page math and error translation belong to
/// [`QueryService`](crate::QueryService).
pub trait EntityStore<T: Record>: Send + Sync {
    /// Returns up to `limit` rows starting at `offset`, ordered by name
    /// ascending with ties in stored row order, together with the total
    /// number of rows in the collection.
    fn fetch_page(&self, offset: u64, limit: u64) -> StorageResult<(Vec<T>, u64)>;

    /// Returns the row whose id matches exactly.
    fn fetch_by_id(&self, id: &EntityId) -> StorageResult<Option<T>>;

    /// Returns one row chosen approximately uniformly, or `None` if the
    /// pick came back empty.
    fn fetch_random(&self) -> StorageResult<Option<T>>;

    /// Returns the number of rows in the collection.
    fn count(&self) -> StorageResult<u64>;
}
