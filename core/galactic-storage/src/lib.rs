//! Storage layer for Galactic Battle.
//!
//! Provides read access to the `people` and `starships` collections and the
//! query policy shared by both.
//!
//! # Architecture
//!
//! - [`EntityStore`] is the raw row source: paged fetch, lookup by id,
//!   random pick and count. It applies no policy.
//! - [`SqliteStore`] implements it over a shared SQLite connection owned by
//!   [`Database`]; [`MemoryStore`] implements it over a vector.
//! - [`QueryService`] clamps pagination input, computes page metadata and
//!   turns empty results into typed errors.

mod error;
mod memory;
mod query;
mod seed;
mod sqlite;
mod store;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use query::{Page, PageRequest, QueryService, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use seed::{SeedData, SeedSummary};
pub use sqlite::{Database, SqlRecord, SqliteStore};
pub use store::EntityStore;
