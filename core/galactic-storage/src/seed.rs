//! Seed data loading.

use crate::error::StorageResult;
use galactic_model::{NewPerson, NewStarship};
use serde::Deserialize;
use std::path::Path;

/// Contents of a seed file: `{"people": [...], "starships": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub people: Vec<NewPerson>,
    #[serde(default)]
    pub starships: Vec<NewStarship>,
}

impl SeedData {
    /// Parses a seed file.
    pub fn from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// How many records a seed run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub people: usize,
    pub starships: usize,
}
