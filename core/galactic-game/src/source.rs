//! Where cards come from.

use crate::error::GameResult;
use async_trait::async_trait;
use galactic_model::{Category, GameEntity};
use std::sync::Arc;

/// A source of randomly chosen entities.
///
/// Each call is independent: two calls may return the same entity.
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Fetches one entity of the given category, chosen at random.
    async fn random_entity(&self, category: Category) -> GameResult<GameEntity>;
}

#[async_trait]
impl<S: EntitySource + ?Sized> EntitySource for Arc<S> {
    async fn random_entity(&self, category: Category) -> GameResult<GameEntity> {
        (**self).random_entity(category).await
    }
}
