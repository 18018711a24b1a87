//! Error types for the game client.

use galactic_model::ModelError;
use std::time::Duration;
use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum GameError {
    /// Network, GraphQL or decoding failure while fetching a card.
    #[error("fetch failed: {0}")]
    FetchFailure(String),

    /// A fetch did not complete in time.
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),

    /// Comparison across incompatible entity kinds.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A draw was requested while another one is still loading.
    #[error("a draw is already in progress")]
    DrawInProgress,

    /// A draw result arrived with no draw in progress.
    #[error("no draw is in progress")]
    NoDrawInProgress,
}

impl GameError {
    /// Whether this error came from fetching data rather than game logic.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure(_) | Self::Timeout(_))
    }
}

impl From<reqwest::Error> for GameError {
    fn from(err: reqwest::Error) -> Self {
        Self::FetchFailure(err.to_string())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::FetchFailure(format!("invalid response: {err}"))
    }
}
