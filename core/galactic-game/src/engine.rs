//! Draw orchestration.

use crate::error::{GameError, GameResult};
use crate::source::EntitySource;
use crate::state::{GameState, ResolvedDraw};
use galactic_model::{determine_winner, Category, GameEntity, Outcome};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Message shown to the player when a draw could not load its cards.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to load data. Please try again.";

/// Timing and retry settings for draws.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Pause between the left and the right fetch.
    pub initial_delay: Duration,
    /// Pause before each refetch of a duplicate right card.
    pub retry_delay: Duration,
    /// Refetches allowed when the right card duplicates the left one.
    pub max_retries: u32,
    /// Upper bound on a single fetch.
    pub fetch_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(50),
            retry_delay: Duration::from_millis(100),
            max_retries: 5,
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

/// What a successful draw produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawReport {
    pub category: Category,
    pub left: GameEntity,
    pub right: GameEntity,
    pub outcome: Outcome,
    /// How many times the right card was refetched.
    pub retries: u32,
}

impl DrawReport {
    /// True when the retries ran out and both cards are the same entity.
    pub fn is_duplicate(&self) -> bool {
        self.left.id() == self.right.id()
    }
}

/// Plays the game against an [`EntitySource`].
pub struct GameEngine<S> {
    source: S,
    config: GameConfig,
    state: GameState,
}

impl<S: EntitySource> GameEngine<S> {
    /// Creates an engine with default timing, drawing people.
    pub fn new(source: S) -> Self {
        Self::with_config(source, GameConfig::default())
    }

    pub fn with_config(source: S, config: GameConfig) -> Self {
        Self {
            source,
            config,
            state: GameState::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn select_category(&mut self, category: Category) -> GameResult<()> {
        self.state.select_category(category)
    }

    pub fn reset(&mut self) -> GameResult<()> {
        info!("Resetting game");
        self.state.reset()
    }

    /// Draws two cards from the selected category and scores the result.
    ///
    /// On failure the cards and scores on the table are left as they were
    /// and the state carries a message for the player.
    pub async fn draw(&mut self) -> GameResult<DrawReport> {
        let category = self.state.start_draw()?;

        match self.draw_pair(category).await {
            Ok(report) => {
                self.state.resolve_draw(ResolvedDraw {
                    category,
                    left: report.left.clone(),
                    right: report.right.clone(),
                    outcome: report.outcome,
                })?;
                info!(
                    "{} vs {}: {} (retries: {})",
                    report.left.name(),
                    report.right.name(),
                    report.outcome,
                    report.retries
                );
                Ok(report)
            }
            Err(err) => {
                warn!("Draw failed: {}", err);
                let message = if err.is_fetch_failure() {
                    FETCH_FAILURE_MESSAGE.to_string()
                } else {
                    err.to_string()
                };
                self.state.fail_draw(message)?;
                Err(err)
            }
        }
    }

    /// Fetches left, then right, refetching right while it duplicates left.
    ///
    /// Distinctness is best effort: the delays only make it less likely
    /// that both fetches land on the same row, and after `max_retries` a
    /// duplicate pair is accepted.
    async fn draw_pair(&self, category: Category) -> GameResult<DrawReport> {
        let left = self.fetch(category).await?;
        tokio::time::sleep(self.config.initial_delay).await;
        let mut right = self.fetch(category).await?;

        let mut retries = 0;
        while right.id() == left.id() && retries < self.config.max_retries {
            debug!("Duplicate draw of {}, retrying right card", left.id());
            tokio::time::sleep(self.config.retry_delay).await;
            right = self.fetch(category).await?;
            retries += 1;
        }

        let outcome = determine_winner(&left, &right)?;
        Ok(DrawReport {
            category,
            left,
            right,
            outcome,
            retries,
        })
    }

    async fn fetch(&self, category: Category) -> GameResult<GameEntity> {
        tokio::time::timeout(
            self.config.fetch_timeout,
            self.source.random_entity(category),
        )
        .await
        .map_err(|_| GameError::Timeout(self.config.fetch_timeout))?
    }
}
