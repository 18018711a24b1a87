//! Game state and its transitions.
//!
//! ```text
//!   Idle ──start_draw──▶ Loading ──resolve_draw──▶ Resolved
//!    ▲                    │   ▲                       │
//!    │                fail_draw └────start_draw───────┘
//!    └──────reset─────────┴───────────reset───────────┘
//! ```
//!
//! `fail_draw` returns to whichever of Idle/Resolved matches the cards on
//! the table. `reset` and `select_category` are refused while Loading.

use crate::error::{GameError, GameResult};
use galactic_model::{Category, GameEntity, Outcome};
use serde::Serialize;

/// Where the game currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No cards drawn.
    #[default]
    Idle,
    /// A draw is in flight.
    Loading,
    /// Both cards are on the table and the winner is known.
    Resolved,
}

/// A completed draw, ready to be applied to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDraw {
    pub category: Category,
    pub left: GameEntity,
    pub right: GameEntity,
    pub outcome: Outcome,
}

/// State of one game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    phase: Phase,
    left: Option<GameEntity>,
    right: Option<GameEntity>,
    winner: Option<Outcome>,
    /// Category of the cards on the table.
    category: Category,
    /// Category the next draw will use.
    selected_category: Category,
    left_score: u32,
    right_score: u32,
    error: Option<String>,
}

impl GameState {
    /// Creates an idle game that will draw from `category`.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            selected_category: category,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn left(&self) -> Option<&GameEntity> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&GameEntity> {
        self.right.as_ref()
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    pub fn left_score(&self) -> u32 {
        self.left_score
    }

    pub fn right_score(&self) -> u32 {
        self.right_score
    }

    /// Message from the last failed draw, cleared when the next one starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Chooses the category for the next draw. Cards already on the table
    /// keep their category until the draw completes.
    pub fn select_category(&mut self, category: Category) -> GameResult<()> {
        if self.is_loading() {
            return Err(GameError::DrawInProgress);
        }
        self.selected_category = category;
        Ok(())
    }

    /// Enters Loading and returns the category to draw from.
    pub fn start_draw(&mut self) -> GameResult<Category> {
        if self.is_loading() {
            return Err(GameError::DrawInProgress);
        }
        self.phase = Phase::Loading;
        self.error = None;
        Ok(self.selected_category)
    }

    /// Applies a completed draw: both cards, the winner, and one point to
    /// the winning side. A tie scores nothing.
    pub fn resolve_draw(&mut self, draw: ResolvedDraw) -> GameResult<()> {
        if !self.is_loading() {
            return Err(GameError::NoDrawInProgress);
        }
        match draw.outcome {
            Outcome::Left => self.left_score += 1,
            Outcome::Right => self.right_score += 1,
            Outcome::Tie => {}
        }
        self.left = Some(draw.left);
        self.right = Some(draw.right);
        self.winner = Some(draw.outcome);
        self.category = draw.category;
        self.phase = Phase::Resolved;
        Ok(())
    }

    /// Abandons the current draw, keeping cards and scores as they were.
    pub fn fail_draw(&mut self, message: impl Into<String>) -> GameResult<()> {
        if !self.is_loading() {
            return Err(GameError::NoDrawInProgress);
        }
        self.error = Some(message.into());
        self.phase = if self.left.is_some() {
            Phase::Resolved
        } else {
            Phase::Idle
        };
        Ok(())
    }

    /// Clears the table and both scores.
    pub fn reset(&mut self) -> GameResult<()> {
        if self.is_loading() {
            return Err(GameError::DrawInProgress);
        }
        *self = Self::new(self.selected_category);
        Ok(())
    }
}
