//! Galactic Battle game engine.
//!
//! Two cards of the same category are drawn at random and the one with the
//! higher stat wins: mass for people, crew size for starships.
//!
//! # Usage
//!
//! ```rust,ignore
//! use galactic_game::{GameEngine, GraphqlClient};
//! use galactic_model::Category;
//!
//! let client = GraphqlClient::new("http://localhost:4000/graphql");
//! let mut engine = GameEngine::new(client);
//! engine.select_category(Category::Starships)?;
//! let report = engine.draw().await?;
//! println!("{} wins", report.outcome);
//! ```

pub mod client;
pub mod display;
mod engine;
mod error;
pub mod source;
pub mod state;

pub use client::{GraphqlClient, PageEnvelope, PaginationInfo};
pub use engine::{DrawReport, GameConfig, GameEngine, FETCH_FAILURE_MESSAGE};
pub use error::{GameError, GameResult};
pub use source::EntitySource;
pub use state::{GameState, Phase, ResolvedDraw};
