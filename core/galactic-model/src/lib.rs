//! Core entity model for Galactic Battle.
//!
//! This crate defines the two comparable entity kinds and everything the
//! rest of the workspace needs to reason about them:
//! - Opaque entity identifiers
//! - `Person` and `Starship` records
//! - `GameEntity`, a tagged union over both kinds
//! - The "higher stat wins" comparison rule
//!
//! Storage and transport concerns live in `galactic-storage` and
//! `galactic-game`; nothing here touches a database or the network.

mod compare;
mod entity;
mod error;
mod ids;
mod person;
mod starship;

pub use compare::{determine_winner, ComparisonAttribute, Outcome};
pub use entity::{Category, EntityKind, GameEntity, Record};
pub use error::{ModelError, ModelResult};
pub use ids::EntityId;
pub use person::{NewPerson, Person};
pub use starship::{NewStarship, Starship};
