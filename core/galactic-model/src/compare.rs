//! The "higher stat wins" comparison rule.
//!
//! People are compared by mass, starships by crew size. A missing value
//! counts as zero here and only here; the records themselves keep `None`.

use crate::entity::GameEntity;
use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of comparing a left card against a right card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Left,
    Right,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
            Self::Tie => f.write_str("tie"),
        }
    }
}

/// Decides which card wins.
///
/// Both cards must be of the same kind; mixing a person with a starship is
/// a `TypeMismatch`.
pub fn determine_winner(left: &GameEntity, right: &GameEntity) -> ModelResult<Outcome> {
    let (l, r) = match (left, right) {
        (GameEntity::Person(l), GameEntity::Person(r)) => {
            (l.mass.unwrap_or(0), r.mass.unwrap_or(0))
        }
        (GameEntity::Starship(l), GameEntity::Starship(r)) => (l.crew, r.crew),
        _ => {
            return Err(ModelError::TypeMismatch {
                left: left.kind(),
                right: right.kind(),
            });
        }
    };

    Ok(match l.cmp(&r) {
        std::cmp::Ordering::Greater => Outcome::Left,
        std::cmp::Ordering::Less => Outcome::Right,
        std::cmp::Ordering::Equal => Outcome::Tie,
    })
}

/// Display label and value of the attribute a card is judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonAttribute {
    pub label: &'static str,
    pub value: u32,
}

impl ComparisonAttribute {
    /// Shown for an empty card slot.
    pub const UNKNOWN: Self = Self {
        label: "Unknown",
        value: 0,
    };

    /// Returns the attribute for an entity.
    #[must_use]
    pub fn of(entity: &GameEntity) -> Self {
        match entity {
            GameEntity::Person(p) => Self {
                label: "Mass (kg)",
                value: p.mass.unwrap_or(0),
            },
            GameEntity::Starship(s) => Self {
                label: "Crew Size",
                value: s.crew,
            },
        }
    }

    /// Returns the attribute for a card slot that may be empty.
    #[must_use]
    pub fn for_card(card: Option<&GameEntity>) -> Self {
        card.map_or(Self::UNKNOWN, Self::of)
    }
}

impl GameEntity {
    /// Shorthand for [`ComparisonAttribute::of`].
    #[must_use]
    pub fn comparison_attribute(&self) -> ComparisonAttribute {
        ComparisonAttribute::of(self)
    }
}
