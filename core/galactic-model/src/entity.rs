//! Entity kinds and the tagged `GameEntity` union.

use crate::error::ModelError;
use crate::ids::EntityId;
use crate::person::Person;
use crate::starship::Starship;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two comparable record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Starship,
}

impl EntityKind {
    /// Capitalized singular noun, as used in lookup error messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Starship => "Starship",
        }
    }

    /// Lowercase plural, as used in availability error messages.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Person => "people",
            Self::Starship => "starships",
        }
    }

    /// The game category that draws entities of this kind.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Person => Category::People,
            Self::Starship => Category::Starships,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => f.write_str("person"),
            Self::Starship => f.write_str("starship"),
        }
    }
}

/// The collection a game draw picks from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    People,
    Starships,
}

impl Category {
    /// The kind of entity stored in this collection.
    #[must_use]
    pub const fn kind(self) -> EntityKind {
        match self {
            Self::People => EntityKind::Person,
            Self::Starships => EntityKind::Starship,
        }
    }

    /// What a draw in this category is decided by.
    #[must_use]
    pub const fn criterion(self) -> &'static str {
        match self {
            Self::People => "Higher Mass",
            Self::Starships => "Larger Crew",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().plural())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "people" | "person" | "characters" => Ok(Self::People),
            "starships" | "starship" | "ships" => Ok(Self::Starships),
            other => Err(ModelError::UnknownCategory(other.to_string())),
        }
    }
}

/// Common accessors shared by every stored record type.
pub trait Record: Clone + Send + Sync + 'static {
    /// Which kind of entity this record type holds.
    const KIND: EntityKind;

    fn id(&self) -> &EntityId;

    fn name(&self) -> &str;
}

impl Record for Person {
    const KIND: EntityKind = EntityKind::Person;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Record for Starship {
    const KIND: EntityKind = EntityKind::Starship;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A card in the game: either a person or a starship.
///
/// The variant is the discriminant. Kind checks never look at which
/// attributes happen to be populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GameEntity {
    Person(Person),
    Starship(Starship),
}

impl GameEntity {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Person(_) => EntityKind::Person,
            Self::Starship(_) => EntityKind::Starship,
        }
    }

    #[must_use]
    pub fn id(&self) -> &EntityId {
        match self {
            Self::Person(p) => &p.id,
            Self::Starship(s) => &s.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person(p) => &p.name,
            Self::Starship(s) => &s.name,
        }
    }

    #[must_use]
    pub const fn is_person(&self) -> bool {
        matches!(self, Self::Person(_))
    }

    #[must_use]
    pub const fn is_starship(&self) -> bool {
        matches!(self, Self::Starship(_))
    }

    #[must_use]
    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Self::Person(p) => Some(p),
            Self::Starship(_) => None,
        }
    }

    #[must_use]
    pub fn as_starship(&self) -> Option<&Starship> {
        match self {
            Self::Starship(s) => Some(s),
            Self::Person(_) => None,
        }
    }
}

impl From<Person> for GameEntity {
    fn from(person: Person) -> Self {
        Self::Person(person)
    }
}

impl From<Starship> for GameEntity {
    fn from(starship: Starship) -> Self {
        Self::Starship(starship)
    }
}
