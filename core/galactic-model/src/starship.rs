use crate::ids::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A starship record from the `starships` collection.
///
/// `crew` is required in storage. A response that omits it decodes as a
/// crew of zero, which is also what the comparison rule would substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Starship {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub crew: u32,
    #[serde(default)]
    pub passengers: Option<u32>,
    #[serde(default)]
    pub starship_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Starship {
    /// Creates a starship with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, crew: u32) -> Self {
        Self::create(NewStarship {
            name: name.into(),
            crew,
            ..NewStarship::default()
        })
    }

    /// Materializes a new starship: assigns the identifier and stamps both
    /// timestamps with the current time.
    #[must_use]
    pub fn create(new: NewStarship) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            name: new.name,
            model: new.model,
            crew: new.crew,
            passengers: new.passengers,
            starship_class: new.starship_class,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<EntityId>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_passengers(mut self, passengers: u32) -> Self {
        self.passengers = Some(passengers);
        self
    }

    #[must_use]
    pub fn with_class(mut self, starship_class: impl Into<String>) -> Self {
        self.starship_class = Some(starship_class.into());
        self
    }
}

/// Attributes of a starship that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStarship {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    pub crew: u32,
    #[serde(default)]
    pub passengers: Option<u32>,
    #[serde(default)]
    pub starship_class: Option<String>,
}
