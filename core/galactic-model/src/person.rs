use crate::ids::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person record from the `people` collection.
///
/// Timestamps are always present on rows read from storage. They are left
/// out of the GraphQL surface, so records decoded from an API response
/// carry `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub mass: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Person {
    /// Creates a person with a fresh identifier and no optional attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::create(NewPerson {
            name: name.into(),
            ..NewPerson::default()
        })
    }

    /// Materializes a new person: assigns the identifier and stamps both
    /// timestamps with the current time.
    #[must_use]
    pub fn create(new: NewPerson) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            name: new.name,
            mass: new.mass,
            height: new.height,
            gender: new.gender,
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
    pub fn with_mass(mut self, mass: u32) -> Self {
        self.mass = Some(mass);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }
}

/// Attributes of a person that has not been stored yet (seed/import input).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    #[serde(default)]
    pub mass: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}
