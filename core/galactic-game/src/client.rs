//! GraphQL HTTP client for the Galactic Battle API.

use crate::error::{GameError, GameResult};
use crate::source::EntitySource;
use async_trait::async_trait;
use galactic_model::{Category, EntityId, GameEntity, Person, Starship};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

pub const RANDOM_PERSON_QUERY: &str = "query GetRandomPerson {
  randomPerson { id name mass height gender }
}";

pub const RANDOM_STARSHIP_QUERY: &str = "query GetRandomStarship {
  randomStarship { id name model crew passengers starshipClass }
}";

pub const PERSON_QUERY: &str = "query GetPerson($id: ID!) {
  person(id: $id) { id name mass height gender }
}";

pub const STARSHIP_QUERY: &str = "query GetStarship($id: ID!) {
  starship(id: $id) { id name model crew passengers starshipClass }
}";

pub const PEOPLE_QUERY: &str = "query GetAllPeople($pagination: PaginationInput) {
  people(pagination: $pagination) {
    data { id name mass height gender }
    pagination { total page totalPages limit }
  }
}";

pub const STARSHIPS_QUERY: &str = "query GetAllStarships($pagination: PaginationInput) {
  starships(pagination: $pagination) {
    data { id name model crew passengers starshipClass }
    pagination { total page totalPages limit }
  }
}";

/// Pagination metadata as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
    /// The page size the caller asked for, which may exceed what the server
    /// actually served.
    pub limit: i64,
}

/// A paginated list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
    #[serde(default)]
    extensions: Option<GraphqlErrorExtensions>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorExtensions {
    #[serde(default)]
    code: Option<String>,
}

impl GraphqlErrorMessage {
    fn is_not_found(&self) -> bool {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.code.as_deref())
            == Some("NOT_FOUND")
    }
}

/// Client for the `/graphql` endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    /// Creates a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a client reusing an existing `reqwest` client.
    pub fn with_http_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs a query and returns the named top-level field.
    ///
    /// Returns `Ok(None)` when the field is null, or when every reported
    /// error is a `NOT_FOUND`.
    async fn query_field<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> GameResult<Option<T>> {
        debug!("POST {} ({})", self.endpoint, field);
        let response: GraphqlResponse = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.errors.is_empty() {
            if response.errors.iter().all(GraphqlErrorMessage::is_not_found) {
                return Ok(None);
            }
            let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
            return Err(GameError::FetchFailure(messages.join("; ")));
        }

        let mut data = response
            .data
            .ok_or_else(|| GameError::FetchFailure("response carried no data".to_string()))?;
        match data.get_mut(field).map(Value::take) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    async fn require_field<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> GameResult<T> {
        self.query_field(query, variables, field)
            .await?
            .ok_or_else(|| GameError::FetchFailure(format!("response has no {field}")))
    }

    /// Fetches a random person.
    pub async fn random_person(&self) -> GameResult<Person> {
        self.require_field(RANDOM_PERSON_QUERY, json!({}), "randomPerson")
            .await
    }

    /// Fetches a random starship.
    pub async fn random_starship(&self) -> GameResult<Starship> {
        self.require_field(RANDOM_STARSHIP_QUERY, json!({}), "randomStarship")
            .await
    }

    /// Looks up a person by id.
    pub async fn person(&self, id: &EntityId) -> GameResult<Option<Person>> {
        self.query_field(PERSON_QUERY, json!({ "id": id }), "person")
            .await
    }

    /// Looks up a starship by id.
    pub async fn starship(&self, id: &EntityId) -> GameResult<Option<Starship>> {
        self.query_field(STARSHIP_QUERY, json!({ "id": id }), "starship")
            .await
    }

    /// Lists one page of people. `None` leaves the value to the server default.
    pub async fn people(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> GameResult<PageEnvelope<Person>> {
        self.require_field(PEOPLE_QUERY, pagination_variables(page, limit), "people")
            .await
    }

    /// Lists one page of starships.
    pub async fn starships(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> GameResult<PageEnvelope<Starship>> {
        self.require_field(STARSHIPS_QUERY, pagination_variables(page, limit), "starships")
            .await
    }
}

fn pagination_variables(page: Option<i64>, limit: Option<i64>) -> Value {
    let mut pagination = serde_json::Map::new();
    if let Some(page) = page {
        pagination.insert("page".into(), json!(page));
    }
    if let Some(limit) = limit {
        pagination.insert("limit".into(), json!(limit));
    }
    json!({ "pagination": pagination })
}

#[async_trait]
impl EntitySource for GraphqlClient {
    async fn random_entity(&self, category: Category) -> GameResult<GameEntity> {
        match category {
            Category::People => self.random_person().await.map(GameEntity::from),
            Category::Starships => self.random_starship().await.map(GameEntity::from),
        }
    }
}
