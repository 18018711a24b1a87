//! Query root and schema construction.

use crate::config::ServerConfig;
use crate::error::{graphql_error, join_error};
use crate::types::{Paginated, PaginationInput, PersonObject, RequestedPage, StarshipObject};
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema, ID};
use galactic_model::{EntityId, Person, Starship};
use galactic_storage::{Database, QueryService, StorageResult};
use std::sync::Arc;
use tracing::debug;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Query services shared by all resolvers.
#[derive(Clone)]
pub struct AppState {
    pub people: QueryService<Person>,
    pub starships: QueryService<Starship>,
}

impl AppState {
    pub fn new(people: QueryService<Person>, starships: QueryService<Starship>) -> Self {
        Self { people, starships }
    }

    /// Services backed by the SQLite tables of `db`.
    pub fn from_database(db: &Database) -> Self {
        Self::new(
            QueryService::new(Arc::new(db.people())),
            QueryService::new(Arc::new(db.starships())),
        )
    }
}

pub struct QueryRoot;

/// Runs a storage call on tokio's blocking pool so SQLite locking and I/O
/// never park an async worker.
async fn blocking<T, F>(op: F) -> Result<T>
where
    F: FnOnce() -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(op).await {
        Ok(result) => result.map_err(graphql_error),
        Err(e) => Err(join_error(e)),
    }
}

#[Object]
impl QueryRoot {
    /// Lists people sorted by name.
    async fn people(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<Paginated<PersonObject>> {
        let requested = RequestedPage::from_input(pagination.as_ref());
        debug!("people(page={}, limit={})", requested.page, requested.limit);
        let service = ctx.data::<AppState>()?.people.clone();
        let page = blocking(move || service.find_all(requested.page, requested.limit)).await?;
        Ok(Paginated::from_page(page, requested))
    }

    /// Lists starships sorted by name.
    async fn starships(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<Paginated<StarshipObject>> {
        let requested = RequestedPage::from_input(pagination.as_ref());
        debug!("starships(page={}, limit={})", requested.page, requested.limit);
        let service = ctx.data::<AppState>()?.starships.clone();
        let page = blocking(move || service.find_all(requested.page, requested.limit)).await?;
        Ok(Paginated::from_page(page, requested))
    }

    async fn person(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PersonObject>> {
        let service = ctx.data::<AppState>()?.people.clone();
        let id = EntityId::from(id.0);
        let person = blocking(move || service.find_one(&id)).await?;
        Ok(Some(person.into()))
    }

    async fn starship(&self, ctx: &Context<'_>, id: ID) -> Result<Option<StarshipObject>> {
        let service = ctx.data::<AppState>()?.starships.clone();
        let id = EntityId::from(id.0);
        let starship = blocking(move || service.find_one(&id)).await?;
        Ok(Some(starship.into()))
    }

    /// A uniformly random person.
    async fn random_person(&self, ctx: &Context<'_>) -> Result<PersonObject> {
        let service = ctx.data::<AppState>()?.people.clone();
        let person = blocking(move || service.find_random()).await?;
        Ok(person.into())
    }

    /// A uniformly random starship.
    async fn random_starship(&self, ctx: &Context<'_>) -> Result<StarshipObject> {
        let service = ctx.data::<AppState>()?.starships.clone();
        let starship = blocking(move || service.find_random()).await?;
        Ok(starship.into())
    }
}

/// Builds the executable schema over `state`.
pub fn build_schema(state: AppState, config: &ServerConfig) -> AppSchema {
    let builder = Schema::build(QueryRoot, EmptyMutation, EmptySubscription).data(state);
    if config.introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}

/// Schema definition language for the API, for client tooling.
pub fn export_schema_sdl() -> String {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}
