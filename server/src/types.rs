//! GraphQL object and input types.

use async_graphql::{InputObject, OutputType, SimpleObject, ID};
use galactic_model::{Person, Starship};
use galactic_storage::{Page, DEFAULT_LIMIT, DEFAULT_PAGE};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Person")]
pub struct PersonObject {
    pub id: ID,
    pub name: String,
    /// Mass in kilograms.
    pub mass: Option<u32>,
    /// Height in centimetres.
    pub height: Option<u32>,
    pub gender: Option<String>,
}

impl From<Person> for PersonObject {
    fn from(person: Person) -> Self {
        Self {
            id: ID(person.id.into_string()),
            name: person.name,
            mass: person.mass,
            height: person.height,
            gender: person.gender,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Starship")]
pub struct StarshipObject {
    pub id: ID,
    pub name: String,
    pub model: Option<String>,
    pub crew: u32,
    pub passengers: Option<u32>,
    pub starship_class: Option<String>,
}

impl From<Starship> for StarshipObject {
    fn from(starship: Starship) -> Self {
        Self {
            id: ID(starship.id.into_string()),
            name: starship.name,
            model: starship.model,
            crew: starship.crew,
            passengers: starship.passengers,
            starship_class: starship.starship_class,
        }
    }
}

/// Optional paging arguments for list queries.
#[derive(Debug, Clone, Default, InputObject)]
pub struct PaginationInput {
    #[graphql(default_with = "Some(1)")]
    pub page: Option<i32>,
    #[graphql(default_with = "Some(10)")]
    pub limit: Option<i32>,
}

/// Page and limit as the caller asked for them, before clamping.
///
/// A missing, null or zero value falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedPage {
    pub page: i64,
    pub limit: i64,
}

impl RequestedPage {
    pub fn from_input(input: Option<&PaginationInput>) -> Self {
        let pick = |value: Option<i32>, default: i64| {
            value.filter(|&v| v != 0).map_or(default, i64::from)
        };
        Self {
            page: pick(input.and_then(|p| p.page), DEFAULT_PAGE),
            limit: pick(input.and_then(|p| p.limit), DEFAULT_LIMIT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct PaginationInfo {
    pub total: i32,
    pub page: i32,
    pub total_pages: i32,
    /// Echo of the requested limit. May exceed the number of rows served.
    pub limit: i32,
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(concrete(name = "PaginatedPerson", params(PersonObject)))]
#[graphql(concrete(name = "PaginatedStarship", params(StarshipObject)))]
pub struct Paginated<T: OutputType> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T: OutputType> Paginated<T> {
    /// Wraps a served page. `limit` in the metadata is the requested one.
    pub fn from_page<R: Into<T>>(page: Page<R>, requested: RequestedPage) -> Self {
        Self {
            pagination: PaginationInfo {
                total: saturate(page.total),
                page: saturate(page.page),
                total_pages: saturate(page.total_pages),
                limit: i32::try_from(requested.limit).unwrap_or(i32::MAX),
            },
            data: page.data.into_iter().map(Into::into).collect(),
        }
    }
}

fn saturate(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
