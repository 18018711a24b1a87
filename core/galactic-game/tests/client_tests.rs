use std::time::Duration;

use galactic_game::{GameConfig, GameEngine, GraphqlClient, PaginationInfo, Phase};
use galactic_model::{Category, NewPerson, NewStarship, Outcome};
use galactic_server::{build_router, build_schema, AppState, ServerConfig};
use galactic_storage::{Database, SeedData};
use pretty_assertions::assert_eq;

fn new_person(name: &str, mass: u32) -> NewPerson {
    NewPerson {
        name: name.to_string(),
        mass: Some(mass),
        ..NewPerson::default()
    }
}

fn new_starship(name: &str, crew: u32) -> NewStarship {
    NewStarship {
        name: name.to_string(),
        model: None,
        crew,
        passengers: None,
        starship_class: None,
    }
}

/// Serves `seed` from an in-memory database, returning the GraphQL URL.
async fn spawn_server(seed: SeedData) -> String {
    let db = Database::open_in_memory().unwrap();
    db.seed(seed).unwrap();

    let config = ServerConfig::default();
    let schema = build_schema(AppState::from_database(&db), &config);
    let app = build_router(schema, &config).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}/graphql", port)
}

fn sample_seed() -> SeedData {
    SeedData {
        people: vec![
            new_person("Commander Rex", 80),
            new_person("Alex Nova", 77),
            new_person("Dr. Elena Cross", 49),
        ],
        starships: vec![new_starship("Titan Station", 342953), new_starship("Eagle Strike", 1)],
    }
}

fn fast_config() -> GameConfig {
    GameConfig {
        initial_delay: Duration::from_millis(1),
        retry_delay: Duration::from_millis(1),
        ..GameConfig::default()
    }
}

// ── Queries ──────────────────────────────────────────────────────

#[tokio::test]
async fn people_page_round_trips_through_the_api() {
    let url = spawn_server(sample_seed()).await;
    let client = GraphqlClient::new(url.clone());
    assert_eq!(client.endpoint(), url);

    let page = client.people(Some(1), Some(2)).await.unwrap();

    let names: Vec<_> = page.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alex Nova", "Commander Rex"]);
    assert_eq!(
        page.pagination,
        PaginationInfo {
            total: 3,
            page: 1,
            total_pages: 2,
            limit: 2,
        }
    );
}

#[tokio::test]
async fn default_pagination_comes_from_the_server() {
    let client = GraphqlClient::new(spawn_server(sample_seed()).await);

    let page = client.starships(None, None).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].name, "Eagle Strike");
    assert_eq!(page.data[0].crew, 1);
    assert_eq!(page.pagination.limit, 10);
}

#[tokio::test]
async fn lookup_by_id_and_missing_id() {
    let client = GraphqlClient::new(spawn_server(sample_seed()).await);
    let first = client.people(Some(1), Some(1)).await.unwrap().data.remove(0);

    let found = client.person(&first.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Alex Nova");
    assert_eq!(found.mass, Some(77));

    let missing = client.starship(&"no-such-ship".into()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn random_person_is_from_the_collection() {
    let client = GraphqlClient::new(spawn_server(sample_seed()).await);

    for _ in 0..10 {
        let person = client.random_person().await.unwrap();
        assert!(["Alex Nova", "Commander Rex", "Dr. Elena Cross"].contains(&person.name.as_str()));
    }
}

#[tokio::test]
async fn random_from_empty_collection_is_a_fetch_failure() {
    let client = GraphqlClient::new(spawn_server(SeedData::default()).await);

    let err = client.random_starship().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(err.to_string().contains("No starships available"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_fetch_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = GraphqlClient::new(format!("http://127.0.0.1:{}/graphql", port));
    assert!(client.random_person().await.unwrap_err().is_fetch_failure());
}

// ── Full game ────────────────────────────────────────────────────

#[tokio::test]
async fn starship_draw_against_live_server() {
    let url = spawn_server(sample_seed()).await;
    let mut engine = GameEngine::with_config(GraphqlClient::new(url), fast_config());
    engine.select_category(Category::Starships).unwrap();

    let report = engine.draw().await.unwrap();

    assert_eq!(engine.state().phase(), Phase::Resolved);
    if report.is_duplicate() {
        assert_eq!(report.outcome, Outcome::Tie);
    } else {
        let expected = if report.left.name() == "Titan Station" {
            Outcome::Left
        } else {
            Outcome::Right
        };
        assert_eq!(report.outcome, expected);
    }
}

#[tokio::test]
async fn single_row_collection_yields_duplicate_pair() {
    let url = spawn_server(SeedData {
        people: vec![new_person("Solo", 60)],
        starships: Vec::new(),
    })
    .await;
    let mut engine = GameEngine::with_config(GraphqlClient::new(url), fast_config());

    let report = engine.draw().await.unwrap();

    assert!(report.is_duplicate());
    assert_eq!(report.retries, 5);
    assert_eq!(report.outcome, Outcome::Tie);
}

#[tokio::test]
async fn empty_server_leaves_game_idle_with_message() {
    let url = spawn_server(SeedData::default()).await;
    let mut engine = GameEngine::with_config(GraphqlClient::new(url), fast_config());

    assert!(engine.draw().await.is_err());
    assert_eq!(engine.state().phase(), Phase::Idle);
    assert_eq!(
        engine.state().error(),
        Some("Failed to load data. Please try again.")
    );
}
