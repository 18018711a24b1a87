use galactic_model::{EntityId, EntityKind, NewPerson, NewStarship, Person, Starship};
use galactic_storage::{Database, EntityStore, QueryService, SeedData, StorageError};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;

fn person(id: &str, name: &str, mass: Option<u32>) -> Person {
    let p = Person::new(name).with_id(id);
    match mass {
        Some(m) => p.with_mass(m),
        None => p,
    }
}

fn db_with_people(people: &[Person]) -> Database {
    let db = Database::open_in_memory().unwrap();
    for p in people {
        db.insert(p).unwrap();
    }
    db
}

// ── Schema & insert ──────────────────────────────────────────────

#[test]
fn fresh_database_is_empty() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.is_empty().unwrap());
    assert_eq!(db.people().count().unwrap(), 0);
    assert_eq!(db.starships().count().unwrap(), 0);
}

#[test]
fn inserted_person_reads_back_with_all_fields() {
    let alex = Person::new("Alex Nova")
        .with_id("1")
        .with_mass(77)
        .with_height(172)
        .with_gender("male");
    let db = db_with_people(&[alex.clone()]);

    let stored = db.people().fetch_by_id(&EntityId::from("1")).unwrap().unwrap();
    assert_eq!(stored.name, "Alex Nova");
    assert_eq!(stored.mass, Some(77));
    assert_eq!(stored.height, Some(172));
    assert_eq!(stored.gender.as_deref(), Some("male"));
    assert!(stored.created_at.is_some());
    assert!(stored.updated_at.is_some());
}

#[test]
fn optional_columns_stay_null() {
    let db = db_with_people(&[person("1", "Ghost", None)]);

    let stored = db.people().fetch_by_id(&EntityId::from("1")).unwrap().unwrap();
    assert_eq!(stored.mass, None);
    assert_eq!(stored.height, None);
    assert_eq!(stored.gender, None);
}

#[test]
fn inserted_starship_reads_back() {
    let db = Database::open_in_memory().unwrap();
    let ship = Starship::new("Titan Station", 342_953)
        .with_id("ds-1")
        .with_model("DS-1 Orbital Battle Platform")
        .with_passengers(843_342)
        .with_class("Deep Space Mobile Battlestation");
    db.insert(&ship).unwrap();

    let stored = db.starships().fetch_by_id(&EntityId::from("ds-1")).unwrap().unwrap();
    assert_eq!(stored.crew, 342_953);
    assert_eq!(stored.passengers, Some(843_342));
    assert_eq!(stored.starship_class.as_deref(), Some("Deep Space Mobile Battlestation"));
    assert_eq!(stored.model.as_deref(), Some("DS-1 Orbital Battle Platform"));
}

#[test]
fn duplicate_id_is_rejected() {
    let db = db_with_people(&[person("1", "Alex Nova", Some(77))]);
    let err = db.insert(&person("1", "Impostor", Some(1))).unwrap_err();
    assert!(matches!(err, StorageError::Database(_)));
}

#[test]
fn collections_are_independent() {
    let db = db_with_people(&[person("1", "Alex Nova", Some(77))]);
    assert_eq!(db.people().count().unwrap(), 1);
    assert_eq!(db.starships().count().unwrap(), 0);
    assert!(!db.is_empty().unwrap());
}

// ── Paging ───────────────────────────────────────────────────────

#[test]
fn page_is_ordered_by_name() {
    let db = db_with_people(&[
        person("3", "C", Some(3)),
        person("1", "A", Some(1)),
        person("2", "B", Some(2)),
    ]);

    let (rows, total) = db.people().fetch_page(0, 2).unwrap();
    let names: Vec<_> = rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(total, 3);

    let (rows, _) = db.people().fetch_page(2, 2).unwrap();
    let names: Vec<_> = rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["C"]);
}

#[test]
fn equal_names_keep_row_order() {
    let db = db_with_people(&[
        person("z-first", "Twin", Some(1)),
        person("a-second", "Twin", Some(2)),
    ]);

    let (rows, _) = db.people().fetch_page(0, 10).unwrap();
    let ids: Vec<_> = rows.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["z-first", "a-second"]);
}

#[test]
fn offset_past_end_returns_no_rows() {
    let db = db_with_people(&[person("1", "A", None)]);
    let (rows, total) = db.people().fetch_page(10, 10).unwrap();
    assert!(rows.is_empty());
    assert_eq!(total, 1);
}

#[test]
fn huge_offset_is_accepted() {
    let db = db_with_people(&[person("1", "A", None)]);
    let (rows, _) = db.people().fetch_page(u64::MAX, 100).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn query_service_over_sqlite_end_to_end() {
    let db = db_with_people(&[
        person("c", "C", Some(3)),
        person("a", "A", Some(1)),
        person("b", "B", Some(2)),
    ]);
    let service: QueryService<Person> = QueryService::new(Arc::new(db.people()));

    let first = service.find_all(1, 2).unwrap();
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);

    let second = service.find_all(2, 2).unwrap();
    assert_eq!(second.data[0].name, "C");

    assert_eq!(service.find_one(&EntityId::from("b")).unwrap().mass, Some(2));
    assert!(matches!(
        service.find_one(&EntityId::from("zzz")),
        Err(StorageError::NotFound { kind: EntityKind::Person, .. })
    ));
}

// ── Random pick ──────────────────────────────────────────────────

#[test]
fn random_pick_on_empty_table_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.starships().fetch_random().unwrap().is_none());
}

#[test]
fn random_pick_reaches_every_row() {
    let db = db_with_people(&[
        person("1", "Alex Nova", Some(77)),
        person("2", "Dr. Elena Cross", Some(49)),
        person("3", "Commander Rex", Some(80)),
    ]);
    let service: QueryService<Person> = QueryService::new(Arc::new(db.people()));

    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.insert(service.find_random().unwrap().id.into_string());
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn random_pick_on_empty_service_is_unavailable() {
    let db = Database::open_in_memory().unwrap();
    let service: QueryService<Starship> = QueryService::new(Arc::new(db.starships()));
    assert!(matches!(
        service.find_random(),
        Err(StorageError::Unavailable(EntityKind::Starship))
    ));
}

// ── Seeding ──────────────────────────────────────────────────────

#[test]
fn seed_inserts_everything() {
    let db = Database::open_in_memory().unwrap();
    let summary = db
        .seed(SeedData {
            people: vec![
                NewPerson { name: "Alex Nova".into(), mass: Some(77), ..Default::default() },
                NewPerson { name: "Commander Rex".into(), mass: Some(80), ..Default::default() },
            ],
            starships: vec![NewStarship { name: "Eagle Strike".into(), crew: 1, ..Default::default() }],
        })
        .unwrap();

    assert_eq!(summary.people, 2);
    assert_eq!(summary.starships, 1);
    assert_eq!(db.people().count().unwrap(), 2);
    assert_eq!(db.starships().count().unwrap(), 1);
}

#[test]
fn seed_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "people": [{{"name": "Alex Nova", "mass": 77, "height": 172, "gender": "male"}}],
            "starships": [{{"name": "Titan Station", "crew": 342953, "starshipClass": "Battlestation"}}]
        }}"#
    )
    .unwrap();

    let db = Database::open_in_memory().unwrap();
    let summary = db.seed_from_file(file.path()).unwrap();
    assert_eq!(summary.people, 1);
    assert_eq!(summary.starships, 1);

    let (ships, _) = db.starships().fetch_page(0, 10).unwrap();
    assert_eq!(ships[0].starship_class.as_deref(), Some("Battlestation"));
}

#[test]
fn bundled_seed_file_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/seed.json");
    let db = Database::open_in_memory().unwrap();
    let summary = db.seed_from_file(path).unwrap();

    assert_eq!(summary.people, 10);
    assert_eq!(summary.starships, 7);
    assert!(!db.is_empty().unwrap());

    let service = QueryService::new(Arc::new(db.starships()));
    let first = service.find_all(1, 1).unwrap();
    assert_eq!(first.data[0].name, "Drifter");
    assert_eq!(first.data[0].crew, 1);
    assert!(first.data[0].model.is_none());
}

#[test]
fn malformed_seed_file_is_a_serialization_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let db = Database::open_in_memory().unwrap();
    assert!(matches!(
        db.seed_from_file(file.path()),
        Err(StorageError::Serialization(_))
    ));
}

#[test]
fn missing_seed_file_is_an_io_error() {
    let db = Database::open_in_memory().unwrap();
    assert!(matches!(
        db.seed_from_file("/nonexistent/seed.json"),
        Err(StorageError::Io(_))
    ));
}

// ── On-disk persistence ──────────────────────────────────────────

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galactic.db");

    {
        let db = Database::open(&path).unwrap();
        db.insert(&person("1", "Alex Nova", Some(77))).unwrap();
    }

    let db = Database::open(&path).unwrap();
    let stored = db.people().fetch_by_id(&EntityId::from("1")).unwrap();
    assert_eq!(stored.unwrap().mass, Some(77));
}
