//! SQLite-backed entity stores.
//!
//! One connection serves both collections; each [`SqliteStore`] holds a
//! handle to it and locks it per query.

use crate::error::{StorageError, StorageResult};
use crate::seed::{SeedData, SeedSummary};
use crate::store::EntityStore;
use chrono::Utc;
use galactic_model::{EntityId, Person, Record, Starship};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::marker::PhantomData;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS people (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        mass INTEGER CHECK (mass IS NULL OR mass >= 0),
        height INTEGER CHECK (height IS NULL OR height >= 0),
        gender TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_people_name ON people (name);

    CREATE TABLE IF NOT EXISTS starships (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        model TEXT,
        crew INTEGER NOT NULL,
        passengers INTEGER CHECK (passengers IS NULL OR passengers >= 0),
        starship_class TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_starships_name ON starships (name);
";

/// A record type that maps onto one SQLite table.
pub trait SqlRecord: Record {
    /// Table holding this record type.
    const TABLE: &'static str;

    /// Column list, in the order [`SqlRecord::from_row`] reads them.
    const COLUMNS: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn insert(&self, conn: &Connection) -> rusqlite::Result<()>;
}

impl SqlRecord for Person {
    const TABLE: &'static str = "people";
    const COLUMNS: &'static str = "id, name, mass, height, gender, created_at, updated_at";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: EntityId::from_string(row.get::<_, String>(0)?),
            name: row.get(1)?,
            mass: row.get(2)?,
            height: row.get(3)?,
            gender: row.get(4)?,
            created_at: Some(row.get(5)?),
            updated_at: Some(row.get(6)?),
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<()> {
        let now = Utc::now();
        conn.execute(
            "INSERT INTO people (id, name, mass, height, gender, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                self.id.as_str(),
                self.name,
                self.mass,
                self.height,
                self.gender,
                self.created_at.unwrap_or(now),
                self.updated_at.unwrap_or(now),
            ],
        )?;
        Ok(())
    }
}

impl SqlRecord for Starship {
    const TABLE: &'static str = "starships";
    const COLUMNS: &'static str =
        "id, name, model, crew, passengers, starship_class, created_at, updated_at";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: EntityId::from_string(row.get::<_, String>(0)?),
            name: row.get(1)?,
            model: row.get(2)?,
            crew: row.get(3)?,
            passengers: row.get(4)?,
            starship_class: row.get(5)?,
            created_at: Some(row.get(6)?),
            updated_at: Some(row.get(7)?),
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<()> {
        let now = Utc::now();
        conn.execute(
            "INSERT INTO starships (id, name, model, crew, passengers, starship_class, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                self.id.as_str(),
                self.name,
                self.model,
                self.crew,
                self.passengers,
                self.starship_class,
                self.created_at.unwrap_or(now),
                self.updated_at.unwrap_or(now),
            ],
        )?;
        Ok(())
    }
}

/// Owner of the SQLite connection shared by both collections.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) a database at the given path and makes sure both
    /// tables exist. The path `:memory:` opens a private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        debug!("Opening database at {}", path.display());
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory database (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Store over the `people` table.
    #[must_use]
    pub fn people(&self) -> SqliteStore<Person> {
        SqliteStore::new(Arc::clone(&self.conn))
    }

    /// Store over the `starships` table.
    #[must_use]
    pub fn starships(&self) -> SqliteStore<Starship> {
        SqliteStore::new(Arc::clone(&self.conn))
    }

    /// Inserts a single record.
    pub fn insert<T: SqlRecord>(&self, record: &T) -> StorageResult<()> {
        let conn = lock(&self.conn)?;
        record.insert(&conn)?;
        Ok(())
    }

    /// Returns true when neither collection holds any row.
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.people().count()? == 0 && self.starships().count()? == 0)
    }

    /// Inserts every record of a seed set in one transaction.
    ///
    /// Each record gets a fresh id and creation timestamp.
    pub fn seed(&self, data: SeedData) -> StorageResult<SeedSummary> {
        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction()?;
        let mut summary = SeedSummary::default();
        for new in data.people {
            Person::create(new).insert(&tx)?;
            summary.people += 1;
        }
        for new in data.starships {
            Starship::create(new).insert(&tx)?;
            summary.starships += 1;
        }
        tx.commit()?;
        info!(
            "Seeded {} people and {} starships",
            summary.people, summary.starships
        );
        Ok(summary)
    }

    /// Reads a JSON seed file and inserts its contents.
    pub fn seed_from_file(&self, path: impl AsRef<Path>) -> StorageResult<SeedSummary> {
        let data = SeedData::from_file(path)?;
        self.seed(data)
    }
}

fn lock(conn: &Mutex<Connection>) -> StorageResult<MutexGuard<'_, Connection>> {
    conn.lock().map_err(|_| StorageError::LockPoisoned)
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// [`EntityStore`] over one SQLite table.
pub struct SqliteStore<T> {
    conn: Arc<Mutex<Connection>>,
    _record: PhantomData<fn() -> T>,
}

impl<T> SqliteStore<T> {
    fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }
}

impl<T> Clone for SqliteStore<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.conn))
    }
}

impl<T: SqlRecord> EntityStore<T> for SqliteStore<T> {
    fn fetch_page(&self, offset: u64, limit: u64) -> StorageResult<(Vec<T>, u64)> {
        let conn = lock(&self.conn)?;
        let total: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", T::TABLE),
            [],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM {} ORDER BY name ASC, rowid ASC LIMIT ?1 OFFSET ?2",
            T::COLUMNS,
            T::TABLE
        ))?;
        let rows = stmt
            .query_map(params![to_sql_int(limit), to_sql_int(offset)], T::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok((rows, total.max(0) as u64))
    }

    fn fetch_by_id(&self, id: &EntityId) -> StorageResult<Option<T>> {
        let conn = lock(&self.conn)?;
        let row = conn
            .query_row(
                &format!("SELECT {} FROM {} WHERE id = ?1", T::COLUMNS, T::TABLE),
                params![id.as_str()],
                T::from_row,
            )
            .optional()?;
        Ok(row)
    }

    fn fetch_random(&self) -> StorageResult<Option<T>> {
        let conn = lock(&self.conn)?;
        let row = conn
            .query_row(
                &format!(
                    "SELECT {} FROM {} ORDER BY RANDOM() LIMIT 1",
                    T::COLUMNS,
                    T::TABLE
                ),
                [],
                T::from_row,
            )
            .optional()?;
        Ok(row)
    }

    fn count(&self) -> StorageResult<u64> {
        let conn = lock(&self.conn)?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", T::TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as u64)
    }
}
