//! Repository layer for database operations

pub mod bookings;
pub mod checkins;
pub mod equipment;
pub mod events;
pub mod memory;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{
    postgres::{PgArguments, PgPoolOptions, PgRow},
    query::Query,
    FromRow, PgConnection, Pool, Postgres, Row,
};

use crate::{
    config::{DatabaseConfig, StorageBackend},
    error::{AppError, AppResult},
    models::{Booking, CheckIn, Entity, Equipment, Event, User},
};

use self::memory::MemoryStore;

/// Persistence contract for one resource type
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// All records in primary-key order
    async fn list(&self) -> AppResult<Vec<T>>;

    /// Record with the given identity, `None` when absent
    async fn get(&self, id: i64) -> AppResult<Option<T>>;

    /// Insert a record without identity (a new one is assigned) or with an
    /// identity unknown to the store (it is kept); overwrite every field of
    /// an existing record otherwise. Returns the stored record.
    async fn save(&self, record: T) -> AppResult<T>;

    /// Remove the record if present. Missing ids are not an error.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Main repository struct holding one store per resource
#[derive(Clone)]
pub struct Repository {
    pool: Option<Pool<Postgres>>,
    pub users: Arc<dyn EntityStore<User>>,
    pub events: Arc<dyn EntityStore<Event>>,
    pub equipment: Arc<dyn EntityStore<Equipment>>,
    pub bookings: Arc<dyn EntityStore<Booking>>,
    pub checkins: Arc<dyn EntityStore<CheckIn>>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: Arc::new(users::UsersRepository::new(pool.clone())),
            events: Arc::new(events::EventsRepository::new(pool.clone())),
            equipment: Arc::new(equipment::EquipmentRepository::new(pool.clone())),
            bookings: Arc::new(bookings::BookingsRepository::new(pool.clone())),
            checkins: Arc::new(checkins::CheckInsRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Create a repository backed by process-local memory
    pub fn in_memory() -> Self {
        Self {
            pool: None,
            users: Arc::new(MemoryStore::<User>::default()),
            events: Arc::new(MemoryStore::<Event>::default()),
            equipment: Arc::new(MemoryStore::<Equipment>::default()),
            bookings: Arc::new(MemoryStore::<Booking>::default()),
            checkins: Arc::new(MemoryStore::<CheckIn>::default()),
        }
    }

    /// Open the configured store, applying migrations on PostgreSQL if enabled
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        if config.backend == StorageBackend::Memory {
            tracing::warn!("Using in-memory storage, data is lost on shutdown");
            return Ok(Self::in_memory());
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;
        tracing::info!("Connected to database");

        if config.run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;
            tracing::info!("Database migrations completed");
        }

        Ok(Self::new(pool))
    }

    /// Check that the underlying store answers
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}

/// Run an explicit-id upsert (`... RETURNING *, (xmax = 0) AS inserted`)
/// and, when it inserted a new row, advance the table's identity sequence
/// to that id in the same transaction.
pub(crate) async fn save_with_identity<'q, T>(
    pool: &Pool<Postgres>,
    table: &str,
    column: &str,
    id: i64,
    upsert: Query<'q, Postgres, PgArguments>,
) -> AppResult<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut tx = pool.begin().await?;

    let row = upsert.fetch_one(&mut *tx).await?;
    let record = T::from_row(&row)?;
    let inserted: bool = row.try_get("inserted")?;

    if inserted {
        advance_identity(&mut *tx, table, column, id).await?;
    }

    tx.commit().await?;
    Ok(record)
}

/// Move the identity sequence up to `id` so generated ids never collide with
/// rows inserted under an explicit id. The sequence never moves backwards.
async fn advance_identity(
    conn: &mut PgConnection,
    table: &str,
    column: &str,
    id: i64,
) -> AppResult<()> {
    // Serializes concurrent explicit inserts on the same table
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(table)
        .execute(&mut *conn)
        .await?;

    let query = format!(
        "SELECT setval(s.seq, $1, true) \
         FROM (SELECT pg_get_serial_sequence('{table}', '{column}')::regclass AS seq) s \
         WHERE $1 > COALESCE(pg_sequence_last_value(s.seq), 0)"
    );
    sqlx::query(&query).bind(id).execute(&mut *conn).await?;
    Ok(())
}
