//! Events repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{save_with_identity, EntityStore};
use crate::{error::AppResult, models::Event};

#[derive(Clone)]
pub struct EventsRepository {
    pool: Pool<Postgres>,
}

impl EventsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<Event> for EventsRepository {
    async fn list(&self) -> AppResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY event_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> AppResult<Option<Event>> {
        let row = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE event_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, event: Event) -> AppResult<Event> {
        let Some(id) = event.event_id else {
            let row = sqlx::query_as::<_, Event>(
                r#"
                INSERT INTO events (event_name, event_date, venue, description, organizer_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(&event.event_name)
            .bind(&event.event_date)
            .bind(&event.venue)
            .bind(&event.description)
            .bind(event.organizer_id)
            .fetch_one(&self.pool)
            .await?;
            return Ok(row);
        };

        let upsert = sqlx::query(
            r#"
            INSERT INTO events (event_id, event_name, event_date, venue, description, organizer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (event_id) DO UPDATE SET
                event_name = EXCLUDED.event_name,
                event_date = EXCLUDED.event_date,
                venue = EXCLUDED.venue,
                description = EXCLUDED.description,
                organizer_id = EXCLUDED.organizer_id
            RETURNING *, (xmax = 0) AS inserted
            "#,
        )
        .bind(id)
        .bind(&event.event_name)
        .bind(&event.event_date)
        .bind(&event.venue)
        .bind(&event.description)
        .bind(event.organizer_id);

        save_with_identity(&self.pool, "events", "event_id", id, upsert).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
