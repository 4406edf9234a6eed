//! Check-ins repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{save_with_identity, EntityStore};
use crate::{error::AppResult, models::CheckIn};

#[derive(Clone)]
pub struct CheckInsRepository {
    pool: Pool<Postgres>,
}

impl CheckInsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<CheckIn> for CheckInsRepository {
    async fn list(&self) -> AppResult<Vec<CheckIn>> {
        let rows = sqlx::query_as::<_, CheckIn>("SELECT * FROM checkins ORDER BY checkin_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> AppResult<Option<CheckIn>> {
        let row = sqlx::query_as::<_, CheckIn>("SELECT * FROM checkins WHERE checkin_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, checkin: CheckIn) -> AppResult<CheckIn> {
        let Some(id) = checkin.checkin_id else {
            let row = sqlx::query_as::<_, CheckIn>(
                r#"
                INSERT INTO checkins (user_id, event_id, checkin_time, checkout_time, status)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(checkin.user_id)
            .bind(checkin.event_id)
            .bind(&checkin.checkin_time)
            .bind(&checkin.checkout_time)
            .bind(&checkin.status)
            .fetch_one(&self.pool)
            .await?;
            return Ok(row);
        };

        let upsert = sqlx::query(
            r#"
            INSERT INTO checkins (checkin_id, user_id, event_id, checkin_time, checkout_time, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (checkin_id) DO UPDATE SET
                user_id = EXCLUDED.user_id,
                event_id = EXCLUDED.event_id,
                checkin_time = EXCLUDED.checkin_time,
                checkout_time = EXCLUDED.checkout_time,
                status = EXCLUDED.status
            RETURNING *, (xmax = 0) AS inserted
            "#,
        )
        .bind(id)
        .bind(checkin.user_id)
        .bind(checkin.event_id)
        .bind(&checkin.checkin_time)
        .bind(&checkin.checkout_time)
        .bind(&checkin.status);

        save_with_identity(&self.pool, "checkins", "checkin_id", id, upsert).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM checkins WHERE checkin_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
