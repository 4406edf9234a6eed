//! Bookings repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{save_with_identity, EntityStore};
use crate::{error::AppResult, models::Booking};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<Booking> for BookingsRepository {
    async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY booking_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE booking_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, booking: Booking) -> AppResult<Booking> {
        let Some(id) = booking.booking_id else {
            let row = sqlx::query_as::<_, Booking>(
                r#"
                INSERT INTO bookings (event_id, equip_id, assigned_to, borrow_date, return_date, remarks)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
                "#,
            )
            .bind(booking.event_id)
            .bind(booking.equip_id)
            .bind(booking.assigned_to)
            .bind(&booking.borrow_date)
            .bind(&booking.return_date)
            .bind(&booking.remarks)
            .fetch_one(&self.pool)
            .await?;
            return Ok(row);
        };

        let upsert = sqlx::query(
            r#"
            INSERT INTO bookings (booking_id, event_id, equip_id, assigned_to, borrow_date, return_date, remarks)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (booking_id) DO UPDATE SET
                event_id = EXCLUDED.event_id,
                equip_id = EXCLUDED.equip_id,
                assigned_to = EXCLUDED.assigned_to,
                borrow_date = EXCLUDED.borrow_date,
                return_date = EXCLUDED.return_date,
                remarks = EXCLUDED.remarks
            RETURNING *, (xmax = 0) AS inserted
            "#,
        )
        .bind(id)
        .bind(booking.event_id)
        .bind(booking.equip_id)
        .bind(booking.assigned_to)
        .bind(&booking.borrow_date)
        .bind(&booking.return_date)
        .bind(&booking.remarks);

        save_with_identity(&self.pool, "bookings", "booking_id", id, upsert).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
