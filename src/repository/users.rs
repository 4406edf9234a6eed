//! Users repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{save_with_identity, EntityStore};
use crate::{error::AppResult, models::User};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<User> for UsersRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY user_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let Some(id) = user.user_id else {
            let row = sqlx::query_as::<_, User>(
                r#"
                INSERT INTO users (name, email, phone, role, roll_number)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.role)
            .bind(&user.roll_number)
            .fetch_one(&self.pool)
            .await?;
            return Ok(row);
        };

        let upsert = sqlx::query(
            r#"
            INSERT INTO users (user_id, name, email, phone, role, roll_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                role = EXCLUDED.role,
                roll_number = EXCLUDED.roll_number
            RETURNING *, (xmax = 0) AS inserted
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.role)
        .bind(&user.roll_number);

        save_with_identity(&self.pool, "users", "user_id", id, upsert).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
