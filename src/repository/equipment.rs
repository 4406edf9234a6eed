//! Equipment repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{save_with_identity, EntityStore};
use crate::{error::AppResult, models::Equipment};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<Equipment> for EquipmentRepository {
    async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY equip_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> AppResult<Option<Equipment>> {
        let row = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE equip_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, equipment: Equipment) -> AppResult<Equipment> {
        let Some(id) = equipment.equip_id else {
            let row = sqlx::query_as::<_, Equipment>(
                r#"
                INSERT INTO equipment (equip_name, category, status, location, purchase_date)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(&equipment.equip_name)
            .bind(&equipment.category)
            .bind(&equipment.status)
            .bind(&equipment.location)
            .bind(&equipment.purchase_date)
            .fetch_one(&self.pool)
            .await?;
            return Ok(row);
        };

        let upsert = sqlx::query(
            r#"
            INSERT INTO equipment (equip_id, equip_name, category, status, location, purchase_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (equip_id) DO UPDATE SET
                equip_name = EXCLUDED.equip_name,
                category = EXCLUDED.category,
                status = EXCLUDED.status,
                location = EXCLUDED.location,
                purchase_date = EXCLUDED.purchase_date
            RETURNING *, (xmax = 0) AS inserted
            "#,
        )
        .bind(id)
        .bind(&equipment.equip_name)
        .bind(&equipment.category)
        .bind(&equipment.status)
        .bind(&equipment.location)
        .bind(&equipment.purchase_date);

        save_with_identity(&self.pool, "equipment", "equip_id", id, upsert).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM equipment WHERE equip_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
