//! In-memory store, used by the `memory` backend and by tests

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EntityStore;
use crate::{
    error::{AppError, AppResult},
    models::Entity,
};

struct Inner<T> {
    rows: BTreeMap<i64, T>,
    /// Always above every stored id; `None` once `i64::MAX` is taken
    next_id: Option<i64>,
}

pub struct MemoryStore<T> {
    inner: RwLock<Inner<T>>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for MemoryStore<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> AppResult<Option<T>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut record: T) -> AppResult<T> {
        let mut inner = self.inner.write().await;
        let id = match record.id() {
            Some(id) => {
                if inner.next_id.is_some_and(|next| id >= next) {
                    inner.next_id = id.checked_add(1);
                }
                id
            }
            None => {
                let id = inner.next_id.ok_or_else(|| {
                    AppError::Internal(format!("{} identity space exhausted", T::NAME))
                })?;
                inner.next_id = id.checked_add(1);
                id
            }
        };
        record.set_id(Some(id));
        inner.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}
