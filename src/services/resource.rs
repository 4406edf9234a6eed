//! Generic CRUD service shared by every resource

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Entity,
    repository::EntityStore,
};

/// Outcome of an update, which inserts when the target does not exist yet
#[derive(Debug, Clone, PartialEq)]
pub enum Saved<T> {
    Updated(T),
    Inserted(T),
}

impl<T> Saved<T> {
    pub fn into_inner(self) -> T {
        match self {
            Saved::Updated(record) | Saved::Inserted(record) => record,
        }
    }

    pub fn was_inserted(&self) -> bool {
        matches!(self, Saved::Inserted(_))
    }
}

#[derive(Clone)]
pub struct ResourceService<T: Entity> {
    store: Arc<dyn EntityStore<T>>,
}

impl<T: Entity> ResourceService<T> {
    pub fn new(store: Arc<dyn EntityStore<T>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<T>> {
        self.store.list().await
    }

    pub async fn find(&self, id: i64) -> AppResult<Option<T>> {
        self.store.get(id).await
    }

    /// Get a record, absence is an error
    pub async fn get(&self, id: i64) -> AppResult<T> {
        self.find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::NAME, id)))
    }

    /// Persist a new record. Any identity carried by `record` is discarded.
    pub async fn create(&self, mut record: T) -> AppResult<T> {
        record.set_id(None);
        let saved = self.store.save(record).await?;
        tracing::debug!(resource = T::NAME, id = ?saved.id(), "Created record");
        Ok(saved)
    }

    /// Replace the mutable fields of record `id` with those of `incoming`,
    /// or insert `incoming` under `id` if no such record exists.
    ///
    /// Find and save are separate store calls; concurrent updates of the
    /// same id are last-write-wins.
    pub async fn update(&self, id: i64, incoming: T) -> AppResult<Saved<T>> {
        match self.store.get(id).await? {
            Some(mut existing) => {
                existing.merge_from(incoming);
                let saved = self.store.save(existing).await?;
                tracing::debug!(resource = T::NAME, id, "Updated record");
                Ok(Saved::Updated(saved))
            }
            None => {
                let mut record = incoming;
                record.set_id(Some(id));
                let saved = self.store.save(record).await?;
                tracing::debug!(resource = T::NAME, id, "Inserted record on update");
                Ok(Saved::Inserted(saved))
            }
        }
    }

    /// Delete a record. Deleting a missing id succeeds.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete_by_id(id).await?;
        tracing::debug!(resource = T::NAME, id, "Deleted record");
        Ok(())
    }
}
