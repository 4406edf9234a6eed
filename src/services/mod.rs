//! Business logic services

pub mod resource;
pub mod seed;

use crate::{
    error::AppResult,
    models::{Booking, CheckIn, Equipment, Event, User},
    repository::Repository,
};

pub use resource::{ResourceService, Saved};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    repository: Repository,
    pub users: ResourceService<User>,
    pub events: ResourceService<Event>,
    pub equipment: ResourceService<Equipment>,
    pub bookings: ResourceService<Booking>,
    pub checkins: ResourceService<CheckIn>,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            users: ResourceService::new(repository.users.clone()),
            events: ResourceService::new(repository.events.clone()),
            equipment: ResourceService::new(repository.equipment.clone()),
            bookings: ResourceService::new(repository.bookings.clone()),
            checkins: ResourceService::new(repository.checkins.clone()),
            repository,
        }
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
