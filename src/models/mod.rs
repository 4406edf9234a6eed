//! Data models for Eventrix

pub mod booking;
pub mod checkin;
pub mod equipment;
pub mod event;
pub mod user;

// Re-export commonly used types
pub use booking::Booking;
pub use checkin::CheckIn;
pub use equipment::Equipment;
pub use event::Event;
pub use user::User;

/// A persisted resource with a store-assigned numeric identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Resource name used in log lines and error messages
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>);

    /// Copy every mutable attribute of `incoming` onto `self`.
    /// The identity of `self` is never touched.
    fn merge_from(&mut self, incoming: Self);
}
