// Service exports
pub mod activity;
pub mod notify;
pub mod profile_api;

pub use activity::{ActivityStore, PgActivityStore};
pub use notify::{ConnectionId, ConnectionRegistry};
pub use profile_api::{ProfileApiClient, ProfileProvider};
