pub mod complaint;
pub mod department;
pub mod employee;
pub mod event;
pub mod news;
pub mod schema;
pub mod vacancy;

use chrono::{DateTime, Utc};

/// Records listed in date order. `None` falls back to the store's creation time.
pub trait Dated {
    fn sort_date(&self) -> Option<DateTime<Utc>>;
}
