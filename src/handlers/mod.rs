pub mod admin;
pub mod complaint;
pub mod department;
pub mod employee;
pub mod event;
pub mod news;
pub mod root;
pub mod vacancy;

use actix_web::{error::QueryPayloadError, HttpRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::errors::AppError;
use crate::models::Dated;
use crate::store::Stored;

#[derive(Deserialize)]
pub struct ListParams {
    limit: Option<usize>,
}

impl ListParams {
    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default)
    }
}

/// `limit` is the only query parameter, so any query failure is reported against it.
pub fn invalid_list_params(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let mut error = ValidationError::new("type");
    error.message = Some(err.to_string().into());

    let mut errors = ValidationErrors::new();
    errors.add("limit", error);
    AppError::Validation(errors).into()
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

fn sort_key<T: Dated>(item: &Stored<T>) -> DateTime<Utc> {
    item.record.sort_date().unwrap_or(item.created_at)
}

/// Orders by each record's date, falling back to its creation time, then keeps the first `limit`.
pub fn sort_and_limit<T: Dated>(items: &mut Vec<Stored<T>>, order: SortOrder, limit: usize) {
    items.sort_by(|a, b| {
        let ordering = sort_key(a).cmp(&sort_key(b));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    items.truncate(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug)]
    struct Item(Option<DateTime<Utc>>);

    impl Dated for Item {
        fn sort_date(&self) -> Option<DateTime<Utc>> {
            self.0
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    fn stored(date: Option<u32>, created: u32) -> Stored<Item> {
        Stored {
            id: Uuid::new_v4(),
            created_at: day(created),
            record: Item(date.map(day)),
        }
    }

    #[test]
    fn missing_dates_fall_back_to_creation_time() {
        let mut items = vec![stored(Some(5), 1), stored(None, 9), stored(Some(2), 1)];
        sort_and_limit(&mut items, SortOrder::Descending, 10);

        let keys: Vec<_> = items.iter().map(sort_key).collect();
        assert_eq!(keys, vec![day(9), day(5), day(2)]);
    }

    #[test]
    fn ascending_and_truncated() {
        let mut items = vec![stored(Some(3), 1), stored(Some(1), 1), stored(Some(2), 1)];
        sort_and_limit(&mut items, SortOrder::Ascending, 2);

        let keys: Vec<_> = items.iter().map(sort_key).collect();
        assert_eq!(keys, vec![day(1), day(2)]);
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let mut items = vec![stored(Some(3), 1)];
        sort_and_limit(&mut items, SortOrder::Ascending, 0);
        assert!(items.is_empty());
    }
}
