pub mod memory;
pub mod postgres;

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Department,
    News,
    Event,
    Vacancy,
    Employee,
    Complaint,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Department,
        Collection::News,
        Collection::Event,
        Collection::Vacancy,
        Collection::Employee,
        Collection::Complaint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Department => "department",
            Collection::News => "news",
            Collection::Event => "event",
            Collection::Vacancy => "vacancy",
            Collection::Employee => "employee",
            Collection::Complaint => "complaint",
        }
    }

    pub fn stats_key(&self) -> &'static str {
        match self {
            Collection::Department => "departments",
            Collection::News => "news",
            Collection::Event => "events",
            Collection::Vacancy => "vacancies",
            Collection::Employee => "employees",
            Collection::Complaint => "complaints",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Write rejected: {0}")]
    Write(String),
    #[error("Read failed: {0}")]
    Read(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Exact-match conditions on top-level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(BTreeMap<String, Value>);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn matches(&self, body: &Map<String, Value>) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| body.get(field) == Some(expected))
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone().into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub body: Map<String, Value>,
}

#[async_trait]
pub trait DocumentStore: Send + Sync + fmt::Debug {
    /// Appends `body` to `collection`, assigning its id and creation timestamp.
    async fn insert(&self, collection: Collection, body: Map<String, Value>) -> StoreResult<Uuid>;

    /// Insertion order.
    async fn find(&self, collection: Collection, filter: &Filter) -> StoreResult<Vec<RawDocument>>;

    async fn count(&self, collection: Collection) -> StoreResult<u64>;

    async fn collection_names(&self) -> StoreResult<Vec<String>>;

    fn database_name(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stored<T> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: T,
}

pub async fn create_document<T: Serialize>(
    store: &dyn DocumentStore,
    collection: Collection,
    record: &T,
) -> StoreResult<Uuid> {
    let body = match serde_json::to_value(record)? {
        Value::Object(body) => body,
        other => {
            return Err(StoreError::Serialization(format!(
                "expected an object for {}, got {}",
                collection, other
            )))
        }
    };

    store.insert(collection, body).await
}

pub async fn get_documents<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: Collection,
    filter: Option<&Filter>,
) -> StoreResult<Vec<Stored<T>>> {
    let empty = Filter::new();
    let documents = store.find(collection, filter.unwrap_or(&empty)).await?;

    documents
        .into_iter()
        .map(|doc| {
            Ok(Stored {
                id: doc.id,
                created_at: doc.created_at,
                record: serde_json::from_value(Value::Object(doc.body))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Note {
        title: String,
        tag: Option<String>,
    }

    #[test]
    fn filter_matches_only_exact_values() {
        let body = json!({ "name": "Health", "phone": "123" });
        let body = body.as_object().unwrap();

        assert!(Filter::new().matches(body));
        assert!(Filter::new().eq("name", "Health").matches(body));
        assert!(!Filter::new().eq("name", "health").matches(body));
        assert!(!Filter::new().eq("name", "Health").eq("email", "x").matches(body));
    }

    #[test]
    fn collection_names_are_stable() {
        let names: Vec<_> = Collection::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["department", "news", "event", "vacancy", "employee", "complaint"]
        );
        assert_eq!(Collection::Vacancy.stats_key(), "vacancies");
    }

    #[tokio::test]
    async fn create_then_get_round_trips_typed_records() {
        let store = MemoryStore::new();
        let note = Note { title: "Roads".into(), tag: None };

        let id = create_document(&store, Collection::News, &note).await.unwrap();
        let stored: Vec<Stored<Note>> = get_documents(&store, Collection::News, None).await.unwrap();

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].record, note);
    }

    #[tokio::test]
    async fn create_rejects_non_object_records() {
        let store = MemoryStore::new();
        let err = create_document(&store, Collection::News, &"plain").await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn stored_serializes_flat() {
        let stored = Stored {
            id: Uuid::nil(),
            created_at: DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
            record: Note { title: "A".into(), tag: Some("b".into()) },
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["title"], "A");
        assert_eq!(value["id"], Uuid::nil().to_string());
        assert!(value.get("record").is_none());
    }
}
