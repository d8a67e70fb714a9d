use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Collection, DocumentStore, Filter, RawDocument, StoreResult};

/// Process-local document store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<RawDocument>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: Collection, body: Map<String, Value>) -> StoreResult<Uuid> {
        let id = Uuid::new_v4();
        let mut collections = self.collections.write().await;

        collections.entry(collection).or_default().push(RawDocument {
            id,
            created_at: Utc::now(),
            body,
        });

        Ok(id)
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> StoreResult<Vec<RawDocument>> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(&doc.body))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count(&self, collection: Collection) -> StoreResult<u64> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(collection, _)| collection.as_str().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn database_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn find_keeps_insertion_order_and_filters() {
        let store = MemoryStore::new();
        let first = store
            .insert(Collection::Department, body(json!({ "name": "Health" })))
            .await
            .unwrap();
        store
            .insert(Collection::Department, body(json!({ "name": "Energy" })))
            .await
            .unwrap();
        let second = store
            .insert(Collection::Department, body(json!({ "name": "Health" })))
            .await
            .unwrap();

        let all = store.find(Collection::Department, &Filter::new()).await.unwrap();
        assert_eq!(all.len(), 3);

        let health = store
            .find(Collection::Department, &Filter::new().eq("name", "Health"))
            .await
            .unwrap();
        let ids: Vec<Uuid> = health.iter().map(|doc| doc.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn empty_collections_read_as_empty() {
        let store = MemoryStore::new();

        assert!(store.find(Collection::News, &Filter::new()).await.unwrap().is_empty());
        assert_eq!(store.count(Collection::News).await.unwrap(), 0);
        assert!(store.collection_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_data() {
        let store = MemoryStore::new();
        let clone = store.clone();
        clone
            .insert(Collection::Complaint, body(json!({ "subject": "Roads" })))
            .await
            .unwrap();
        clone
            .insert(Collection::News, body(json!({ "title": "Budget" })))
            .await
            .unwrap();

        assert_eq!(store.count(Collection::Complaint).await.unwrap(), 1);
        assert_eq!(
            store.collection_names().await.unwrap(),
            vec!["complaint".to_string(), "news".to_string()]
        );
    }
}
