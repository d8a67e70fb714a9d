use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::DocumentStore;

/// Shared by every handler through `web::Data`.
#[derive(Debug)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub database_url_set: bool,
    pub database_name_set: bool,
    /// Serializes seeding within this process.
    pub seed_lock: Mutex<()>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, database_url_set: bool, database_name_set: bool) -> Self {
        Self {
            store,
            database_url_set,
            database_name_set,
            seed_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
