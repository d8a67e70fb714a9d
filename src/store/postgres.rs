use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::{Collection, DocumentStore, Filter, RawDocument, StoreError, StoreResult};

const CREATE_DOCUMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        seq BIGSERIAL,
        id UUID PRIMARY KEY,
        collection TEXT NOT NULL,
        body JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )
"#;

const CREATE_COLLECTION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_seq_idx ON documents (collection, seq)";

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Map<String, Value>>,
    created_at: DateTime<Utc>,
}

/// Document store on a single PostgreSQL JSONB table.
#[derive(Debug)]
pub struct PgDocumentStore {
    pool: PgPool,
    database: String,
    schema: OnceCell<()>,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, database: String) -> Self {
        Self {
            pool,
            database,
            schema: OnceCell::new(),
        }
    }

    async fn ready(&self, map_err: fn(sqlx::Error) -> StoreError) -> StoreResult<()> {
        self.schema
            .get_or_try_init(|| async {
                sqlx::query(CREATE_DOCUMENTS_TABLE)
                    .execute(&self.pool)
                    .await
                    .map_err(map_err)?;
                sqlx::query(CREATE_COLLECTION_INDEX)
                    .execute(&self.pool)
                    .await
                    .map_err(map_err)?;
                log::info!("documents table ready in {}", self.database);
                Ok::<(), StoreError>(())
            })
            .await
            .map(|_| ())
    }
}

/// SQLSTATE prefixes meaning the server could not be reached or refused the session:
/// connection exceptions, authorization, unknown catalog, resources, operator shutdown.
const UNAVAILABLE_SQLSTATES: [&str; 5] = ["08", "28", "3D", "53", "57P0"];

fn is_connection_error(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Configuration(_) => true,
        sqlx::Error::Database(db) => db.code().map_or(false, |code| {
            UNAVAILABLE_SQLSTATES
                .iter()
                .any(|prefix| code.starts_with(prefix))
        }),
        _ => false,
    }
}

fn is_undefined_table(err: &sqlx::Error) -> bool {
    matches!(
        err.as_database_error().and_then(|db| db.code()).as_deref(),
        Some("42P01")
    )
}

fn map_read_error(err: sqlx::Error) -> StoreError {
    if is_connection_error(&err) {
        StoreError::Unavailable(err.to_string())
    } else {
        StoreError::Read(err.to_string())
    }
}

fn map_write_error(err: sqlx::Error) -> StoreError {
    if is_connection_error(&err) {
        StoreError::Unavailable(err.to_string())
    } else {
        StoreError::Write(err.to_string())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: Collection, body: Map<String, Value>) -> StoreResult<Uuid> {
        self.ready(map_write_error).await?;

        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO documents (id, collection, body, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(collection.as_str())
        .bind(Json(body))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(id)
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> StoreResult<Vec<RawDocument>> {
        self.ready(map_read_error).await?;

        // `{}` is contained in every document.
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body, created_at FROM documents WHERE collection = $1 AND body @> $2 ORDER BY seq",
        )
        .bind(collection.as_str())
        .bind(Json(filter.to_json()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(rows
            .into_iter()
            .map(|row| RawDocument {
                id: row.id,
                created_at: row.created_at,
                body: row.body.0,
            })
            // containment also accepts array supersets; keep equality semantics
            .filter(|doc| filter.matches(&doc.body))
            .collect())
    }

    async fn count(&self, collection: Collection) -> StoreResult<u64> {
        self.ready(map_read_error).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(count.max(0) as u64)
    }

    /// Read-only: never creates the table, a missing table reads as no collections.
    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        match sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .fetch_all(&self.pool)
            .await
        {
            Ok(names) => Ok(names),
            Err(err) if is_undefined_table(&err) => Ok(Vec::new()),
            Err(err) => Err(map_read_error(err)),
        }
    }

    fn database_name(&self) -> &str {
        &self.database
    }
}
