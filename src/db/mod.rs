use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Builds the pool without connecting. Connection problems surface on first use.
pub fn create_pool(database_url: &str, database_name: Option<&str>) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(database_url)?;
    if let Some(name) = database_name {
        options = options.database(name);
    }

    Ok(PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy_with(options))
}
