mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod routes;
mod seed;
mod state;
mod store;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use crate::config::Config;
use crate::state::AppState;
use crate::store::{DocumentStore, MemoryStore, PgDocumentStore};

fn build_store(config: &Config) -> std::io::Result<Arc<dyn DocumentStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set, documents are kept in memory only");
        return Ok(Arc::new(MemoryStore::new()));
    };

    let pool = db::create_pool(database_url, config.database_name.as_deref())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let database = pool.connect_options().get_database().unwrap_or("postgres").to_string();

    info!("Using PostgreSQL document store, database {}", database);
    Ok(Arc::new(PgDocumentStore::new(pool, database)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    let store = build_store(&config)?;
    let state = web::Data::new(AppState::new(
        store,
        config.database_url.is_some(),
        config.database_name.is_some(),
    ));

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
