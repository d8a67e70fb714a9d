use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::errors::truncate;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "Government Services Portal API";

#[derive(Serialize)]
struct Diagnostics {
    backend: &'static str,
    database: String,
    database_url: &'static str,
    database_name: &'static str,
    store_name: String,
    connection_status: &'static str,
    collections: Vec<String>,
}

fn set_or_not(set: bool) -> &'static str {
    if set {
        "set"
    } else {
        "not set"
    }
}

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
    }))
}

/// Probes the store. Store failures are reported in the body, never as an error status.
pub async fn diagnostics(state: web::Data<AppState>) -> HttpResponse {
    let mut report = Diagnostics {
        backend: "Running",
        database: "Not Available".to_string(),
        database_url: set_or_not(state.database_url_set),
        database_name: set_or_not(state.database_name_set),
        store_name: state.store().database_name().to_string(),
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    match state.store().collection_names().await {
        Ok(collections) => {
            report.database = "Connected & Working".to_string();
            report.connection_status = "Connected";
            report.collections = collections;
        }
        Err(err) => {
            log::warn!("store probe failed: {}", err);
            report.database = format!("Error: {}", truncate(&err.to_string(), 80));
        }
    }

    HttpResponse::Ok().json(report)
}
