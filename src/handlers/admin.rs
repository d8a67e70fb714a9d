use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::seed;
use crate::state::AppState;
use crate::store::Collection;

/// One count per collection, each taken independently.
pub async fn stats(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    let mut counts = BTreeMap::new();
    for collection in Collection::ALL {
        let count = state
            .store()
            .count(collection)
            .await
            .map_err(AppError::from)?;
        counts.insert(collection.stats_key(), count);
    }

    Ok(HttpResponse::Ok().json(counts))
}

pub async fn seed_departments(state: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    let _guard = state.seed_lock.lock().await;
    let outcome = seed::seed_departments(state.store())
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(outcome))
}
