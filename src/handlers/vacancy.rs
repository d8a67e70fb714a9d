use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::AppError;
use crate::handlers::{sort_and_limit, CreatedResponse, ListParams, SortOrder};
use crate::models::vacancy::Vacancy;
use crate::state::AppState;
use crate::store::{create_document, get_documents, Collection, Stored};

const DEFAULT_LIMIT: usize = 50;

/// Earliest closing date first.
pub async fn list_vacancies(
    state: web::Data<AppState>,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut items: Vec<Stored<Vacancy>> = get_documents(state.store(), Collection::Vacancy, None)
        .await
        .map_err(AppError::from)?;

    sort_and_limit(&mut items, SortOrder::Ascending, query.limit_or(DEFAULT_LIMIT));

    Ok(HttpResponse::Ok().json(items))
}

pub async fn create_vacancy(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, actix_web::Error> {
    let vacancy = Vacancy::from_payload(&payload).map_err(AppError::from)?;

    let id = create_document(state.store(), Collection::Vacancy, &vacancy)
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}
