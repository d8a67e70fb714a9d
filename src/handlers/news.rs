use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::Value;

use crate::errors::AppError;
use crate::handlers::{sort_and_limit, CreatedResponse, ListParams, SortOrder};
use crate::models::news::News;
use crate::state::AppState;
use crate::store::{create_document, get_documents, Collection, Stored};

const DEFAULT_LIMIT: usize = 20;

/// Most recent first.
pub async fn list_news(
    state: web::Data<AppState>,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut items: Vec<Stored<News>> = get_documents(state.store(), Collection::News, None)
        .await
        .map_err(AppError::from)?;

    sort_and_limit(&mut items, SortOrder::Descending, query.limit_or(DEFAULT_LIMIT));

    Ok(HttpResponse::Ok().json(items))
}

pub async fn create_news(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut news = News::from_payload(&payload).map_err(AppError::from)?;
    if news.published_at.is_none() {
        news.published_at = Some(Utc::now());
    }

    let id = create_document(state.store(), Collection::News, &news)
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}
