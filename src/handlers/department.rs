use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::AppError;
use crate::handlers::CreatedResponse;
use crate::models::department::Department;
use crate::state::AppState;
use crate::store::{create_document, get_documents, Collection, Filter, Stored};

pub async fn list_departments(
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let departments: Vec<Stored<Department>> =
        get_documents(state.store(), Collection::Department, None)
            .await
            .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(departments))
}

/// Exact name match. Duplicate names resolve to the first one stored.
pub async fn get_department(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let filter = Filter::new().eq("name", name.into_inner());
    let department = get_documents::<Department>(state.store(), Collection::Department, Some(&filter))
        .await
        .map_err(AppError::from)?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

    Ok(HttpResponse::Ok().json(department))
}

pub async fn create_department(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, actix_web::Error> {
    let department = Department::from_payload(&payload).map_err(AppError::from)?;

    let id = create_document(state.store(), Collection::Department, &department)
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}
