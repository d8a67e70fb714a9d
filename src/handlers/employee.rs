use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::AppError;
use crate::handlers::CreatedResponse;
use crate::models::employee::Employee;
use crate::state::AppState;
use crate::store::{create_document, Collection};

pub async fn create_employee(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = Employee::from_payload(&payload).map_err(AppError::from)?;

    let id = create_document(state.store(), Collection::Employee, &employee)
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}
