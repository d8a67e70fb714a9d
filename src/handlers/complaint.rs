use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::complaint::Complaint;
use crate::state::AppState;
use crate::store::{create_document, Collection};

#[derive(Serialize)]
struct ComplaintReceipt {
    id: Uuid,
    status: &'static str,
}

pub async fn submit_complaint(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, actix_web::Error> {
    let complaint = Complaint::from_payload(&payload).map_err(AppError::from)?;

    let id = create_document(state.store(), Collection::Complaint, &complaint)
        .await
        .map_err(AppError::from)?;

    log::info!("complaint {} received", id);
    Ok(HttpResponse::Created().json(ComplaintReceipt {
        id,
        status: "received",
    }))
}
