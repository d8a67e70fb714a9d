use std::collections::BTreeMap;
use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use validator::ValidationErrors;

use crate::store::StoreError;

const MAX_MESSAGE_LEN: usize = 120;

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound(String),
    StoreUnavailable(String),
    WriteError(String),
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<&'static str, Vec<String>>>,
}

/// Cuts `message` to at most `max` characters.
pub fn truncate(message: &str, max: usize) -> String {
    match message.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &message[..end]),
        None => message.to_string(),
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation Error: {}", errors),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::StoreUnavailable(msg) => write!(f, "Store Unavailable: {}", msg),
            AppError::WriteError(msg) => write!(f, "Write Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        log::error!("document store failure: {}", err);
        match err {
            StoreError::Unavailable(msg) => AppError::StoreUnavailable(msg),
            StoreError::Write(msg) => AppError::WriteError(msg),
            StoreError::Read(msg) | StoreError::Serialization(msg) => {
                AppError::InternalServerError(msg)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::WriteError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(errors) => ErrorResponse {
                error: "Validation failed".to_string(),
                fields: Some(
                    errors
                        .field_errors()
                        .into_iter()
                        .map(|(field, errs)| {
                            (field, errs.iter().map(|e| e.code.to_string()).collect())
                        })
                        .collect(),
                ),
            },
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::StoreUnavailable(msg)
            | AppError::WriteError(msg)
            | AppError::InternalServerError(msg) => ErrorResponse {
                error: truncate(msg, MAX_MESSAGE_LEN),
                fields: None,
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::ValidationError;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }

    #[test]
    fn store_errors_map_to_server_statuses() {
        let unavailable: AppError = StoreError::Unavailable("refused".into()).into();
        let write: AppError = StoreError::Write("rejected".into()).into();

        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(write.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn long_messages_are_truncated() {
        let err = AppError::WriteError("x".repeat(500));
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"].as_str().unwrap().len(), MAX_MESSAGE_LEN + 3);
    }

    #[actix_web::test]
    async fn validation_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("required"));
        errors.add("email", ValidationError::new("type"));

        let response = AppError::from(errors).error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["fields"]["name"][0], "required");
        assert_eq!(json["fields"]["email"][0], "type");
    }
}
