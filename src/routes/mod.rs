use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::{ServiceError, ServiceResult};

pub mod products;

/// Message returned for every failure that is not the client's fault.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please contact the administrator.";

/// Uniform JSON wrapper around every response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    /// Mirrors the HTTP status code.
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Build a response carrying `data` inside the envelope.
pub fn respond<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    data: T,
) -> HttpResponse {
    HttpResponse::build(status).json(Envelope {
        status: status.as_u16(),
        message: message.into(),
        data: Some(data),
    })
}

/// Build an envelope response without a data payload.
pub fn acknowledge(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(Envelope::<()> {
        status: status.as_u16(),
        message: message.into(),
        data: None,
    })
}

/// Map a failed service call onto its envelope; `action` names the operation in logs.
pub fn service_error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Form(message) => acknowledge(
            StatusCode::BAD_REQUEST,
            format!("Invalid request payload: {message}"),
        ),
        ServiceError::NotFound => acknowledge(StatusCode::NOT_FOUND, "Product not found."),
        ServiceError::PasswordMismatch => {
            acknowledge(StatusCode::BAD_REQUEST, "Password does not match.")
        }
        err => {
            log::error!("Failed to {action}: {err}");
            acknowledge(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE)
        }
    }
}

/// Run a synchronous service call on the blocking thread pool.
pub async fn run_blocking<T, F>(call: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(call)
        .await
        .map_err(|err| ServiceError::Internal(err.to_string()))?
}

/// JSON extractor settings answering malformed bodies with the 400 envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = acknowledge(
            StatusCode::BAD_REQUEST,
            format!("Invalid request payload: {err}"),
        );
        InternalError::from_response(err, response).into()
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    acknowledge(StatusCode::NOT_FOUND, "Resource not found.")
}

/// Register the product routes and their extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(products::add_product)
        .service(products::show_products)
        .service(products::show_product)
        .service(products::replace_product)
        .service(products::remove_product);
}
