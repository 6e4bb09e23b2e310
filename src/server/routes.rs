//! Routes and handlers for the lookup endpoints.

use super::AppState;
use crate::constants::{RCENTRE_ROUTE, SERVICES_ROUTE};
use crate::error::LookupError;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Create the lookup router over a loaded index.
pub fn create_router(index: AppState) -> Router {
    Router::new()
        .route(SERVICES_ROUTE, get(get_services))
        .route(RCENTRE_ROUTE, get(get_reporting_centres))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(index)
}

#[derive(Debug, Deserialize)]
struct ServicesQuery {
    postcode: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CentresQuery {
    service: Option<String>,
}

/// Successful response envelope.
#[derive(Debug, Serialize)]
struct DataResponse<T> {
    data: T,
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Failure surfaced to the HTTP caller
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::Invalid(message) => ApiError::BadRequest(message),
            LookupError::NotFound(message) => ApiError::NotFound(message),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::Internal(message) => message,
        };
        debug!("Request failed with {}: {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Request handler panicked: {}", detail);

    ApiError::Internal("internal server error".to_string()).into_response()
}

/// `GET /getServices`: services by postcode.
async fn get_services(
    State(index): State<AppState>,
    query: Result<Query<ServicesQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let answer = index.services_by_postcode(query.postcode.as_deref())?;
    Ok(Json(DataResponse { data: answer }).into_response())
}

/// `GET /getRCentre`: reporting centres by service.
async fn get_reporting_centres(
    State(index): State<AppState>,
    query: Result<Query<CentresQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let answer = index.centres_by_service(query.service.as_deref())?;
    Ok(Json(DataResponse { data: answer }).into_response())
}
