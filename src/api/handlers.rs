//! HTTP request handlers for the tool rental API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::checkout::{Checkout, CheckoutRequest};
use crate::models::Contract;

use super::request::CheckoutPayload;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Successful body of `POST /checkout`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    /// The structured contract.
    pub contract: Contract,
    /// The contract rendered line by line, as it would be printed.
    pub lines: Vec<String>,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .with_state(state)
}

/// Handler for POST /checkout.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutPayload>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let request: CheckoutRequest = match payload {
        Ok(Json(payload)) => payload.into(),
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    match Checkout::from_catalog(state.catalog()).checkout(&request) {
        Ok(contract) => {
            info!(
                correlation_id = %correlation_id,
                tool_code = %contract.tool.code,
                chargeable_days = contract.chargeable_days,
                final_charge = %contract.charges.final_charge,
                duration_us = start_time.elapsed().as_micros(),
                "Checkout completed successfully"
            );
            let lines = contract.lines();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CheckoutResponse { contract, lines }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Checkout rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
