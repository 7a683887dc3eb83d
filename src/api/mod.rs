//! HTTP API module for the tool rental engine.
//!
//! This module exposes checkout over HTTP. The handlers do no arithmetic of
//! their own; they decode the request, run a [`crate::checkout::Checkout`]
//! against the shared catalog, and map errors to JSON bodies.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{CheckoutResponse, create_router};
pub use request::CheckoutPayload;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
