//! HTTP API module for the Tax Regime Engine.
//!
//! This module provides the REST endpoints for comparing the two regimes,
//! producing the printable report and inspecting the loaded rules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MAX_AMOUNT, MAX_DEDUCTION, MAX_TRANSPORT_ALLOWANCE, TaxInputsRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
