//! Defines the HTTP route for the tee-time listing.

use crate::api::tee_time::handlers::list_tee_times;
use axum::{Router, routing::get};

/// Creates the tee-time router
pub fn tee_time_router() -> Router {
    Router::new().route("/tee-times", get(list_tee_times))
}
