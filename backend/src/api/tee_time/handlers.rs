//! Handler functions for the tee-time listing API endpoint.

use crate::api::common::{ErrorBody, service_error_to_http};
use crate::api::tee_time::models::{TeeTimeQuery, TeeTimeResponse};
use crate::repositories::tee_time_repository::TeeTimeRepository;
use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// List scheduled tee times, optionally restricted to a single date
#[axum::debug_handler]
pub async fn list_tee_times(
    Extension(pool): Extension<SqlitePool>,
    Query(query): Query<TeeTimeQuery>,
) -> Result<ResponseJson<Vec<TeeTimeResponse>>, (StatusCode, ResponseJson<ErrorBody>)> {
    let repo = TeeTimeRepository::new(&pool);

    match repo.list_tee_times(query.date).await {
        Ok(slots) => Ok(ResponseJson(
            slots.into_iter().map(TeeTimeResponse::from).collect(),
        )),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}
