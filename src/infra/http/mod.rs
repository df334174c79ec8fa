//! HTTP surface for the service.
//!
//! The public API router lives in [`api`] and serves the JSON message
//! endpoints. Operational routes (health probes) live on a separate router so
//! that API state stays constructible without a database in tests.

pub mod api;
mod middleware;

pub use api::{ApiState, build_api_router};

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware as axum_middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use sqlx::Error as SqlxError;

use crate::application::error::ErrorReport;
use crate::infra::db::PostgresRepositories;
use crate::infra::http::middleware::{log_responses, set_request_context};

/// Builds the operational router exposing the database health probe.
pub fn build_ops_router(db: Arc<PostgresRepositories>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .with_state(db)
        .layer(axum_middleware::from_fn(log_responses))
        .layer(axum_middleware::from_fn(set_request_context))
}

async fn healthz(State(db): State<Arc<PostgresRepositories>>) -> Response {
    db_health_response(db.health_check().await)
}

fn db_health_response(result: Result<(), SqlxError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let mut response = StatusCode::SERVICE_UNAVAILABLE.into_response();
            ErrorReport::from_error(
                "infra::http::db_health",
                StatusCode::SERVICE_UNAVAILABLE,
                &err,
            )
            .attach(&mut response);
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_database_maps_to_no_content() {
        let response = db_health_response(Ok(()));
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn failed_probe_maps_to_service_unavailable_with_report() {
        let response = db_health_response(Err(SqlxError::PoolTimedOut));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.extensions().get::<ErrorReport>().is_some());
    }
}
