//! API handlers organized by resource type.
//!
//! Helper functions for error conversion are defined here and shared across
//! modules.

mod messages;

pub use messages::*;

use crate::application::repos::RepoError;
use crate::infra::http::api::error::ApiError;

pub(crate) fn repo_to_api(err: RepoError) -> ApiError {
    match err {
        RepoError::NotFound => ApiError::not_found(),
        other => ApiError::internal(other.to_string()),
    }
}
