use crate::application::error::ErrorReport;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub mod titles {
    pub const INVALID_REQUEST_CONTENT: &str = "Invalid Request Content";
    pub const NOT_FOUND: &str = "Not Found";
    pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
}

/// JSON body for 4xx/5xx responses that carry one.
///
/// `errors` is only present on validation failures and holds the flattened
/// `field: message` list.
#[derive(Debug, Serialize)]
pub struct ProblemBody {
    pub status: u16,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    title: &'static str,
    detail: Option<String>,
    errors: Option<String>,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        title: &'static str,
        detail: Option<String>,
        errors: Option<String>,
    ) -> Self {
        Self {
            status,
            title,
            detail,
            errors,
        }
    }

    /// Rejected request payload. The body names every failed field check.
    pub fn validation(errors: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            titles::INVALID_REQUEST_CONTENT,
            Some("Validation failed".to_string()),
            Some(errors.into()),
        )
    }

    /// Missing resource. Responds with the bare status and no body.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, titles::NOT_FOUND, None, None)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            titles::INTERNAL_SERVER_ERROR,
            Some(detail.into()),
            None,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let diagnostic = match (&self.errors, &self.detail) {
            (Some(errors), _) => format!("{}: {errors}", self.title),
            (None, Some(detail)) => format!("{}: {detail}", self.title),
            (None, None) => self.title.to_string(),
        };

        let mut response = match self.detail {
            Some(detail) => {
                let body = ProblemBody {
                    status: self.status.as_u16(),
                    title: self.title.to_string(),
                    detail,
                    errors: self.errors,
                };
                (self.status, Json(body)).into_response()
            }
            None => self.status.into_response(),
        };

        // Attach a structured report so shared logging middleware can emit rich diagnostics.
        ErrorReport::from_message("infra::http::api", self.status, diagnostic)
            .attach(&mut response);
        response
    }
}
