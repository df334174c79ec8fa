use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::domain::entities::MessageRecord;

/// A request field that failed validation. Displays as `field: message`, the
/// format the error body's `errors` string is built from.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn blank(field: &'static str) -> Self {
        Self {
            field,
            message: "must not be blank",
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateMessageRequest {
    pub content: Option<String>,
}

impl CreateMessageRequest {
    /// Checks the payload before it reaches the service layer. A missing
    /// field and a whitespace-only one are rejected the same way.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        match self.content.as_deref() {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(ValidationError::blank("content")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub content: String,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<MessageRecord> for MessageResponse {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.id,
            content: record.content,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_content_with_surrounding_whitespace() {
        let request = CreateMessageRequest {
            content: Some("  hello  ".to_string()),
        };

        assert_eq!(request.validate().expect("valid content"), "  hello  ");
    }

    #[test]
    fn rejects_whitespace_only_content() {
        let request = CreateMessageRequest {
            content: Some(" \t\n".to_string()),
        };

        assert_eq!(request.validate(), Err(ValidationError::blank("content")));
    }

    #[test]
    fn rejects_missing_content() {
        let request = CreateMessageRequest { content: None };

        assert_eq!(request.validate(), Err(ValidationError::blank("content")));
    }

    #[test]
    fn validation_error_displays_as_field_and_message() {
        let err = ValidationError::blank("content");

        assert_eq!(err.to_string(), "content: must not be blank");
    }
}
