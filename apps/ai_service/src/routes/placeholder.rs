//! Placeholder endpoints for the resume and job-matching AI features.
//!
//! Each handler accepts any body, discards it, and answers with a fixed
//! `{message, status: "placeholder"}` payload.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

pub const PLACEHOLDER_STATUS: &str = "placeholder";

pub const PARSE_RESUME_MESSAGE: &str = "Parse resume endpoint - to be implemented";
pub const MATCH_JOBS_MESSAGE: &str = "Match jobs endpoint - to be implemented";
pub const EXTRACT_SKILLS_MESSAGE: &str = "Extract skills endpoint - to be implemented";
pub const ANALYZE_JOB_DESCRIPTION_MESSAGE: &str =
    "Analyze job description endpoint - to be implemented";

#[derive(Debug, Serialize)]
pub struct PlaceholderResponse {
    pub message: &'static str,
    pub status: &'static str,
}

impl PlaceholderResponse {
    fn new(message: &'static str) -> Self {
        PlaceholderResponse {
            message,
            status: PLACEHOLDER_STATUS,
        }
    }
}

/// Reads the request body under `DefaultBodyLimit` and drops it.
/// Content type and encoding are never inspected.
#[derive(Debug)]
pub struct DiscardedBody;

#[async_trait]
impl<S> FromRequest<S> for DiscardedBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => {
                debug!("Discarding {} byte placeholder request body", bytes.len());
                Ok(DiscardedBody)
            }
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(AppError::PayloadTooLarge)
            }
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// POST /api/parse-resume
pub async fn handle_parse_resume(_body: DiscardedBody) -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::new(PARSE_RESUME_MESSAGE))
}

/// POST /api/match-jobs
pub async fn handle_match_jobs(_body: DiscardedBody) -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::new(MATCH_JOBS_MESSAGE))
}

/// POST /api/extract-skills
pub async fn handle_extract_skills(_body: DiscardedBody) -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::new(EXTRACT_SKILLS_MESSAGE))
}

/// POST /api/analyze-job-description
pub async fn handle_analyze_job_description(_body: DiscardedBody) -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::new(ANALYZE_JOB_DESCRIPTION_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_response_serializes_message_and_status() {
        let value = serde_json::to_value(PlaceholderResponse::new(MATCH_JOBS_MESSAGE)).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Match jobs endpoint - to be implemented",
                "status": "placeholder"
            })
        );
    }

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            PARSE_RESUME_MESSAGE,
            MATCH_JOBS_MESSAGE,
            EXTRACT_SKILLS_MESSAGE,
            ANALYZE_JOB_DESCRIPTION_MESSAGE,
        ];
        for (i, a) in messages.iter().enumerate() {
            assert!(a.ends_with("- to be implemented"));
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
