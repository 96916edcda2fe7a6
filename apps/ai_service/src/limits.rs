//! Request size guard.
//!
//! Two layers cooperate: this middleware rejects requests whose declared
//! `Content-Length` is over the limit before any handler runs, and
//! `DefaultBodyLimit` caps bodies that arrive without a declared length.

use axum::{
    extract::{Request, State},
    http::{header::CONTENT_LENGTH, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::AppError;

/// Route-layer middleware. State is the maximum body size in bytes.
pub async fn enforce_content_length(
    State(limit): State<usize>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(declared) = declared_length(request.headers()) {
        if exceeds(declared, limit) {
            warn!(
                declared,
                limit,
                path = %request.uri().path(),
                "Rejecting oversized request"
            );
            return Err(AppError::PayloadTooLarge);
        }
    }

    Ok(next.run(request).await)
}

/// Parses `Content-Length`; a missing or garbled header yields `None`.
pub fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

fn exceeds(declared: u64, limit: usize) -> bool {
    u64::try_from(limit).map_or(false, |limit| declared > limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_length(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_declared_length_parses_header() {
        assert_eq!(declared_length(&headers_with_length("1024")), Some(1024));
    }

    #[test]
    fn test_declared_length_missing_header() {
        assert_eq!(declared_length(&HeaderMap::new()), None);
    }

    #[test]
    fn test_declared_length_garbled_header() {
        assert_eq!(declared_length(&headers_with_length("lots")), None);
        assert_eq!(declared_length(&headers_with_length("-5")), None);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let limit = 16 * 1024 * 1024;
        assert!(!exceeds(limit as u64, limit));
        assert!(exceeds(limit as u64 + 1, limit));
        assert!(!exceeds(0, limit));
    }
}
