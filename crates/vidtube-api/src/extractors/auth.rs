//! Authentication extractor
//!
//! The Authorization header carries the bare session token, no scheme
//! prefix. The extractor only pulls the header out; whether the token is
//! known, and whether it owns the targeted resource, is decided per route
//! against the user service.

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};

use crate::response::ApiError;

/// Raw token from the Authorization header
#[derive(Debug, Clone)]
pub struct AuthToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingAuth)?;

        Ok(AuthToken(token.to_string()))
    }
}
