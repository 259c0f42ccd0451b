use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Domain-level validation on top of serde's shape checks. Implementors
/// return a 400 with per-field messages on failure.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// JSON body gate: deserialize, then validate. The handler never runs on
/// failure.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
            })?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query-string gate; same contract as [`ValidatedJson`] but for
/// `?skip=0&take=10`-style input.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::bad_request(format!("Invalid query string: {}", rejection.body_text()))
            })?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}
