use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::error::ApiError;
use crate::middleware::{ValidatedJson, ValidatedQuery};
use crate::models::tax_profile::{
    TaxProfile, TaxProfileCreate, TaxProfilePaginationQuery, TaxProfileUpdate,
};
use crate::models::Paginated;
use crate::services::TaxProfileService;
use crate::AppState;

/// GET /tax-profiles
pub async fn get_all_tax_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaxProfile>>, ApiError> {
    let profiles = TaxProfileService::new(state.pool.clone())
        .get_all_tax_profiles()
        .await?;
    Ok(Json(profiles))
}

/// GET /tax-profiles/paginated
pub async fn get_tax_profiles_paginated(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TaxProfilePaginationQuery>,
) -> Result<Json<Paginated<TaxProfile>>, ApiError> {
    let page = TaxProfileService::new(state.pool.clone())
        .get_tax_profiles_paginated(query)
        .await?;
    Ok(Json(page))
}

/// GET /tax-profiles/:id
pub async fn get_tax_profile_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaxProfile>, ApiError> {
    let id = parse_id(&id)?;
    let profile = TaxProfileService::new(state.pool.clone())
        .get_tax_profile_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tax profile not found"))?;
    Ok(Json(profile))
}

/// POST /tax-profiles/create
pub async fn create_tax_profile(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<TaxProfileCreate>,
) -> Result<(StatusCode, Json<TaxProfile>), ApiError> {
    let profile = TaxProfileService::new(state.pool.clone())
        .create_tax_profile(data)
        .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /tax-profiles/:id
pub async fn update_tax_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<TaxProfileUpdate>,
) -> Result<Json<TaxProfile>, ApiError> {
    let id = parse_id(&id)?;
    let profile = TaxProfileService::new(state.pool.clone())
        .update_tax_profile(id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("Tax profile not found"))?;
    Ok(Json(profile))
}

/// DELETE /tax-profiles/:id
pub async fn delete_tax_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaxProfile>, ApiError> {
    let id = parse_id(&id)?;
    let profile = TaxProfileService::new(state.pool.clone())
        .delete_tax_profile(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tax profile not found"))?;
    Ok(Json(profile))
}
