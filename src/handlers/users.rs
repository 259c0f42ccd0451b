use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::error::ApiError;
use crate::middleware::{ValidatedJson, ValidatedQuery};
use crate::models::user::{
    LoginRequest, LoginResponse, User, UserCreate, UserPaginationQuery, UserUpdate,
};
use crate::models::{is_valid_email, Paginated};
use crate::services::UserService;
use crate::AppState;

/// GET /users
pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserService::new(state.pool.clone()).get_all_users().await?;
    Ok(Json(users))
}

/// GET /users/paginated
pub async fn get_users_paginated(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UserPaginationQuery>,
) -> Result<Json<Paginated<User>>, ApiError> {
    let page = UserService::new(state.pool.clone())
        .get_users_paginated(query)
        .await?;
    Ok(Json(page))
}

/// GET /users/:id
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    let user = UserService::new(state.pool.clone())
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user))
}

/// GET /users/email/:email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    if !is_valid_email(&email) {
        return Err(ApiError::bad_request("Invalid email"));
    }
    let user = UserService::new(state.pool.clone())
        .get_user_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user))
}

/// POST /users/create
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<UserCreate>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = UserService::new(state.pool.clone()).create_user(data).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = UserService::new(state.pool.clone())
        .login(&data.email, &data.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;
    Ok(Json(result))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<UserUpdate>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    let user = UserService::new(state.pool.clone())
        .update_user(id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    let user = UserService::new(state.pool.clone())
        .delete_user(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user))
}
