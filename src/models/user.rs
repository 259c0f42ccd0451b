use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

use super::{is_valid_email, pagination};
use crate::error::ApiError;
use crate::middleware::Validate;

/// The stored password hash never serializes into responses.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if !is_valid_email(&self.email) {
            field_errors.insert("email".to_string(), "Invalid email format".to_string());
        }
        if self.password.len() < 6 {
            field_errors.insert(
                "password".to_string(),
                "Password must be at least 6 characters".to_string(),
            );
        }
        if self.first_name.is_empty() {
            field_errors.insert("firstName".to_string(), "firstName is required".to_string());
        }
        if self.last_name.is_empty() {
            field_errors.insert("lastName".to_string(), "lastName is required".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation("Validation failed", field_errors))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                field_errors.insert("email".to_string(), "Invalid email format".to_string());
            }
        }
        if let Some(password) = &self.password {
            if password.len() < 6 {
                field_errors.insert(
                    "password".to_string(),
                    "Password must be at least 6 characters".to_string(),
                );
            }
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation("Validation failed", field_errors))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if !is_valid_email(&self.email) {
            field_errors.insert("email".to_string(), "Invalid email format".to_string());
        }
        if self.password.is_empty() {
            field_errors.insert("password".to_string(), "password is required".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation("Validation failed", field_errors))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPaginationQuery {
    #[serde(default = "pagination::default_skip")]
    pub skip: i64,
    #[serde(default = "pagination::default_take")]
    pub take: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Validate for UserPaginationQuery {
    fn validate(&self) -> Result<(), ApiError> {
        pagination::validate_bounds(self.skip, self.take)
    }
}
