use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

use super::{is_uuid, pagination};
use crate::error::ApiError;
use crate::middleware::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TaxProfile {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxProfileCreate {
    pub name: String,
    pub tax_id: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub user_id: String,
}

impl Validate for TaxProfileCreate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        for (field, value) in [
            ("name", &self.name),
            ("taxId", &self.tax_id),
            ("address", &self.address),
            ("city", &self.city),
            ("postalCode", &self.postal_code),
        ] {
            if value.is_empty() {
                field_errors.insert(field.to_string(), format!("{} is required", field));
            }
        }
        if !is_uuid(&self.user_id) {
            field_errors.insert("userId".to_string(), "userId must be a UUID".to_string());
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
pub struct TaxProfileUpdate {
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl Validate for TaxProfileUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxProfilePaginationQuery {
    #[serde(default = "pagination::default_skip")]
    pub skip: i64,
    #[serde(default = "pagination::default_take")]
    pub take: i64,
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl Validate for TaxProfilePaginationQuery {
    fn validate(&self) -> Result<(), ApiError> {
        pagination::validate_bounds(self.skip, self.take)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_a_valid_user_id() {
        let dto = TaxProfileCreate {
            name: "Rossi SRL".to_string(),
            tax_id: "IT12345678901".to_string(),
            address: "Via Roma 1".to_string(),
            city: "Roma".to_string(),
            postal_code: "00100".to_string(),
            user_id: "not-a-uuid".to_string(),
        };
        match dto.validate().unwrap_err() {
            ApiError::Validation { field_errors, .. } => {
                assert_eq!(field_errors.len(), 1);
                assert!(field_errors.contains_key("userId"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn create_reports_every_missing_field() {
        let dto = TaxProfileCreate {
            name: String::new(),
            tax_id: String::new(),
            address: "Via Roma 1".to_string(),
            city: "Roma".to_string(),
            postal_code: String::new(),
            user_id: Uuid::new_v4().to_string(),
        };
        match dto.validate().unwrap_err() {
            ApiError::Validation { field_errors, .. } => {
                assert!(field_errors.contains_key("name"));
                assert!(field_errors.contains_key("taxId"));
                assert!(field_errors.contains_key("postalCode"));
                assert!(!field_errors.contains_key("address"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
