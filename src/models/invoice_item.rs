use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

use super::{is_decimal, is_uuid, pagination};
use crate::error::ApiError;
use crate::middleware::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: Uuid,
    pub description: String,
    pub quantity: BigDecimal,
    pub unit_price: BigDecimal,
    /// Caller-supplied; not recomputed from quantity * unitPrice.
    pub line_total: BigDecimal,
    pub invoice_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemCreate {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
    pub invoice_id: String,
}

impl Validate for InvoiceItemCreate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if self.description.is_empty() {
            field_errors.insert(
                "description".to_string(),
                "description is required".to_string(),
            );
        }
        for (field, value) in [
            ("quantity", &self.quantity),
            ("unitPrice", &self.unit_price),
            ("lineTotal", &self.line_total),
        ] {
            if !is_decimal(value) {
                field_errors.insert(field.to_string(), format!("{} must be a decimal", field));
            }
        }
        if !is_uuid(&self.invoice_id) {
            field_errors.insert(
                "invoiceId".to_string(),
                "invoiceId must be a UUID".to_string(),
            );
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
pub struct InvoiceItemUpdate {
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
}

impl Validate for InvoiceItemUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        for (field, value) in [
            ("quantity", &self.quantity),
            ("unitPrice", &self.unit_price),
        ] {
            if let Some(v) = value {
                if !is_decimal(v) {
                    field_errors.insert(field.to_string(), format!("{} must be a decimal", field));
                }
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
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemPaginationQuery {
    #[serde(default = "pagination::default_skip")]
    pub skip: i64,
    #[serde(default = "pagination::default_take")]
    pub take: i64,
    pub description: Option<String>,
    pub invoice_id: Option<String>,
}

impl Validate for InvoiceItemPaginationQuery {
    fn validate(&self) -> Result<(), ApiError> {
        pagination::validate_bounds(self.skip, self.take)?;
        if let Some(id) = self.invoice_id.as_deref().filter(|s| !s.is_empty()) {
            if !is_uuid(id) {
                let mut field_errors = HashMap::new();
                field_errors.insert(
                    "invoiceId".to_string(),
                    "invoiceId must be a UUID".to_string(),
                );
                return Err(ApiError::validation("Validation failed", field_errors));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_non_decimal_amounts() {
        let dto = InvoiceItemCreate {
            description: "Consulting".to_string(),
            quantity: "three".to_string(),
            unit_price: "50.00".to_string(),
            line_total: "150.00".to_string(),
            invoice_id: Uuid::new_v4().to_string(),
        };
        match dto.validate().unwrap_err() {
            ApiError::Validation { field_errors, .. } => {
                assert!(field_errors.contains_key("quantity"));
                assert!(!field_errors.contains_key("unitPrice"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_line_total_is_accepted() {
        // Totals are caller-supplied; the system does not recompute them.
        let dto = InvoiceItemCreate {
            description: "Consulting".to_string(),
            quantity: "3".to_string(),
            unit_price: "50.00".to_string(),
            line_total: "999.99".to_string(),
            invoice_id: Uuid::new_v4().to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
