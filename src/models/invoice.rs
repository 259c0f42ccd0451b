use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use super::{is_decimal, is_rfc3339, is_uuid, pagination};
use crate::error::ApiError;
use crate::middleware::Validate;

/// Invoice lifecycle status. Stored as text; the set is closed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Cancelled,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "DRAFT",
            InvoiceStatus::Sent => "SENT",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Cancelled => "CANCELLED",
            InvoiceStatus::Overdue => "OVERDUE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DRAFT" => Some(InvoiceStatus::Draft),
            "SENT" => Some(InvoiceStatus::Sent),
            "PAID" => Some(InvoiceStatus::Paid),
            "CANCELLED" => Some(InvoiceStatus::Cancelled),
            "OVERDUE" => Some(InvoiceStatus::Overdue),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for InvoiceStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        InvoiceStatus::parse(&value).ok_or_else(|| format!("unknown invoice status: {}", value))
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub number: String,
    #[sqlx(try_from = "String")]
    pub status: InvoiceStatus,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub subtotal: BigDecimal,
    pub tax_amount: BigDecimal,
    pub total: BigDecimal,
    pub description: Option<String>,
    pub tax_profile_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Amounts and dates arrive as strings and are validated for shape
/// here; the repository binds them with SQL casts. Totals are
/// caller-supplied and not recomputed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreate {
    pub number: String,
    pub status: Option<String>,
    pub issue_date: String,
    pub due_date: String,
    pub subtotal: String,
    pub tax_amount: String,
    pub total: String,
    pub description: Option<String>,
    pub tax_profile_id: String,
}

impl Validate for InvoiceCreate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if self.number.is_empty() {
            field_errors.insert("number".to_string(), "number is required".to_string());
        }
        if let Some(status) = &self.status {
            if InvoiceStatus::parse(status).is_none() {
                field_errors.insert(
                    "status".to_string(),
                    "status must be one of DRAFT, SENT, PAID, CANCELLED, OVERDUE".to_string(),
                );
            }
        }
        for (field, value) in [("issueDate", &self.issue_date), ("dueDate", &self.due_date)] {
            if !is_rfc3339(value) {
                field_errors.insert(
                    field.to_string(),
                    format!("{} must be an RFC 3339 timestamp", field),
                );
            }
        }
        for (field, value) in [
            ("subtotal", &self.subtotal),
            ("taxAmount", &self.tax_amount),
            ("total", &self.total),
        ] {
            if !is_decimal(value) {
                field_errors.insert(field.to_string(), format!("{} must be a decimal", field));
            }
        }
        if !is_uuid(&self.tax_profile_id) {
            field_errors.insert(
                "taxProfileId".to_string(),
                "taxProfileId must be a UUID".to_string(),
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
pub struct InvoiceUpdate {
    pub status: Option<String>,
    pub issue_date: Option<String>,
    pub due_date: Option<String>,
    pub subtotal: Option<String>,
    pub tax_amount: Option<String>,
    pub total: Option<String>,
    pub description: Option<String>,
}

impl Validate for InvoiceUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors = HashMap::new();
        if let Some(status) = &self.status {
            if InvoiceStatus::parse(status).is_none() {
                field_errors.insert(
                    "status".to_string(),
                    "status must be one of DRAFT, SENT, PAID, CANCELLED, OVERDUE".to_string(),
                );
            }
        }
        for (field, value) in [
            ("issueDate", &self.issue_date),
            ("dueDate", &self.due_date),
        ] {
            if let Some(v) = value {
                if !is_rfc3339(v) {
                    field_errors.insert(
                        field.to_string(),
                        format!("{} must be an RFC 3339 timestamp", field),
                    );
                }
            }
        }
        for (field, value) in [
            ("subtotal", &self.subtotal),
            ("taxAmount", &self.tax_amount),
            ("total", &self.total),
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
pub struct InvoicePaginationQuery {
    #[serde(default = "pagination::default_skip")]
    pub skip: i64,
    #[serde(default = "pagination::default_take")]
    pub take: i64,
    pub number: Option<String>,
    pub status: Option<String>,
    pub tax_profile_id: Option<String>,
}

impl Validate for InvoicePaginationQuery {
    fn validate(&self) -> Result<(), ApiError> {
        pagination::validate_bounds(self.skip, self.take)?;
        let mut field_errors = HashMap::new();
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            if InvoiceStatus::parse(status).is_none() {
                field_errors.insert(
                    "status".to_string(),
                    "status must be one of DRAFT, SENT, PAID, CANCELLED, OVERDUE".to_string(),
                );
            }
        }
        if let Some(id) = self.tax_profile_id.as_deref().filter(|s| !s.is_empty()) {
            if !is_uuid(id) {
                field_errors.insert(
                    "taxProfileId".to_string(),
                    "taxProfileId must be a UUID".to_string(),
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
