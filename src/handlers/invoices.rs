use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::error::ApiError;
use crate::middleware::{ValidatedJson, ValidatedQuery};
use crate::models::invoice::{Invoice, InvoiceCreate, InvoicePaginationQuery, InvoiceUpdate};
use crate::models::Paginated;
use crate::services::InvoiceService;
use crate::AppState;

/// GET /invoices
pub async fn get_all_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    let invoices = InvoiceService::new(state.pool.clone())
        .get_all_invoices()
        .await?;
    Ok(Json(invoices))
}

/// GET /invoices/paginated
pub async fn get_invoices_paginated(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<InvoicePaginationQuery>,
) -> Result<Json<Paginated<Invoice>>, ApiError> {
    let page = InvoiceService::new(state.pool.clone())
        .get_invoices_paginated(query)
        .await?;
    Ok(Json(page))
}

/// GET /invoices/:id
pub async fn get_invoice_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, ApiError> {
    let id = parse_id(&id)?;
    let invoice = InvoiceService::new(state.pool.clone())
        .get_invoice_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice not found"))?;
    Ok(Json(invoice))
}

/// POST /invoices/create
pub async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<InvoiceCreate>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    let invoice = InvoiceService::new(state.pool.clone())
        .create_invoice(data)
        .await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// PUT /invoices/:id
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<InvoiceUpdate>,
) -> Result<Json<Invoice>, ApiError> {
    let id = parse_id(&id)?;
    let invoice = InvoiceService::new(state.pool.clone())
        .update_invoice(id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice not found"))?;
    Ok(Json(invoice))
}

/// DELETE /invoices/:id
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, ApiError> {
    let id = parse_id(&id)?;
    let invoice = InvoiceService::new(state.pool.clone())
        .delete_invoice(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice not found"))?;
    Ok(Json(invoice))
}
