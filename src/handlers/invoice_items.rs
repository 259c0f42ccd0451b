use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::error::ApiError;
use crate::middleware::{ValidatedJson, ValidatedQuery};
use crate::models::invoice_item::{
    InvoiceItem, InvoiceItemCreate, InvoiceItemPaginationQuery, InvoiceItemUpdate,
};
use crate::models::Paginated;
use crate::services::InvoiceItemService;
use crate::AppState;

/// GET /invoice-items
pub async fn get_all_invoice_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvoiceItem>>, ApiError> {
    let items = InvoiceItemService::new(state.pool.clone())
        .get_all_invoice_items()
        .await?;
    Ok(Json(items))
}

/// GET /invoice-items/paginated
pub async fn get_invoice_items_paginated(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<InvoiceItemPaginationQuery>,
) -> Result<Json<Paginated<InvoiceItem>>, ApiError> {
    let page = InvoiceItemService::new(state.pool.clone())
        .get_invoice_items_paginated(query)
        .await?;
    Ok(Json(page))
}

/// GET /invoice-items/:id
pub async fn get_invoice_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceItem>, ApiError> {
    let id = parse_id(&id)?;
    let item = InvoiceItemService::new(state.pool.clone())
        .get_invoice_item_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice item not found"))?;
    Ok(Json(item))
}

/// POST /invoice-items/create
pub async fn create_invoice_item(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<InvoiceItemCreate>,
) -> Result<(StatusCode, Json<InvoiceItem>), ApiError> {
    let item = InvoiceItemService::new(state.pool.clone())
        .create_invoice_item(data)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /invoice-items/:id
pub async fn update_invoice_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<InvoiceItemUpdate>,
) -> Result<Json<InvoiceItem>, ApiError> {
    let id = parse_id(&id)?;
    let item = InvoiceItemService::new(state.pool.clone())
        .update_invoice_item(id, data)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice item not found"))?;
    Ok(Json(item))
}

/// DELETE /invoice-items/:id
pub async fn delete_invoice_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceItem>, ApiError> {
    let id = parse_id(&id)?;
    let item = InvoiceItemService::new(state.pool.clone())
        .delete_invoice_item(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice item not found"))?;
    Ok(Json(item))
}
