use sqlx::PgPool;
use uuid::Uuid;

use crate::db::query::WhereBuilder;
use crate::db::repositories::InvoiceItemRepository;
use crate::error::ApiError;
use crate::models::invoice_item::{
    InvoiceItem, InvoiceItemCreate, InvoiceItemPaginationQuery, InvoiceItemUpdate,
};
use crate::models::Paginated;

pub struct InvoiceItemService {
    repository: InvoiceItemRepository,
}

impl InvoiceItemService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InvoiceItemRepository::new(pool),
        }
    }

    pub async fn get_all_invoice_items(&self) -> Result<Vec<InvoiceItem>, ApiError> {
        self.repository.find_many().await
    }

    pub async fn get_invoice_item_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<InvoiceItem>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn create_invoice_item(
        &self,
        data: InvoiceItemCreate,
    ) -> Result<InvoiceItem, ApiError> {
        self.repository.create(&data).await
    }

    pub async fn update_invoice_item(
        &self,
        id: Uuid,
        data: InvoiceItemUpdate,
    ) -> Result<Option<InvoiceItem>, ApiError> {
        self.repository.update(id, &data).await
    }

    pub async fn delete_invoice_item(&self, id: Uuid) -> Result<Option<InvoiceItem>, ApiError> {
        self.repository.delete(id).await
    }

    pub async fn get_invoice_items_paginated(
        &self,
        query: InvoiceItemPaginationQuery,
    ) -> Result<Paginated<InvoiceItem>, ApiError> {
        let filter = WhereBuilder::new()
            .contains("description", query.description.as_deref())
            .equals_id("invoice_id", query.invoice_id.as_deref());

        let page = self.repository.find_page(&filter, query.skip, query.take).await?;
        Ok(Paginated {
            total: page.total,
            data: page.data,
            skip: query.skip,
            take: query.take,
        })
    }
}
