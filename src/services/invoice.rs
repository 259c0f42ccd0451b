use sqlx::PgPool;
use uuid::Uuid;

use crate::db::query::WhereBuilder;
use crate::db::repositories::InvoiceRepository;
use crate::error::ApiError;
use crate::models::invoice::{Invoice, InvoiceCreate, InvoicePaginationQuery, InvoiceUpdate};
use crate::models::Paginated;

pub struct InvoiceService {
    repository: InvoiceRepository,
}

impl InvoiceService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InvoiceRepository::new(pool),
        }
    }

    pub async fn get_all_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.repository.find_many().await
    }

    pub async fn get_invoice_by_id(&self, id: Uuid) -> Result<Option<Invoice>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn create_invoice(&self, data: InvoiceCreate) -> Result<Invoice, ApiError> {
        self.repository.create(&data).await
    }

    pub async fn update_invoice(
        &self,
        id: Uuid,
        data: InvoiceUpdate,
    ) -> Result<Option<Invoice>, ApiError> {
        self.repository.update(id, &data).await
    }

    pub async fn delete_invoice(&self, id: Uuid) -> Result<Option<Invoice>, ApiError> {
        self.repository.delete(id).await
    }

    /// `number` matches as a substring; `status` and `taxProfileId` are
    /// exact matches.
    pub async fn get_invoices_paginated(
        &self,
        query: InvoicePaginationQuery,
    ) -> Result<Paginated<Invoice>, ApiError> {
        let filter = WhereBuilder::new()
            .contains("number", query.number.as_deref())
            .equals("status", query.status.as_deref())
            .equals_id("tax_profile_id", query.tax_profile_id.as_deref());

        let page = self.repository.find_page(&filter, query.skip, query.take).await?;
        Ok(Paginated {
            total: page.total,
            data: page.data,
            skip: query.skip,
            take: query.take,
        })
    }
}
