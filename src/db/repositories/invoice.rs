use sqlx::PgPool;
use uuid::Uuid;

use crate::db::query::{UpdateBuilder, WhereBuilder};
use crate::db::repository::{Page, Repository};
use crate::error::ApiError;
use crate::models::invoice::{Invoice, InvoiceCreate, InvoiceUpdate};

pub struct InvoiceRepository {
    base: Repository<Invoice>,
}

impl InvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            base: Repository::new("invoices", "created_at", pool),
        }
    }

    pub async fn find_many(&self) -> Result<Vec<Invoice>, ApiError> {
        self.base.find_many().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, ApiError> {
        self.base.find_by_id(id).await
    }

    /// Dates and amounts were shape-checked at the boundary; they bind
    /// as text with SQL casts.
    pub async fn create(&self, data: &InvoiceCreate) -> Result<Invoice, ApiError> {
        let status = data.status.as_deref().unwrap_or("DRAFT");
        let invoice = sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices \
             (number, status, issue_date, due_date, subtotal, tax_amount, total, description, tax_profile_id) \
             VALUES ($1, $2, $3::timestamptz, $4::timestamptz, $5::numeric, $6::numeric, $7::numeric, $8, $9::uuid) \
             RETURNING *",
        )
        .bind(&data.number)
        .bind(status)
        .bind(&data.issue_date)
        .bind(&data.due_date)
        .bind(&data.subtotal)
        .bind(&data.tax_amount)
        .bind(&data.total)
        .bind(&data.description)
        .bind(&data.tax_profile_id)
        .fetch_one(self.base.pool())
        .await?;
        Ok(invoice)
    }

    pub async fn update(
        &self,
        id: Uuid,
        data: &InvoiceUpdate,
    ) -> Result<Option<Invoice>, ApiError> {
        let builder = UpdateBuilder::new()
            .set("status", data.status.as_deref())
            .set_cast("issue_date", data.issue_date.as_deref(), "timestamptz")
            .set_cast("due_date", data.due_date.as_deref(), "timestamptz")
            .set_cast("subtotal", data.subtotal.as_deref(), "numeric")
            .set_cast("tax_amount", data.tax_amount.as_deref(), "numeric")
            .set_cast("total", data.total.as_deref(), "numeric")
            .set("description", data.description.as_deref());

        if builder.is_empty() {
            return self.base.find_by_id(id).await;
        }

        let sql = format!(
            "UPDATE invoices {}, updated_at = now() WHERE id = ${} RETURNING *",
            builder.clause(),
            builder.len() + 1
        );
        let mut query = sqlx::query_as::<_, Invoice>(&sql);
        for param in builder.params() {
            query = query.bind(param.as_str());
        }
        let invoice = query.bind(id).fetch_optional(self.base.pool()).await?;
        Ok(invoice)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Invoice>, ApiError> {
        self.base.delete(id).await
    }

    pub async fn find_page(
        &self,
        filter: &WhereBuilder,
        skip: i64,
        take: i64,
    ) -> Result<Page<Invoice>, ApiError> {
        self.base.find_page(filter, skip, take).await
    }
}
