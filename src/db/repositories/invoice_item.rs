use sqlx::PgPool;
use uuid::Uuid;

use crate::db::query::{UpdateBuilder, WhereBuilder};
use crate::db::repository::{Page, Repository};
use crate::error::ApiError;
use crate::models::invoice_item::{InvoiceItem, InvoiceItemCreate, InvoiceItemUpdate};

pub struct InvoiceItemRepository {
    base: Repository<InvoiceItem>,
}

impl InvoiceItemRepository {
    pub fn new(pool: PgPool) -> Self {
        // No timestamps on line items; order by id for stable pages.
        Self {
            base: Repository::new("invoice_items", "id", pool),
        }
    }

    pub async fn find_many(&self) -> Result<Vec<InvoiceItem>, ApiError> {
        self.base.find_many().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<InvoiceItem>, ApiError> {
        self.base.find_by_id(id).await
    }

    pub async fn create(&self, data: &InvoiceItemCreate) -> Result<InvoiceItem, ApiError> {
        let item = sqlx::query_as::<_, InvoiceItem>(
            "INSERT INTO invoice_items (description, quantity, unit_price, line_total, invoice_id) \
             VALUES ($1, $2::numeric, $3::numeric, $4::numeric, $5::uuid) RETURNING *",
        )
        .bind(&data.description)
        .bind(&data.quantity)
        .bind(&data.unit_price)
        .bind(&data.line_total)
        .bind(&data.invoice_id)
        .fetch_one(self.base.pool())
        .await?;
        Ok(item)
    }

    pub async fn update(
        &self,
        id: Uuid,
        data: &InvoiceItemUpdate,
    ) -> Result<Option<InvoiceItem>, ApiError> {
        let builder = UpdateBuilder::new()
            .set("description", data.description.as_deref())
            .set_cast("quantity", data.quantity.as_deref(), "numeric")
            .set_cast("unit_price", data.unit_price.as_deref(), "numeric");

        if builder.is_empty() {
            return self.base.find_by_id(id).await;
        }

        let sql = format!(
            "UPDATE invoice_items {} WHERE id = ${} RETURNING *",
            builder.clause(),
            builder.len() + 1
        );
        let mut query = sqlx::query_as::<_, InvoiceItem>(&sql);
        for param in builder.params() {
            query = query.bind(param.as_str());
        }
        let item = query.bind(id).fetch_optional(self.base.pool()).await?;
        Ok(item)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<InvoiceItem>, ApiError> {
        self.base.delete(id).await
    }

    pub async fn find_page(
        &self,
        filter: &WhereBuilder,
        skip: i64,
        take: i64,
    ) -> Result<Page<InvoiceItem>, ApiError> {
        self.base.find_page(filter, skip, take).await
    }
}
