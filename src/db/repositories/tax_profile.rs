use sqlx::PgPool;
use uuid::Uuid;

use crate::db::query::{UpdateBuilder, WhereBuilder};
use crate::db::repository::{Page, Repository};
use crate::error::ApiError;
use crate::models::tax_profile::{TaxProfile, TaxProfileCreate, TaxProfileUpdate};

pub struct TaxProfileRepository {
    base: Repository<TaxProfile>,
}

impl TaxProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            base: Repository::new("tax_profiles", "created_at", pool),
        }
    }

    pub async fn find_many(&self) -> Result<Vec<TaxProfile>, ApiError> {
        self.base.find_many().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TaxProfile>, ApiError> {
        self.base.find_by_id(id).await
    }

    pub async fn create(&self, data: &TaxProfileCreate) -> Result<TaxProfile, ApiError> {
        let profile = sqlx::query_as::<_, TaxProfile>(
            "INSERT INTO tax_profiles (name, tax_id, address, city, postal_code, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6::uuid) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.tax_id)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.postal_code)
        .bind(&data.user_id)
        .fetch_one(self.base.pool())
        .await?;
        Ok(profile)
    }

    pub async fn update(
        &self,
        id: Uuid,
        data: &TaxProfileUpdate,
    ) -> Result<Option<TaxProfile>, ApiError> {
        let builder = UpdateBuilder::new()
            .set("name", data.name.as_deref())
            .set("tax_id", data.tax_id.as_deref())
            .set("address", data.address.as_deref())
            .set("city", data.city.as_deref())
            .set("postal_code", data.postal_code.as_deref());

        if builder.is_empty() {
            return self.base.find_by_id(id).await;
        }

        let sql = format!(
            "UPDATE tax_profiles {}, updated_at = now() WHERE id = ${} RETURNING *",
            builder.clause(),
            builder.len() + 1
        );
        let mut query = sqlx::query_as::<_, TaxProfile>(&sql);
        for param in builder.params() {
            query = query.bind(param.as_str());
        }
        let profile = query.bind(id).fetch_optional(self.base.pool()).await?;
        Ok(profile)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<TaxProfile>, ApiError> {
        self.base.delete(id).await
    }

    pub async fn find_page(
        &self,
        filter: &WhereBuilder,
        skip: i64,
        take: i64,
    ) -> Result<Page<TaxProfile>, ApiError> {
        self.base.find_page(filter, skip, take).await
    }
}
