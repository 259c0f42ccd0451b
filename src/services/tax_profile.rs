use sqlx::PgPool;
use uuid::Uuid;

use crate::db::query::WhereBuilder;
use crate::db::repositories::TaxProfileRepository;
use crate::error::ApiError;
use crate::models::tax_profile::{
    TaxProfile, TaxProfileCreate, TaxProfilePaginationQuery, TaxProfileUpdate,
};
use crate::models::Paginated;

pub struct TaxProfileService {
    repository: TaxProfileRepository,
}

impl TaxProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TaxProfileRepository::new(pool),
        }
    }

    pub async fn get_all_tax_profiles(&self) -> Result<Vec<TaxProfile>, ApiError> {
        self.repository.find_many().await
    }

    pub async fn get_tax_profile_by_id(&self, id: Uuid) -> Result<Option<TaxProfile>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn create_tax_profile(&self, data: TaxProfileCreate) -> Result<TaxProfile, ApiError> {
        self.repository.create(&data).await
    }

    pub async fn update_tax_profile(
        &self,
        id: Uuid,
        data: TaxProfileUpdate,
    ) -> Result<Option<TaxProfile>, ApiError> {
        self.repository.update(id, &data).await
    }

    pub async fn delete_tax_profile(&self, id: Uuid) -> Result<Option<TaxProfile>, ApiError> {
        self.repository.delete(id).await
    }

    pub async fn get_tax_profiles_paginated(
        &self,
        query: TaxProfilePaginationQuery,
    ) -> Result<Paginated<TaxProfile>, ApiError> {
        let filter = WhereBuilder::new()
            .contains("name", query.name.as_deref())
            .contains("tax_id", query.tax_id.as_deref())
            .contains("city", query.city.as_deref())
            .contains("postal_code", query.postal_code.as_deref());

        let page = self.repository.find_page(&filter, query.skip, query.take).await?;
        Ok(Paginated {
            total: page.total,
            data: page.data,
            skip: query.skip,
            take: query.take,
        })
    }
}
