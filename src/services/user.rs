use sqlx::PgPool;
use uuid::Uuid;

use crate::auth;
use crate::config;
use crate::db::query::WhereBuilder;
use crate::db::repositories::UserRepository;
use crate::error::ApiError;
use crate::models::user::{LoginResponse, User, UserCreate, UserPaginationQuery, UserUpdate};
use crate::models::Paginated;

pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.repository.find_many().await
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        self.repository.find_by_email(email).await
    }

    pub async fn create_user(&self, data: UserCreate) -> Result<User, ApiError> {
        let hash = bcrypt::hash(&data.password, config::config().security.bcrypt_cost)?;
        self.repository.create(&data, &hash).await
    }

    pub async fn update_user(
        &self,
        id: Uuid,
        data: UserUpdate,
    ) -> Result<Option<User>, ApiError> {
        let hash = match &data.password {
            Some(password) => {
                Some(bcrypt::hash(password, config::config().security.bcrypt_cost)?)
            }
            None => None,
        };
        self.repository.update(id, &data, hash.as_deref()).await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        self.repository.delete(id).await
    }

    /// Unknown email and wrong password are indistinguishable to the
    /// caller: both yield `None`.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<LoginResponse>, ApiError> {
        let user = match self.repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !bcrypt::verify(password, &user.password)? {
            return Ok(None);
        }

        let token = auth::issue_token(user.id, &user.email)?;
        Ok(Some(LoginResponse { user, token }))
    }

    pub async fn get_users_paginated(
        &self,
        query: UserPaginationQuery,
    ) -> Result<Paginated<User>, ApiError> {
        let filter = WhereBuilder::new()
            .contains("email", query.email.as_deref())
            .contains("first_name", query.first_name.as_deref())
            .contains("last_name", query.last_name.as_deref());

        let page = self.repository.find_page(&filter, query.skip, query.take).await?;
        Ok(Paginated {
            total: page.total,
            data: page.data,
            skip: query.skip,
            take: query.take,
        })
    }
}
