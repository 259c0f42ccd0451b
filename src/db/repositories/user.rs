use sqlx::PgPool;
use uuid::Uuid;

use crate::db::query::{UpdateBuilder, WhereBuilder};
use crate::db::repository::{Page, Repository};
use crate::error::ApiError;
use crate::models::user::{User, UserCreate, UserUpdate};

pub struct UserRepository {
    base: Repository<User>,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            base: Repository::new("users", "created_at", pool),
        }
    }

    pub async fn find_many(&self) -> Result<Vec<User>, ApiError> {
        self.base.find_many().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        self.base.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(user)
    }

    /// `password_hash` is the already-hashed credential; the plaintext
    /// never reaches this layer.
    pub async fn create(&self, data: &UserCreate, password_hash: &str) -> Result<User, ApiError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, first_name, last_name) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.email)
        .bind(password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .fetch_one(self.base.pool())
        .await?;
        Ok(user)
    }

    pub async fn update(
        &self,
        id: Uuid,
        data: &UserUpdate,
        password_hash: Option<&str>,
    ) -> Result<Option<User>, ApiError> {
        let builder = UpdateBuilder::new()
            .set("email", data.email.as_deref())
            .set("password", password_hash)
            .set("first_name", data.first_name.as_deref())
            .set("last_name", data.last_name.as_deref());

        if builder.is_empty() {
            return self.base.find_by_id(id).await;
        }

        let sql = format!(
            "UPDATE users {}, updated_at = now() WHERE id = ${} RETURNING *",
            builder.clause(),
            builder.len() + 1
        );
        let mut query = sqlx::query_as::<_, User>(&sql);
        for param in builder.params() {
            query = query.bind(param.as_str());
        }
        let user = query.bind(id).fetch_optional(self.base.pool()).await?;
        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        self.base.delete(id).await
    }

    pub async fn find_page(
        &self,
        filter: &WhereBuilder,
        skip: i64,
        take: i64,
    ) -> Result<Page<User>, ApiError> {
        self.base.find_page(filter, skip, take).await
    }
}
