use sqlx::{postgres::PgRow, FromRow, PgPool};
use uuid::Uuid;

use crate::db::query::WhereBuilder;
use crate::error::ApiError;

/// A page of rows plus the filter-wide total (the count ignores
/// skip/take but honors the same predicate).
#[derive(Debug)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
}

/// Generic data access shared by every entity repository: lookups,
/// deletes and paginated reads over a single table. Entity-specific
/// writes live in the per-entity repositories.
pub struct Repository<T> {
    table_name: &'static str,
    order_by: &'static str,
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(table_name: &'static str, order_by: &'static str, pool: PgPool) -> Self {
        Self {
            table_name,
            order_by,
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_many(&self) -> Result<Vec<T>, ApiError> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY {}",
            self.table_name, self.order_by
        );
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, ApiError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", self.table_name);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns the deleted row, or `None` when nothing matched.
    pub async fn delete(&self, id: Uuid) -> Result<Option<T>, ApiError> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING *",
            self.table_name
        );
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Filtered page plus filter-wide count, fetched concurrently. The
    /// two reads are independent; no ordering between them is required.
    pub async fn find_page(
        &self,
        filter: &WhereBuilder,
        skip: i64,
        take: i64,
    ) -> Result<Page<T>, ApiError> {
        let n = filter.len();
        let page_sql = format!(
            "SELECT * FROM {} {} ORDER BY {} LIMIT ${} OFFSET ${}",
            self.table_name,
            filter.clause(),
            self.order_by,
            n + 1,
            n + 2
        );
        let count_sql = format!(
            "SELECT COUNT(*) FROM {} {}",
            self.table_name,
            filter.clause()
        );

        let mut page_query = sqlx::query_as::<_, T>(&page_sql);
        for param in filter.params() {
            page_query = page_query.bind(param.as_str());
        }
        page_query = page_query.bind(take).bind(skip);

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for param in filter.params() {
            count_query = count_query.bind(param.as_str());
        }

        let (data, total) = tokio::try_join!(
            page_query.fetch_all(&self.pool),
            count_query.fetch_one(&self.pool)
        )?;

        Ok(Page { data, total })
    }
}
