//! Book instances repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book_instance::{BookInstance, BookInstanceRow, InstanceStatus},
};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all instances with their book title
    pub async fn list(&self) -> AppResult<Vec<BookInstanceRow>> {
        let instances = sqlx::query_as::<_, BookInstanceRow>(
            r#"
            SELECT i.id, i.book_id, b.title AS book_title, i.imprint, i.status, i.due_back
            FROM book_instances i
            JOIN books b ON b.id = i.book_id
            ORDER BY b.title, i.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(instances)
    }

    /// Get instance by ID, with its book title
    pub async fn get(&self, id: i32) -> AppResult<Option<BookInstanceRow>> {
        let instance = sqlx::query_as::<_, BookInstanceRow>(
            r#"
            SELECT i.id, i.book_id, b.title AS book_title, i.imprint, i.status, i.due_back
            FROM book_instances i
            JOIN books b ON b.id = i.book_id
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(instance)
    }

    /// All instances of a book
    pub async fn by_book(&self, book_id: i32) -> AppResult<Vec<BookInstance>> {
        let instances = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT id, book_id, imprint, status, due_back
            FROM book_instances
            WHERE book_id = $1
            ORDER BY id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(instances)
    }

    /// Create a new instance
    pub async fn create(
        &self,
        book_id: i32,
        imprint: &str,
        status: InstanceStatus,
        due_back: Option<NaiveDate>,
    ) -> AppResult<BookInstance> {
        let instance = sqlx::query_as::<_, BookInstance>(
            r#"
            INSERT INTO book_instances (book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4)
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(book_id)
        .bind(imprint)
        .bind(i16::from(status))
        .bind(due_back)
        .fetch_one(&self.pool)
        .await?;

        Ok(instance)
    }

    /// Count all instances
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count instances currently available
    pub async fn count_available(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = $1")
                .bind(i16::from(InstanceStatus::Available))
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
