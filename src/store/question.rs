//! Question persistence against PostgreSQL.

use sqlx::PgPool;

use crate::error::AppError;
use crate::model::{NewQuestion, Question, QuestionPatch};
use crate::pagination::Paginated;

pub struct QuestionStore;

impl QuestionStore {
    /// Insert one question and return the committed row. Both timestamps are
    /// assigned by the database in the same statement, so they start equal.
    pub async fn create(pool: &PgPool, input: &NewQuestion) -> Result<Question, AppError> {
        tracing::debug!(title = %input.title, "insert question");
        let question = sqlx::query_as::<_, Question>(
            "INSERT INTO questions (title, content, author_nickname) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.author_nickname)
        .fetch_one(pool)
        .await?;
        Ok(question)
    }

    /// Fetch one question by id, or None.
    pub async fn read_by_id(pool: &PgPool, id: i64) -> Result<Option<Question>, AppError> {
        let question = sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(question)
    }

    /// Newest-first window plus the total row count. Count and slice run in
    /// one transaction so the pair is mutually consistent.
    pub async fn read_many(
        pool: &PgPool,
        skip: i64,
        limit: i64,
    ) -> Result<Paginated<Question>, AppError> {
        tracing::debug!(skip, limit, "list questions");
        let mut tx = pool.begin().await?;
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await?;
        let items = sqlx::query_as::<_, Question>(
            "SELECT * FROM questions \
             ORDER BY created_at DESC, id DESC \
             OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Paginated { items, total })
    }

    /// Load, overwrite only the supplied patch fields, persist. Returns None
    /// for a missing id. An empty patch still refreshes `updated_at`.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        patch: &QuestionPatch,
    ) -> Result<Option<Question>, AppError> {
        let mut tx = pool.begin().await?;
        let existing = sqlx::query_as::<_, Question>(
            "SELECT * FROM questions WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };
        let title = patch.title.as_ref().unwrap_or(&existing.title);
        let content = patch.content.as_ref().unwrap_or(&existing.content);
        let question = sqlx::query_as::<_, Question>(
            "UPDATE questions \
             SET title = $1, content = $2, updated_at = NOW() \
             WHERE id = $3 \
             RETURNING *",
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(question))
    }

    /// Delete the question and, through the foreign key cascade, all of its
    /// answers in the same engine transaction. Returns false for a missing id.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete question");
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
