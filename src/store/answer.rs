//! Answer persistence against PostgreSQL.

use sqlx::PgPool;

use crate::error::AppError;
use crate::model::{Answer, AnswerPatch, NewAnswer};
use crate::pagination::Paginated;

pub struct AnswerStore;

impl AnswerStore {
    /// Insert one answer under the given question. The parent is checked in
    /// the same transaction as the insert, so a concurrent question delete
    /// cannot leave a dangling row; a missing parent fails with
    /// `ParentNotFound` and nothing is persisted.
    pub async fn create(
        pool: &PgPool,
        question_id: i64,
        input: &NewAnswer,
    ) -> Result<Answer, AppError> {
        tracing::debug!(question_id, "insert answer");
        let mut tx = pool.begin().await?;
        let parent: Option<(i64,)> = sqlx::query_as("SELECT id FROM questions WHERE id = $1")
            .bind(question_id)
            .fetch_optional(&mut *tx)
            .await?;
        if parent.is_none() {
            return Err(AppError::ParentNotFound(question_id));
        }
        let answer = sqlx::query_as::<_, Answer>(
            "INSERT INTO answers (question_id, content, author_nickname) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(question_id)
        .bind(&input.content)
        .bind(&input.author_nickname)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(answer)
    }

    /// Fetch one answer by id, or None. `question_id` is always populated so
    /// callers can check ownership against the access path.
    pub async fn read_by_id(pool: &PgPool, id: i64) -> Result<Option<Answer>, AppError> {
        let answer = sqlx::query_as::<_, Answer>("SELECT * FROM answers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(answer)
    }

    /// Newest-first window over one question's answers plus their total count.
    pub async fn read_many_by_question(
        pool: &PgPool,
        question_id: i64,
        skip: i64,
        limit: i64,
    ) -> Result<Paginated<Answer>, AppError> {
        tracing::debug!(question_id, skip, limit, "list answers");
        let mut tx = pool.begin().await?;
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM answers WHERE question_id = $1")
                .bind(question_id)
                .fetch_one(&mut *tx)
                .await?;
        let items = sqlx::query_as::<_, Answer>(
            "SELECT * FROM answers \
             WHERE question_id = $1 \
             ORDER BY created_at DESC, id DESC \
             OFFSET $2 LIMIT $3",
        )
        .bind(question_id)
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
        patch: &AnswerPatch,
    ) -> Result<Option<Answer>, AppError> {
        let mut tx = pool.begin().await?;
        let existing =
            sqlx::query_as::<_, Answer>("SELECT * FROM answers WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };
        let content = patch.content.as_ref().unwrap_or(&existing.content);
        let answer = sqlx::query_as::<_, Answer>(
            "UPDATE answers \
             SET content = $1, updated_at = NOW() \
             WHERE id = $2 \
             RETURNING *",
        )
        .bind(content)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(answer))
    }

    /// Delete one answer. Returns false for a missing id.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete answer");
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
