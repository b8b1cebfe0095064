//! Pool construction and schema setup for the two forum tables.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgConnection, PgPool};
use std::str::FromStr;

pub async fn connect_pool(config: &AppConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Ensure the database in `database_url` exists; create it if not. Connects to
/// the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_admin_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        let quoted = format!("\"{}\"", db_name.replace('"', "\"\""));
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn split_admin_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let db_name = url
        .get(path_start..)
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("")
        .trim();
    let admin_url = format!("{}postgres", url.get(..path_start).unwrap_or(url));
    Ok((admin_url, db_name.to_string()))
}

/// Idempotent DDL for `questions` and `answers`. The cascade lives in the
/// foreign key itself so the engine guarantees atomicity of parent deletes.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(200) NOT NULL,
            content TEXT NOT NULL,
            author_nickname VARCHAR(50) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS answers (
            id BIGSERIAL PRIMARY KEY,
            question_id BIGINT NOT NULL REFERENCES questions(id) ON DELETE CASCADE,
            content TEXT NOT NULL,
            author_nickname VARCHAR(50) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    for ddl in [
        "CREATE INDEX IF NOT EXISTS idx_questions_title ON questions (title)",
        "CREATE INDEX IF NOT EXISTS idx_questions_created_at ON questions (created_at DESC, id DESC)",
        "CREATE INDEX IF NOT EXISTS idx_answers_question_id ON answers (question_id)",
        "CREATE INDEX IF NOT EXISTS idx_answers_created_at ON answers (question_id, created_at DESC, id DESC)",
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
