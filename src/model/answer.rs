//! Answer: always owned by exactly one question; deleted with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::validation::{check_length, check_min_length};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub content: String,
    pub author_nickname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAnswer {
    pub content: String,
    pub author_nickname: String,
}

impl NewAnswer {
    pub fn validate(&self) -> Result<(), AppError> {
        check_min_length("content", &self.content, 10)?;
        check_length("author_nickname", &self.author_nickname, 2, 50)
    }
}

/// Sparse update: absent fields are left untouched by the merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerPatch {
    pub content: Option<String>,
}

impl AnswerPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(ref content) = self.content {
            check_min_length("content", content, 10)?;
        }
        Ok(())
    }
}
