//! Question: a forum post that owns zero or more answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::validation::{check_length, check_min_length};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_nickname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    pub content: String,
    /// Free-text label, not a verified principal.
    pub author_nickname: String,
}

impl NewQuestion {
    pub fn validate(&self) -> Result<(), AppError> {
        check_length("title", &self.title, 5, 200)?;
        check_min_length("content", &self.content, 10)?;
        check_length("author_nickname", &self.author_nickname, 2, 50)
    }
}

/// Sparse update: absent fields are left untouched by the merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl QuestionPatch {
    /// Validates only the fields that are present.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(ref title) = self.title {
            check_length("title", title, 5, 200)?;
        }
        if let Some(ref content) = self.content {
            check_min_length("content", content, 10)?;
        }
        Ok(())
    }
}
