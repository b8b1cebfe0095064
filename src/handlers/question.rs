//! Question handlers: create, list, read, update, delete.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::AppError;
use crate::model::{NewQuestion, QuestionPatch};
use crate::pagination::{total_pages, PageQuery};
use crate::response;
use crate::state::AppState;
use crate::store::QuestionStore;

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewQuestion>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;
    let question = QuestionStore::create(&state.pool, &input).await?;
    Ok(response::created(question))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (skip, limit) = params.window()?;
    let page = QuestionStore::read_many(&state.pool, skip, limit).await?;
    let pages = total_pages(page.total, params.size);
    Ok(response::ok_many(page.items, page.total, Some(pages)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let question = QuestionStore::read_by_id(&state.pool, question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("question {}", question_id)))?;
    Ok(response::ok_one(question))
}

pub async fn update(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Json(patch): Json<QuestionPatch>,
) -> Result<impl IntoResponse, AppError> {
    patch.validate()?;
    let question = QuestionStore::update(&state.pool, question_id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("question {}", question_id)))?;
    Ok(response::ok_one(question))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !QuestionStore::delete(&state.pool, question_id).await? {
        return Err(AppError::NotFound(format!("question {}", question_id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
