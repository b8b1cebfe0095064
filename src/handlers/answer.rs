//! Answer handlers. Every id-addressed route checks that the answer belongs
//! to the question named in the path; a mismatch is a bad request, not a 404.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::PgPool;

use crate::error::AppError;
use crate::model::{Answer, AnswerPatch, NewAnswer};
use crate::pagination::WindowQuery;
use crate::response;
use crate::state::AppState;
use crate::store::{AnswerStore, QuestionStore};

async fn load_owned_answer(
    pool: &PgPool,
    question_id: i64,
    answer_id: i64,
) -> Result<Answer, AppError> {
    let answer = AnswerStore::read_by_id(pool, answer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("answer {}", answer_id)))?;
    if answer.question_id != question_id {
        return Err(AppError::MismatchedParent {
            question_id,
            answer_id,
        });
    }
    Ok(answer)
}

pub async fn create(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Json(input): Json<NewAnswer>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;
    let answer = AnswerStore::create(&state.pool, question_id, &input).await?;
    Ok(response::created(answer))
}

pub async fn list(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Query(params): Query<WindowQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (skip, limit) = params.window()?;
    if QuestionStore::read_by_id(&state.pool, question_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!("question {}", question_id)));
    }
    let page = AnswerStore::read_many_by_question(&state.pool, question_id, skip, limit).await?;
    Ok(response::ok_many(page.items, page.total, None))
}

pub async fn read(
    State(state): State<AppState>,
    Path((question_id, answer_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let answer = load_owned_answer(&state.pool, question_id, answer_id).await?;
    Ok(response::ok_one(answer))
}

pub async fn update(
    State(state): State<AppState>,
    Path((question_id, answer_id)): Path<(i64, i64)>,
    Json(patch): Json<AnswerPatch>,
) -> Result<impl IntoResponse, AppError> {
    patch.validate()?;
    load_owned_answer(&state.pool, question_id, answer_id).await?;
    let answer = AnswerStore::update(&state.pool, answer_id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("answer {}", answer_id)))?;
    Ok(response::ok_one(answer))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((question_id, answer_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    load_owned_answer(&state.pool, question_id, answer_id).await?;
    AnswerStore::delete(&state.pool, answer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
