//! Router assembly.

mod common;

pub use common::common_routes;

use crate::handlers::{answer, question};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Question and answer routes. Answers are always addressed through their
/// parent question so handlers can check ownership.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(question::list).post(question::create))
        .route(
            "/questions/:question_id",
            get(question::read)
                .patch(question::update)
                .delete(question::delete),
        )
        .route(
            "/questions/:question_id/answers",
            get(answer::list).post(answer::create),
        )
        .route(
            "/questions/:question_id/answers/:answer_id",
            get(answer::read).patch(answer::update).delete(answer::delete),
        )
        .with_state(state)
}
