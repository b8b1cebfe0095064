//! Q&A forum backend: questions with cascading answers over PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod model;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use db::{apply_migrations, connect_pool, ensure_database_exists};
pub use error::{AppError, ConfigError};
pub use pagination::{total_pages, PageQuery, Paginated, WindowQuery};
pub use routes::{api_routes, common_routes};
pub use state::AppState;
pub use store::{AnswerStore, QuestionStore};
