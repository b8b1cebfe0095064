//! Resource store: one transactional unit of work per operation, absence
//! signaled by `Option`/`bool` rather than errors.

mod answer;
mod question;

pub use answer::AnswerStore;
pub use question::QuestionStore;
