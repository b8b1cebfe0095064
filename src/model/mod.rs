//! Canonical entity shapes and their request payloads.

mod answer;
mod question;

pub use answer::{Answer, AnswerPatch, NewAnswer};
pub use question::{NewQuestion, Question, QuestionPatch};
