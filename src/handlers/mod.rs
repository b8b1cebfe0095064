//! HTTP boundary: parameter parsing, payload validation, and translation of
//! store outcomes into transport status codes.

pub mod answer;
pub mod question;
