// Resume screening: keyword analysis against a position plus candidate checks.
// Everything here is synchronous and pure; handlers own the I/O.

pub mod analyzer;
pub mod candidate;
pub mod handlers;
pub mod text;

use thiserror::Error;

pub use analyzer::{analyze, AnalysisResult};

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("Invalid position configuration: {0}")]
    Config(String),

    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    #[error("No interview questions configured for position '{0}'")]
    NoQuestions(String),
}
