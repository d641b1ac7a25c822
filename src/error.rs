//! Error types for the math tutor service
//!
//! The classifier and solvers are infallible by construction; errors only
//! arise at the HTTP boundary (empty input, rendering, server IO).

use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {

    // =============================
    // Boundary Errors
    // =============================

    #[error("No question provided")]
    EmptyQuestion,

    #[error("Unsupported question type: {0}")]
    UnsupportedTopic(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
