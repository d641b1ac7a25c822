//! Math Tutor API
//!
//! A small web service that solves school math word problems:
//! - Classifies a free-text question as trigonometry or compound interest
//! - Extracts numeric parameters with ordered regex patterns
//! - Computes the answer with closed-form formulas
//! - Renders a step-by-step HTML explanation
//!
//! PIPELINE:
//! QUESTION → CLASSIFY → EXTRACT → SOLVE → RENDER

pub mod api;
pub mod classifier;
pub mod error;
pub mod fraction;
pub mod models;
pub mod solvers;

pub use error::Result;

// Re-export common types
pub use classifier::QuestionClassifier;
pub use models::*;
