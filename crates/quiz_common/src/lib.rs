//! Shared types for the quiz-progression game backend.
//!
//! Entities, wire schemas and unlock-condition helpers used by both
//! `quizd` (the daemon) and `quizctl` (the CLI client).

pub mod condition;
pub mod model;
pub mod schemas;

pub use condition::*;
pub use model::*;
pub use schemas::*;
