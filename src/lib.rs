//! Credit card application evaluation.
//!
//! The [`applications`] module holds the evaluator and the collaborator
//! contracts it consumes. Configuration, telemetry, and the top-level error
//! type support the command-line front end.

pub mod applications;
pub mod config;
pub mod error;
pub mod telemetry;
