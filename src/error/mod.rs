//! Error module orchestrator.

mod types;

pub use types::{BoxError, Result};
