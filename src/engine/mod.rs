//! Public façade for the engine layer.

pub mod orchestrator;
pub mod prompt;
pub mod types;

pub use orchestrator::{GenerationError, Orchestrator};
