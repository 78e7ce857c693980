//! Public exports for building LLM-ready prompts.

pub mod builder;
pub mod schema;
pub mod templates;

pub use builder::*;
pub use schema::*;
