//! Final polish of model output before it reaches the caller: JSON
//! extraction, table-of-contents validation, markdown cleanup and HTML
//! rendering.

pub mod formatter;
pub mod interpreter;
pub mod renderer;
pub mod styles;
pub mod validator;

pub use formatter::{ensure_heading, normalize, starts_with_heading};
pub use interpreter::extract_json;
pub use renderer::{MarkdownRenderer, RenderOptions};
pub use validator::validate_toc;
