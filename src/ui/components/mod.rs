//! UI building blocks used by the renderer.

/// Option list rendering.
pub mod options;
/// Prompt row with the query input and index status.
pub mod prompt;

pub use options::render_options;
pub use prompt::{PromptContext, PromptStatus, render_prompt};
