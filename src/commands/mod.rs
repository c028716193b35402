//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod render;
pub mod utils;

// Re-export main command functions
pub use inspect::execute_inspect;
pub use render::{execute_render, validate_args, RenderArgs};
pub use utils::{display_schema, display_version};
