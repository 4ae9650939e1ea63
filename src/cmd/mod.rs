//! Command handlers for the bundle-diff CLI
//!
//! Each submodule handles a specific CLI command.

pub mod compare;
pub mod completions;
pub mod url;

// Re-export command functions for convenient access
pub use compare::cmd_compare;
pub use completions::cmd_completions;
pub use url::cmd_url;
