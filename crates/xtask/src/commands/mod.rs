//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod attributes;
mod check_content;
mod explain;

pub use attributes::Attributes;
pub use check_content::CheckContent;
pub use explain::Explain;
