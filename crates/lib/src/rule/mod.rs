//! Rules: reusable module declaration templates.
//!
//! `rule { attrs = {...}, type = {...} }` builds a [`RuleSchema`] and returns a
//! handler bound to it. Each call of the handler validates its keyword
//! arguments against the schema, partitions them into file and module
//! dependencies, and registers the resulting module in the workspace under
//! the file currently being evaluated.
//!
//! # Submodules
//!
//! - [`lua`] - The `rule` global and the rule handlers it produces

pub mod lua;
mod types;

pub use types::*;
