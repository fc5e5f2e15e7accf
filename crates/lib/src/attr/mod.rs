//! Attribute kinds available to rule schemas.
//!
//! A rule schema maps attribute names to an [`AttrKind`]. Configuration
//! authors construct kinds through the `attr` global:
//!
//! - `attr.files()` - a list of file paths
//! - `attr.modules { types = {...} }` - a list of module references
//!
//! # Submodules
//!
//! - [`lua`] - The `attr` global and the Lua userdata for [`AttrKind`]

pub mod lua;
mod types;

pub use types::*;
