//! Lua runtime and evaluation.
//!
//! This module provides the Lua execution environment for module
//! configurations. It registers the host globals, tracks which file is being
//! evaluated, and runs the bootstrap prelude.
//!
//! # Submodules
//!
//! - [`convert`] - Lua value to Rust value conversions
//! - [`globals`] - Global Lua values (`rule`, `attr`, `include`)
//! - [`loaders`] - Configuration file loading and `include`
//! - [`prelude`] - Rules defined before user configuration runs
//! - [`runtime`] - Low-level Lua VM management
//! - [`scope`] - The stack of files being evaluated

pub mod convert;
pub mod globals;
pub mod loaders;
pub mod prelude;
pub mod runtime;
pub mod scope;
