//! mods-lib: module declarations for build configuration files.
//!
//! Configuration files are Lua scripts that define rules from typed attribute
//! schemas and declare named modules with them. This crate provides:
//! - `attr`: attribute kinds (`files`, `modules`) rule schemas are built from
//! - `rule`: rule schemas and the handlers that validate declarations
//! - `workspace`: the registry of declared modules and its queries
//! - `eval`: evaluation of a configuration file into a `Workspace`

pub mod attr;
pub mod consts;
pub mod error;
pub mod eval;
pub mod lua;
pub mod rule;
pub mod workspace;

pub use error::{DeclError, QueryError};
pub use eval::{EvalError, EvalOptions, evaluate_config, evaluate_source};
pub use workspace::{Module, ModuleId, Workspace};
