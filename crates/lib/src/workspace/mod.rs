//! The workspace registry.
//!
//! A [`Workspace`] owns every [`Module`] declared during one evaluation run,
//! keyed by the file that declared it and its name. It is created empty,
//! filled by rule handlers while configuration files are evaluated, and
//! queried afterwards.

mod types;

pub use types::*;
