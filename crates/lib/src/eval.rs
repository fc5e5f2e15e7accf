//! Configuration file evaluation.
//!
//! This module provides the `evaluate_config` function which takes a path to a
//! configuration file and returns the [`Workspace`] containing every module
//! declared while evaluating it (and the files it includes).
//!
//! Evaluation is all-or-nothing: any error aborts the run and no workspace is
//! returned.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use mlua::prelude::*;
use tracing::info;

use crate::error::DeclError;
use crate::lua::loaders::{load_file_in_scope, load_source_in_scope};
use crate::lua::prelude::load_prelude;
use crate::lua::runtime;
use crate::lua::scope::FileScope;
use crate::workspace::Workspace;

/// Errors that can occur during config evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
  /// Lua evaluation error, including declaration errors raised by rules.
  #[error("lua error: {0}")]
  Lua(#[from] LuaError),

  /// The configuration file could not be resolved.
  #[error("cannot resolve config '{}': {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl EvalError {
  /// The declaration error that aborted evaluation, if that is what happened.
  pub fn decl_error(&self) -> Option<&DeclError> {
    match self {
      EvalError::Lua(err) => find_decl_error(err),
      EvalError::Io { .. } => None,
    }
  }
}

fn find_decl_error(err: &LuaError) -> Option<&DeclError> {
  match err {
    LuaError::ExternalError(inner) => inner.downcast_ref::<DeclError>(),
    LuaError::CallbackError { cause, .. } => find_decl_error(cause),
    LuaError::WithContext { cause, .. } => find_decl_error(cause),
    _ => None,
  }
}

/// Options controlling an evaluation run.
#[derive(Debug, Clone)]
pub struct EvalOptions {
  /// Evaluate the bootstrap prelude (the `module` rule) before user files.
  pub prelude: bool,
}

impl Default for EvalOptions {
  fn default() -> Self {
    Self { prelude: true }
  }
}

/// Identifier of the entry file itself: its file name.
pub fn entry_file_id(path: &Path) -> String {
  path
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Evaluate a configuration file and return the resulting workspace.
///
/// The file's directory is the workspace root: file identifiers, and therefore
/// module identities, are paths relative to it. The entry file `MODS` is
/// identified as `"MODS"`.
///
/// # Example
/// ```ignore
/// use std::path::Path;
/// use mods_lib::eval::evaluate_config;
///
/// let workspace = evaluate_config(Path::new("MODS"))?;
/// println!("{:?}", workspace.get_files("MODS", "a")?);
/// ```
pub fn evaluate_config(path: &Path) -> Result<Workspace, EvalError> {
  evaluate_config_with(path, &EvalOptions::default())
}

/// [`evaluate_config`] with explicit options.
pub fn evaluate_config_with(path: &Path, options: &EvalOptions) -> Result<Workspace, EvalError> {
  let canonical_path = dunce::canonicalize(path).map_err(|source| EvalError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let root = canonical_path
    .parent()
    .map(Path::to_path_buf)
    .unwrap_or_else(|| PathBuf::from("."));

  info!(config = %path.display(), root = %root.display(), "evaluating config");
  run(root.clone(), options, |lua, scope| {
    load_file_in_scope(lua, scope, &root, &canonical_path).map(|_| ())
  })
}

/// Evaluate configuration source held in memory, identified as `file`.
///
/// `include` paths resolve against the current directory.
pub fn evaluate_source(file: &str, source: &str) -> Result<Workspace, EvalError> {
  evaluate_source_with(file, source, &EvalOptions::default())
}

/// [`evaluate_source`] with explicit options.
pub fn evaluate_source_with(file: &str, source: &str, options: &EvalOptions) -> Result<Workspace, EvalError> {
  info!(config = %file, "evaluating config source");
  run(PathBuf::from("."), options, |lua, scope| {
    load_source_in_scope(lua, scope, file, source).map(|_| ())
  })
}

fn run<F>(root: PathBuf, options: &EvalOptions, eval: F) -> Result<Workspace, EvalError>
where
  F: FnOnce(&Lua, &FileScope) -> LuaResult<()>,
{
  let workspace = Rc::new(RefCell::new(Workspace::new()));
  let scope = FileScope::new();

  // Evaluate in a block so lua is dropped, releasing the handlers' references
  // to the workspace, before we unwrap it
  {
    let lua = runtime::create_runtime(workspace.clone(), scope.clone(), root)?;
    if options.prelude {
      load_prelude(&lua, &scope)?;
    }
    eval(&lua, &scope)?;
  }

  let workspace = Rc::try_unwrap(workspace)
    .map(RefCell::into_inner)
    .unwrap_or_else(|shared| shared.take());
  info!(modules = workspace.len(), "evaluation complete");
  Ok(workspace)
}
