//! The configuration files of an evaluation run.
//!
//! The evaluator enters a file before running its chunk and leaves it when the
//! chunk returns. Every chunk is named `@<file id>`, so a rule handler learns
//! the file a declaration is written in from the chunk name of its immediate
//! caller. Only names of files entered during this run are accepted.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use mlua::Lua;

use crate::error::DeclError;

#[derive(Debug, Clone, Default)]
pub struct FileScope {
  stack: Rc<RefCell<Vec<String>>>,
  loaded: Rc<RefCell<BTreeSet<String>>>,
}

impl FileScope {
  pub fn new() -> Self {
    Self::default()
  }

  /// The file whose evaluation is innermost, if any.
  pub fn current(&self) -> Option<String> {
    self.stack.borrow().last().cloned()
  }

  /// Whether `file` has been entered at any point in this run.
  pub fn is_loaded(&self, file: &str) -> bool {
    self.loaded.borrow().contains(file)
  }

  /// The file in which the function at stack `level` was written.
  ///
  /// Level 1 is the caller of the running Rust callback. Returns `None` for
  /// C functions and for chunks that are not configuration files of this run.
  pub fn caller_file(&self, lua: &Lua, level: usize) -> Option<String> {
    let source = lua.inspect_stack(level, |debug| debug.source().source.map(|s| s.into_owned()))??;
    let file = source.strip_prefix('@')?;
    self.is_loaded(file).then(|| file.to_string())
  }

  /// All active files, outermost first.
  pub fn chain(&self) -> Vec<String> {
    self.stack.borrow().clone()
  }

  /// Push `file` for the lifetime of the returned guard.
  ///
  /// Fails if `file` is already being evaluated further out.
  pub fn enter(&self, file: &str) -> Result<ScopeGuard, DeclError> {
    let mut stack = self.stack.borrow_mut();
    if stack.iter().any(|f| f == file) {
      let mut chain = stack.clone();
      chain.push(file.to_string());
      return Err(DeclError::IncludeCycle { chain });
    }
    stack.push(file.to_string());
    self.loaded.borrow_mut().insert(file.to_string());
    Ok(ScopeGuard {
      stack: Rc::clone(&self.stack),
    })
  }
}

/// Pops the entered file when dropped, including on error paths.
#[derive(Debug)]
pub struct ScopeGuard {
  stack: Rc<RefCell<Vec<String>>>,
}

impl Drop for ScopeGuard {
  fn drop(&mut self) {
    self.stack.borrow_mut().pop();
  }
}
