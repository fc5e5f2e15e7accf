use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::QueryError;

/// Identity of a module: the declaring file and the module name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ModuleId {
  pub file: String,
  pub name: String,
}

impl ModuleId {
  pub fn new(file: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      file: file.into(),
      name: name.into(),
    }
  }
}

impl fmt::Display for ModuleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.file, self.name)
  }
}

/// Paths declared under one `files` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileDep {
  pub items: Vec<String>,
}

/// References declared under one `modules` attribute.
///
/// `types` is copied from the attribute kind. References are not checked
/// against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleDep {
  pub types: Vec<String>,
  pub items: Vec<String>,
}

/// A declared module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
  pub file: String,
  pub name: String,
  /// `files` attributes, keyed by attribute name.
  pub file_deps: BTreeMap<String, FileDep>,
  /// `modules` attributes, keyed by attribute name.
  pub module_deps: BTreeMap<String, ModuleDep>,
}

impl Module {
  pub fn id(&self) -> ModuleId {
    ModuleId::new(self.file.clone(), self.name.clone())
  }

  /// Direct files, concatenated in attribute-name order.
  pub fn files(&self) -> Vec<String> {
    self.file_deps.values().flat_map(|dep| dep.items.iter().cloned()).collect()
  }

  /// Direct module references, concatenated in attribute-name order.
  pub fn module_refs(&self) -> Vec<String> {
    self
      .module_deps
      .values()
      .flat_map(|dep| dep.items.iter().cloned())
      .collect()
  }
}

/// Registry of all modules declared in one evaluation run.
///
/// # Ordering
///
/// Uses [`BTreeMap`] throughout so iteration and file concatenation are
/// deterministic: modules iterate in identity order, and a module's files are
/// concatenated in attribute-name order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Workspace {
  modules: BTreeMap<ModuleId, Module>,
}

impl Workspace {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert or replace the module identified by `(file, name)`.
  ///
  /// Registering an identity twice keeps only the last record.
  pub fn register_module(
    &mut self,
    file: &str,
    name: &str,
    file_deps: BTreeMap<String, FileDep>,
    module_deps: BTreeMap<String, ModuleDep>,
  ) {
    debug!(
      file = %file,
      name = %name,
      file_attrs = file_deps.len(),
      module_attrs = module_deps.len(),
      "register module"
    );

    let module = Module {
      file: file.to_string(),
      name: name.to_string(),
      file_deps,
      module_deps,
    };
    if let Some(previous) = self.modules.insert(module.id(), module) {
      debug!(id = %previous.id(), "replaced previously registered module");
    }
  }

  pub fn get_module(&self, file: &str, name: &str) -> Option<&Module> {
    self.modules.get(&ModuleId::new(file, name))
  }

  /// Direct files of a module.
  ///
  /// Only `files` attributes contribute. Module references are not followed.
  pub fn get_files(&self, file: &str, name: &str) -> Result<Vec<String>, QueryError> {
    self.require_module(file, name).map(Module::files)
  }

  /// Direct module references of a module, without resolving them.
  pub fn module_deps(&self, file: &str, name: &str) -> Result<Vec<String>, QueryError> {
    self.require_module(file, name).map(Module::module_refs)
  }

  pub fn modules(&self) -> impl Iterator<Item = &Module> {
    self.modules.values()
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  /// Like [`Workspace::get_module`], but a missing module is a [`QueryError`].
  pub fn require_module(&self, file: &str, name: &str) -> Result<&Module, QueryError> {
    self.get_module(file, name).ok_or_else(|| QueryError::ModuleNotFound {
      file: file.to_string(),
      name: name.to_string(),
    })
  }
}
