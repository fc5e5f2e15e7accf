use std::collections::BTreeMap;

use crate::attr::AttrKind;
use crate::error::DeclError;
use crate::workspace::{FileDep, ModuleDep, Workspace};

/// Keyword that carries the module name in every declaration.
pub const NAME_KEY: &str = "name";

/// The attribute schema a rule was defined with.
///
/// `types` are the rule's module-type labels. They are stored for
/// introspection only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSchema {
  pub attrs: BTreeMap<String, AttrKind>,
  pub types: Vec<String>,
}

impl RuleSchema {
  pub fn new(attrs: BTreeMap<String, AttrKind>, types: Vec<String>) -> Result<Self, DeclError> {
    if attrs.contains_key(NAME_KEY) {
      return Err(DeclError::InvalidSchema(format!(
        "'{}' is reserved and cannot be declared as an attribute",
        NAME_KEY
      )));
    }
    Ok(Self { attrs, types })
  }

  /// Look up the kind of a declaration keyword.
  pub fn kind(&self, key: &str) -> Result<&AttrKind, DeclError> {
    self.attrs.get(key).ok_or_else(|| DeclError::UnknownAttribute { key: key.to_string() })
  }

  /// Start a declaration against this schema.
  pub fn declare(&self) -> Declaration<'_> {
    Declaration {
      schema: self,
      name: None,
      file_deps: BTreeMap::new(),
      module_deps: BTreeMap::new(),
    }
  }
}

/// A module declaration being validated against a [`RuleSchema`].
///
/// Keywords are fed in one at a time; [`Declaration::finish`] checks the
/// required `name` and yields a [`ValidDeclaration`].
#[derive(Debug)]
pub struct Declaration<'a> {
  schema: &'a RuleSchema,
  name: Option<String>,
  file_deps: BTreeMap<String, FileDep>,
  module_deps: BTreeMap<String, ModuleDep>,
}

impl Declaration<'_> {
  pub fn set_name(&mut self, name: String) {
    self.name = Some(name);
  }

  /// Record the items supplied for attribute `key`.
  ///
  /// `key` must already have been checked with [`RuleSchema::kind`].
  pub fn record(&mut self, key: &str, items: Vec<String>) -> Result<(), DeclError> {
    match self.schema.kind(key)? {
      AttrKind::Files => {
        self.file_deps.insert(key.to_string(), FileDep { items });
      }
      AttrKind::Modules { types } => {
        self.module_deps.insert(
          key.to_string(),
          ModuleDep {
            types: types.clone(),
            items,
          },
        );
      }
      AttrKind::Unsupported { type_name } => {
        return Err(DeclError::UnsupportedAttributeKind {
          key: key.to_string(),
          type_name: type_name.clone(),
        });
      }
    }
    Ok(())
  }

  pub fn finish(self) -> Result<ValidDeclaration, DeclError> {
    let name = match self.name {
      Some(name) if !name.is_empty() => name,
      _ => return Err(DeclError::MissingRequiredField),
    };
    Ok(ValidDeclaration {
      name,
      file_deps: self.file_deps,
      module_deps: self.module_deps,
    })
  }
}

/// A fully validated declaration, ready to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDeclaration {
  pub name: String,
  pub file_deps: BTreeMap<String, FileDep>,
  pub module_deps: BTreeMap<String, ModuleDep>,
}

impl ValidDeclaration {
  pub fn register(self, workspace: &mut Workspace, file: &str) {
    workspace.register_module(file, &self.name, self.file_deps, self.module_deps);
  }
}
