//! Error types for module declarations and registry queries.
//!
//! Declaration errors are raised from inside Lua callbacks and abort the whole
//! evaluation. Query errors are ordinary failures returned to the caller once
//! evaluation has completed.

/// Errors raised while defining rules or declaring modules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
  /// A keyword that `rule{}` or an attribute constructor does not accept.
  #[error("unexpected key: {key}")]
  Schema { key: String },

  /// A rule schema that is structurally invalid.
  #[error("invalid rule schema: {0}")]
  InvalidSchema(String),

  /// A value of the wrong shape where a string or string list was required.
  #[error("invalid value for '{key}': {message}")]
  ArgumentType { key: String, message: String },

  /// A declaration keyword that is not part of the rule's schema.
  #[error("unexpected key: {key}")]
  UnknownAttribute { key: String },

  /// The `name` keyword was absent or empty.
  #[error("name parameter is required")]
  MissingRequiredField,

  /// A declaration keyword whose schema entry is not an attribute kind.
  #[error("attribute '{key}' has unsupported kind '{type_name}'")]
  UnsupportedAttributeKind { key: String, type_name: String },

  /// Rule handlers only take keyword (table) arguments.
  #[error("positional arguments are not supported")]
  PositionalArgument,

  /// A rule handler was invoked while no configuration file was being evaluated.
  #[error("module '{name}' declared outside of a configuration file")]
  MissingFileContext { name: String },

  /// A configuration file includes itself, directly or transitively.
  #[error("include cycle: {}", chain.join(" -> "))]
  IncludeCycle { chain: Vec<String> },
}

/// Errors returned by workspace queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
  #[error("module not found: {name} (declared in {file})")]
  ModuleNotFound { file: String, name: String },
}
