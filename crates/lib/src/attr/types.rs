use std::fmt;

use serde::Serialize;

/// The kind of a single rule attribute.
///
/// `Unsupported` records a schema entry that was not produced by the `attr`
/// constructors. It is accepted when the rule is defined and rejected as soon
/// as a declaration supplies that attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttrKind {
  Files,
  Modules { types: Vec<String> },
  Unsupported { type_name: String },
}

impl AttrKind {
  /// Build a `modules` kind with the given allowed types.
  pub fn modules<I, S>(types: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    AttrKind::Modules {
      types: types.into_iter().map(Into::into).collect(),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      AttrKind::Files => "files",
      AttrKind::Modules { .. } => "modules",
      AttrKind::Unsupported { type_name } => type_name,
    }
  }

  /// Allowed module types, empty for every kind but `Modules`.
  pub fn types(&self) -> &[String] {
    match self {
      AttrKind::Modules { types } => types,
      _ => &[],
    }
  }
}

impl fmt::Display for AttrKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AttrKind::Files => write!(f, "files"),
      AttrKind::Modules { types } => write!(f, "modules: types=[{}]", types.join(", ")),
      AttrKind::Unsupported { type_name } => write!(f, "unsupported: {}", type_name),
    }
  }
}
