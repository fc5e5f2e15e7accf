//! Lua bindings for the `attr` global.
//!
//! This module provides:
//! - `AttrKind` as LuaUserData with `kind` and `types` fields
//! - `register_attr()` to register `attr.files()` and `attr.modules()`
//! - `lua_value_to_attr_kind()` to read schema entries back from Lua

use std::collections::BTreeMap;

use mlua::prelude::*;

use crate::error::DeclError;
use crate::lua::convert::{keyword_args, lua_value_to_strings};

use super::AttrKind;

impl LuaUserData for AttrKind {
  fn add_fields<F: LuaUserDataFields<Self>>(fields: &mut F) {
    fields.add_field_method_get("kind", |_, this| Ok(this.as_str().to_string()));
    fields.add_field_method_get("types", |_, this| Ok(this.types().to_vec()));
  }

  fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
    methods.add_meta_method(LuaMetaMethod::ToString, |_, this, ()| Ok(this.to_string()));
  }
}

/// Classify a schema entry supplied to `rule{ attrs = {...} }`.
///
/// Values built by `attr.files()`/`attr.modules()` map to their kind. Any other
/// value is kept as [`AttrKind::Unsupported`] with its Lua type name.
pub fn lua_value_to_attr_kind(value: &LuaValue) -> AttrKind {
  if let LuaValue::UserData(ud) = value
    && let Ok(kind) = ud.borrow::<AttrKind>()
  {
    return (*kind).clone();
  }
  AttrKind::Unsupported {
    type_name: value.type_name().to_string(),
  }
}

/// Keyword arguments of an attribute constructor.
///
/// Constructors belong to the schema definition, so a positional argument is
/// a schema error rather than a declaration error.
fn constructor_args(args: LuaMultiValue) -> Result<BTreeMap<String, LuaValue>, DeclError> {
  keyword_args(args).map_err(|err| match err {
    DeclError::PositionalArgument => DeclError::Schema {
      key: "<positional>".to_string(),
    },
    other => other,
  })
}

/// `attr.files()`: takes no arguments.
fn attr_files(args: LuaMultiValue) -> Result<AttrKind, DeclError> {
  let kwargs = constructor_args(args)?;
  if let Some(key) = kwargs.keys().next() {
    return Err(DeclError::Schema { key: key.clone() });
  }
  Ok(AttrKind::Files)
}

/// `attr.modules { types = {...} }`: `types` is optional.
fn attr_modules(args: LuaMultiValue) -> Result<AttrKind, DeclError> {
  let mut types = Vec::new();
  for (key, value) in constructor_args(args)? {
    match key.as_str() {
      "types" => types = lua_value_to_strings("types", &value)?,
      _ => return Err(DeclError::Schema { key }),
    }
  }
  Ok(AttrKind::Modules { types })
}

/// Create the `attr` table and register it as a global.
pub fn register_attr(lua: &Lua) -> LuaResult<()> {
  let attr = lua.create_table()?;

  let files = lua.create_function(|_, args: LuaMultiValue| attr_files(args).map_err(LuaError::external))?;
  attr.set("files", files)?;

  let modules = lua.create_function(|_, args: LuaMultiValue| attr_modules(args).map_err(LuaError::external))?;
  attr.set("modules", modules)?;

  lua.globals().set("attr", attr)?;
  Ok(())
}
