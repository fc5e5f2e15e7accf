//! Lua bindings for `rule{}`.
//!
//! This module provides:
//! - `register_rule()` to register the `rule` global
//! - `create_rule_handler()` to build the callable a rule definition returns

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use mlua::prelude::*;
use tracing::{debug, trace};

use crate::attr::AttrKind;
use crate::attr::lua::lua_value_to_attr_kind;
use crate::error::DeclError;
use crate::lua::convert::{keyword_args, lua_value_to_string, lua_value_to_strings};
use crate::lua::scope::FileScope;
use crate::workspace::Workspace;

use super::{NAME_KEY, RuleSchema, ValidDeclaration};

/// Read the `attrs` table of a rule definition.
fn lua_value_to_schema_attrs(value: &LuaValue) -> Result<BTreeMap<String, AttrKind>, DeclError> {
  let LuaValue::Table(t) = value else {
    return Err(DeclError::ArgumentType {
      key: "attrs".to_string(),
      message: format!("expected a table of attribute kinds, got {}", value.type_name()),
    });
  };

  let mut attrs = BTreeMap::new();
  for pair in t.pairs::<LuaValue, LuaValue>() {
    let (k, v) = pair.map_err(|e| DeclError::ArgumentType {
      key: "attrs".to_string(),
      message: e.to_string(),
    })?;
    let name = lua_value_to_string("attrs", &k)?;
    attrs.insert(name, lua_value_to_attr_kind(&v));
  }
  Ok(attrs)
}

/// Parse the keyword arguments of `rule{}` into a schema.
fn parse_rule_args(args: LuaMultiValue) -> Result<RuleSchema, DeclError> {
  let mut attrs = BTreeMap::new();
  let mut types = Vec::new();
  for (key, value) in keyword_args(args)? {
    match key.as_str() {
      "attrs" => attrs = lua_value_to_schema_attrs(&value)?,
      "type" => types = lua_value_to_strings("type", &value)?,
      _ => return Err(DeclError::Schema { key }),
    }
  }
  RuleSchema::new(attrs, types)
}

/// Validate one handler invocation against `schema`.
fn parse_declaration(schema: &RuleSchema, args: LuaMultiValue) -> Result<ValidDeclaration, DeclError> {
  let mut decl = schema.declare();
  for (key, value) in keyword_args(args)? {
    if key == NAME_KEY {
      decl.set_name(lua_value_to_string(NAME_KEY, &value)?);
      continue;
    }
    schema.kind(&key)?;
    let items = lua_value_to_strings(&key, &value)?;
    decl.record(&key, items)?;
  }
  decl.finish()
}

/// Create the handler for a rule.
///
/// The handler owns its schema. Every successful call writes exactly one
/// module into `workspace`, attributed to the file its immediate caller is
/// written in. A declaration inside a helper function therefore belongs to
/// the file that defines the helper.
pub fn create_rule_handler(
  lua: &Lua,
  schema: RuleSchema,
  workspace: Rc<RefCell<Workspace>>,
  scope: FileScope,
) -> LuaResult<LuaFunction> {
  lua.create_function(move |lua, args: LuaMultiValue| {
    let decl = parse_declaration(&schema, args).map_err(LuaError::external)?;

    let Some(file) = scope.caller_file(lua, 1) else {
      return Err(LuaError::external(DeclError::MissingFileContext { name: decl.name }));
    };
    trace!(file = %file, chain = ?scope.chain(), name = %decl.name, "rule invoked");

    decl.register(&mut workspace.borrow_mut(), &file);
    Ok(())
  })
}

/// Register the `rule` global.
pub fn register_rule(lua: &Lua, workspace: Rc<RefCell<Workspace>>, scope: FileScope) -> LuaResult<()> {
  let rule_fn = lua.create_function(move |lua, args: LuaMultiValue| {
    let schema = parse_rule_args(args).map_err(LuaError::external)?;
    debug!(
      attrs = ?schema.attrs.keys().collect::<Vec<_>>(),
      types = ?schema.types,
      "define rule"
    );
    create_rule_handler(lua, schema, workspace.clone(), scope.clone())
  })?;

  lua.globals().set("rule", rule_fn)?;
  Ok(())
}
