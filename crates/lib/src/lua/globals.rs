//! Global Lua values.
//!
//! This module registers the globals configuration files can use:
//! - `rule{}` - Define a rule from an attribute schema
//! - `attr.files()` / `attr.modules{}` - Attribute kinds for rule schemas
//! - `include(path)` - Evaluate another configuration file

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use mlua::prelude::*;

use super::loaders::register_include;
use super::scope::FileScope;
use crate::attr::lua::register_attr;
use crate::rule::lua::register_rule;
use crate::workspace::Workspace;

/// Register all host globals in the Lua runtime.
///
/// Rules write into `workspace`; `scope` supplies the declaring file; `root`
/// anchors file identifiers and `include` resolution.
pub fn register_globals(
  lua: &Lua,
  workspace: Rc<RefCell<Workspace>>,
  scope: FileScope,
  root: PathBuf,
) -> LuaResult<()> {
  register_attr(lua)?;
  register_rule(lua, workspace, scope.clone())?;
  register_include(lua, scope, root)?;
  Ok(())
}
