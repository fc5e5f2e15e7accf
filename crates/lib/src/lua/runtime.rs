use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use mlua::prelude::*;

use super::globals;
use super::scope::FileScope;
use crate::workspace::Workspace;

/// Create a new Lua runtime environment with the host globals registered.
///
/// Declarations made in the returned state are written to `workspace` and
/// attributed through `scope`. `root` is the workspace root directory.
pub fn create_runtime(workspace: Rc<RefCell<Workspace>>, scope: FileScope, root: PathBuf) -> LuaResult<Lua> {
  let lua = Lua::new();
  globals::register_globals(&lua, workspace, scope, root)?;
  Ok(lua)
}
