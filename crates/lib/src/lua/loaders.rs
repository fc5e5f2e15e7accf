//! Loading configuration files into the Lua state.
//!
//! Every file runs inside [`FileScope`] under its file identifier and with its
//! own environment table. The environment exposes `__file` and forwards
//! reads and writes to `_G`, so globals defined by one file (rules, helper
//! functions) are visible to the files evaluated after it.
//!
//! The `include(path)` global evaluates another file, resolved relative to the
//! directory of the file that includes it.

use std::fs;
use std::path::{Component, Path, PathBuf};

use mlua::prelude::*;
use tracing::debug;

use super::scope::FileScope;

/// Identifier of a file: its path relative to `root`, with `/` separators.
///
/// Files outside `root` keep their full path.
pub fn file_id(root: &Path, path: &Path) -> String {
  match path.strip_prefix(root) {
    Ok(relative) => relative
      .components()
      .filter_map(|c| match c {
        Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
        _ => None,
      })
      .collect::<Vec<_>>()
      .join("/"),
    Err(_) => path.to_string_lossy().replace('\\', "/"),
  }
}

/// Evaluate `source` as the file `file` and return the chunk's result.
pub fn load_source_in_scope(lua: &Lua, scope: &FileScope, file: &str, source: &str) -> LuaResult<LuaValue> {
  let _guard = scope.enter(file).map_err(LuaError::external)?;
  debug!(file = %file, "loading config file");

  let env = lua.create_table()?;
  env.set("__file", file)?;

  // Inherit from _G via metatable
  let mt = lua.create_table()?;
  mt.set("__index", lua.globals())?;
  mt.set("__newindex", lua.globals())?;
  env.set_metatable(Some(mt))?;

  lua
    .load(source)
    .set_name(format!("@{}", file))
    .set_environment(env)
    .eval::<LuaValue>()
}

/// Read and evaluate the file at `path`, identified relative to `root`.
pub fn load_file_in_scope(lua: &Lua, scope: &FileScope, root: &Path, path: &Path) -> LuaResult<LuaValue> {
  let canonical_path = dunce::canonicalize(path)
    .map_err(|e| LuaError::external(format!("cannot resolve '{}': {}", path.display(), e)))?;

  let content = fs::read_to_string(&canonical_path)
    .map_err(|e| LuaError::external(format!("cannot read '{}': {}", canonical_path.display(), e)))?;

  let file = file_id(root, &canonical_path);
  load_source_in_scope(lua, scope, &file, &content)
}

/// Resolve an `include` argument against the including file's directory.
fn resolve_include(root: &Path, current: Option<&str>, target: &str) -> PathBuf {
  let target = Path::new(target);
  if target.is_absolute() {
    return target.to_path_buf();
  }

  let base = current
    .map(|file| root.join(file))
    .and_then(|path| path.parent().map(Path::to_path_buf))
    .unwrap_or_else(|| root.to_path_buf());
  base.join(target)
}

/// Register the `include(path)` global.
pub fn register_include(lua: &Lua, scope: FileScope, root: PathBuf) -> LuaResult<()> {
  let include = lua.create_function(move |lua, target: String| {
    let current = scope.current();
    let path = resolve_include(&root, current.as_deref(), &target);
    debug!(from = ?current, path = ?path, "include");
    load_file_in_scope(lua, &scope, &root, &path)?;
    Ok(())
  })?;

  lua.globals().set("include", include)?;
  Ok(())
}
