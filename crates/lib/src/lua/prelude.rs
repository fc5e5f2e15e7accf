//! Rules available to every configuration file.
//!
//! The prelude defines the conventional `module` rule and an `empty(name)`
//! helper that declares a module with no dependencies. Like any helper, `empty`
//! declares into the file that defines it, so its modules live under
//! `<prelude>`:
//!
//! ```lua
//! module { name = "a", srcs = { "a.go", "b.go" }, deps = {} }
//! empty "placeholder"
//! ```

use mlua::prelude::*;

use super::loaders::load_source_in_scope;
use super::scope::FileScope;
use crate::consts::PRELUDE_FILE_ID;

pub const PRELUDE: &str = r#"
module = rule {
  attrs = {
    srcs = attr.files(),
    deps = attr.modules(),
  },
}

function empty(name)
  module { name = name, srcs = {}, deps = {} }
end
"#;

/// Evaluate the prelude. Globals must already be registered.
pub fn load_prelude(lua: &Lua, scope: &FileScope) -> LuaResult<()> {
  load_source_in_scope(lua, scope, PRELUDE_FILE_ID, PRELUDE)?;
  Ok(())
}
