//! Implementation of the `mods show` command.
//!
//! Prints every attribute a module was declared with: file attributes with
//! their paths, and module attributes with their references and allowed types.

use std::path::Path;

use anyhow::Result;

use crate::output::{OutputFormat, print_error, print_json, print_list};

use super::{declaring_file, load_workspace};

/// Returns `false` when the module does not exist.
pub fn cmd_show(config: &Path, name: &str, decl_file: Option<&str>, format: OutputFormat) -> Result<bool> {
  let workspace = load_workspace(config)?;
  let file = declaring_file(config, decl_file);

  let module = match workspace.require_module(&file, name) {
    Ok(module) => module,
    Err(e) => {
      print_error(&e.to_string());
      return Ok(false);
    }
  };

  if format.is_json() {
    print_json(module)?;
    return Ok(true);
  }

  println!("{}", module.id());
  for (attr, dep) in &module.file_deps {
    print_list(&format!("{} (files)", attr), &dep.items);
  }
  for (attr, dep) in &module.module_deps {
    let label = if dep.types.is_empty() {
      format!("{} (modules)", attr)
    } else {
      format!("{} (modules: {})", attr, dep.types.join(", "))
    };
    print_list(&label, &dep.items);
  }
  Ok(true)
}
