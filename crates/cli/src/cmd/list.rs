//! Implementation of the `mods list` command.

use std::path::Path;

use anyhow::Result;

use crate::output::{OutputFormat, print_info, print_json};

use super::load_workspace;

pub fn cmd_list(config: &Path, format: OutputFormat) -> Result<()> {
  let workspace = load_workspace(config)?;

  if format.is_json() {
    let ids: Vec<_> = workspace.modules().map(|m| m.id()).collect();
    return print_json(&ids);
  }

  for module in workspace.modules() {
    println!("{}", module.id());
  }
  print_info(&format!("{} module(s)", workspace.len()));
  Ok(())
}
