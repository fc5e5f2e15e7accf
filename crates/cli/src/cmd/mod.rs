mod files;
mod list;
mod show;

pub use files::cmd_files;
pub use list::cmd_list;
pub use show::cmd_show;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use mods_lib::Workspace;
use mods_lib::eval::{entry_file_id, evaluate_config};

/// Evaluate the configuration, failing the whole command on any error.
fn load_workspace(config: &Path) -> Result<Workspace> {
  let workspace = evaluate_config(config)
    .map_err(|err| anyhow::anyhow!("{err}"))
    .with_context(|| format!("Failed to evaluate config: {}", config.display()))?;
  debug!(config = %config.display(), modules = workspace.len(), "workspace loaded");
  Ok(workspace)
}

/// The declaring file a query refers to, defaulting to the entry file.
fn declaring_file(config: &Path, decl_file: Option<&str>) -> String {
  decl_file.map(str::to_string).unwrap_or_else(|| entry_file_id(config))
}
