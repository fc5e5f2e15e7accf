//! Implementation of the `mods files` command.
//!
//! Evaluates the configuration and prints the files a module declares
//! directly. Module dependencies are not followed.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::output::{OutputFormat, print_error, print_json};

use super::{declaring_file, load_workspace};

#[derive(Serialize)]
struct FilesOutput<'a> {
  file: &'a str,
  name: &'a str,
  files: &'a [String],
}

/// Returns `false` when the module does not exist.
pub fn cmd_files(config: &Path, name: &str, decl_file: Option<&str>, format: OutputFormat) -> Result<bool> {
  let workspace = load_workspace(config)?;
  let file = declaring_file(config, decl_file);

  let files = match workspace.get_files(&file, name) {
    Ok(files) => files,
    Err(e) => {
      print_error(&e.to_string());
      return Ok(false);
    }
  };

  if format.is_json() {
    print_json(&FilesOutput {
      file: &file,
      name,
      files: &files,
    })?;
  } else {
    for f in &files {
      println!("{}", f);
    }
  }
  Ok(true)
}
