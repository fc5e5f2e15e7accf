mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mods_lib::consts::DEFAULT_CONFIG_FILE;

use cmd::{cmd_files, cmd_list, cmd_show};
use output::OutputFormat;

/// mods - query module declarations in build configuration files
#[derive(Parser)]
#[command(name = "mods")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Path to the configuration file
  #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
  file: PathBuf,

  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the files a module directly depends on
  Files {
    /// Module name
    name: String,

    /// File that declares the module (default: the configuration file)
    #[arg(long = "in", value_name = "DECL_FILE")]
    decl_file: Option<String>,
  },

  /// List every declared module
  List,

  /// Show all attributes of a module
  Show {
    /// Module name
    name: String,

    /// File that declares the module (default: the configuration file)
    #[arg(long = "in", value_name = "DECL_FILE")]
    decl_file: Option<String>,
  },
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let found = match cli.command {
    Commands::Files { name, decl_file } => cmd_files(&cli.file, &name, decl_file.as_deref(), cli.output)?,
    Commands::List => {
      cmd_list(&cli.file, cli.output)?;
      true
    }
    Commands::Show { name, decl_file } => cmd_show(&cli.file, &name, decl_file.as_deref(), cli.output)?,
  };

  Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
