//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output: colored status
//! messages on stderr and plain or JSON results on stdout.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  eprintln!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stderr, |s| s.blue()),
    message
  );
}

/// Print a labelled list, one indented item per line.
pub fn print_list(label: &str, items: &[String]) {
  println!("{}:", label.if_supports_color(Stream::Stdout, |s| s.bold()));
  if items.is_empty() {
    println!("  {}", "(none)".if_supports_color(Stream::Stdout, |s| s.dimmed()));
  }
  for item in items {
    println!("  {} {}", symbols::ARROW, item);
  }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
