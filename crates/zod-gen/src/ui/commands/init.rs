use std::path::PathBuf;

use crossterm::style::Stylize;

use super::generate::{CONFIG_FILE, FileConfig};
use crate::ui::{Colors, InitCommand};

const DEFAULT_SPEC_URL: &str = "https://petstore3.swagger.io/api/v3/openapi.json";

/// Writes a starter config so later `generate` runs need no flags.
pub async fn init_config(command: InitCommand, colors: &Colors) -> anyhow::Result<()> {
  let config = FileConfig {
    input: command.input.or_else(|| Some(DEFAULT_SPEC_URL.to_string())),
    output: command.output.or_else(|| Some(PathBuf::from("./generated"))),
    ..FileConfig::default()
  };

  let body = serde_json::to_string_pretty(&config)?;
  tokio::fs::write(CONFIG_FILE, body).await?;

  println!(
    "{} {}",
    "Created".with(colors.success()),
    CONFIG_FILE.with(colors.primary())
  );
  println!("Run 'zod-gen generate' to generate your first artifacts");
  Ok(())
}
