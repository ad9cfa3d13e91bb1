use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    artifacts::{GeneratedArtifact, GenerationResult},
    orchestrator::{ArtifactGenerator, GeneratorConfig},
    spec_index::SpecIndex,
  },
  ui::{Colors, GenerateCommand},
  utils::spec::SpecLoader,
};

pub(super) const CONFIG_FILE: &str = "zod-gen.config.json";

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// Defaults read from a JSON config file. CLI flags take precedence; the
/// generator core only ever sees the fully resolved values.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct FileConfig {
  pub input: Option<String>,
  pub output: Option<PathBuf>,
  pub include_schemas: bool,
  pub include_paths: bool,
  pub include_components: bool,
}

impl Default for FileConfig {
  fn default() -> Self {
    Self {
      input: None,
      output: None,
      include_schemas: true,
      include_paths: true,
      include_components: true,
    }
  }
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: String,
  pub output: PathBuf,
  pub generator: GeneratorConfig,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub async fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let file = load_file_config(command.config.as_deref()).await?;

    let Some(input) = command.input.or(file.input) else {
      anyhow::bail!("Input specification is required. Use --input or configure it in {CONFIG_FILE}.");
    };
    let output = command
      .output
      .or(file.output)
      .unwrap_or_else(|| PathBuf::from("./generated"));

    let generator = GeneratorConfig::builder()
      .include_schemas(file.include_schemas && !command.skip_schemas)
      .include_paths(file.include_paths && !command.skip_paths)
      .include_components(file.include_components && !command.skip_components)
      .build();

    Ok(Self {
      input,
      output,
      generator,
      verbose: command.verbose,
      quiet: command.quiet,
    })
  }
}

/// An explicit `--config` must exist and parse; the well-known file name is
/// only picked up when present.
async fn load_file_config(path: Option<&Path>) -> anyhow::Result<FileConfig> {
  match path {
    Some(path) => {
      let content = tokio::fs::read(path).await?;
      Ok(serde_json::from_slice(&content)?)
    }
    None => match tokio::fs::read(CONFIG_FILE).await {
      Ok(content) => Ok(serde_json::from_slice(&content)?),
      Err(_) => Ok(FileConfig::default()),
    },
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.input)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating TypeScript artifacts...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, index: &SpecIndex, result: &GenerationResult) {
    if self.config.quiet {
      return;
    }

    self.stat("Schemas indexed:", index.schemas().len().to_string());
    self.stat("Operations indexed:", index.operations().len().to_string());
    let emitted = result
      .artifacts
      .iter()
      .filter(|artifact| !artifact.content.is_empty())
      .count();
    self.stat("Artifacts emitted:", emitted.to_string());
    if !result.warnings.is_empty() {
      self.stat("Warnings:", result.warnings.len().to_string());
    }
    if !result.errors.is_empty() {
      self.stat("Errors:", result.errors.len().to_string());
    }
  }

  fn print_faults(&self, result: &GenerationResult) {
    for error in &result.errors {
      eprintln!(
        "{} {}",
        "Error:".with(self.colors.accent()),
        error.to_string().with(self.colors.primary())
      );
    }

    if self.config.quiet {
      return;
    }
    for warning in &result.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_written(&self, artifact: &GeneratedArtifact) {
    if self.config.verbose {
      self.info(&format!("Generated: {}", artifact.logical_name));
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript artifacts".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = SpecLoader::open(&config.input).await?.parse()?;

  logger.log_generating();
  let index = SpecIndex::new(document);
  let generator = ArtifactGenerator::from_index(&index, config.generator.clone());
  let result = generator.generate();

  logger.print_statistics(&index, &result);

  logger.log_writing();
  tokio::fs::create_dir_all(&config.output).await?;
  for artifact in &result.artifacts {
    if artifact.content.is_empty() {
      continue;
    }
    tokio::fs::write(config.output.join(artifact.kind.file_name()), &artifact.content).await?;
    logger.log_written(artifact);
  }

  logger.print_faults(&result);
  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  fn command(input: Option<&str>) -> GenerateCommand {
    GenerateCommand {
      input: input.map(String::from),
      output: None,
      skip_schemas: false,
      skip_paths: false,
      skip_components: false,
      config: None,
      verbose: false,
      quiet: false,
    }
  }

  #[tokio::test]
  async fn test_input_is_required() {
    let result = GenerateConfig::from_command(command(None)).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Input specification is required"));
  }

  #[tokio::test]
  async fn test_defaults_resolve() {
    let config = GenerateConfig::from_command(command(Some("openapi.json"))).await.unwrap();
    assert_eq!(config.input, "openapi.json");
    assert_eq!(config.output, PathBuf::from("./generated"));
    assert!(config.generator.include_schemas);
    assert!(config.generator.include_paths);
    assert!(config.generator.include_components);
  }

  #[tokio::test]
  async fn test_skip_flags_disable_categories() {
    let mut cmd = command(Some("openapi.json"));
    cmd.skip_schemas = true;
    cmd.skip_components = true;
    let config = GenerateConfig::from_command(cmd).await.unwrap();
    assert!(!config.generator.include_schemas);
    assert!(config.generator.include_paths);
    assert!(!config.generator.include_components);
  }

  #[tokio::test]
  async fn test_cli_flags_override_config_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
      file,
      r#"{{"input": "from-config.yaml", "output": "out", "includePaths": false}}"#
    )
    .unwrap();

    let mut cmd = command(Some("from-cli.json"));
    cmd.config = Some(file.path().to_path_buf());
    let config = GenerateConfig::from_command(cmd).await.unwrap();

    assert_eq!(config.input, "from-cli.json");
    assert_eq!(config.output, PathBuf::from("out"));
    assert!(!config.generator.include_paths);
  }

  #[tokio::test]
  async fn test_explicit_config_file_must_exist() {
    let mut cmd = command(Some("openapi.json"));
    cmd.config = Some(PathBuf::from("/definitely/not/here.json"));
    assert!(GenerateConfig::from_command(cmd).await.is_err());
  }
}
