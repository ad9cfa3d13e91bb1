use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "zod-gen")]
#[command(version, about = "OpenAPI to TypeScript and Zod code generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript artifacts from an OpenAPI specification
  Generate(GenerateCommand),
  /// Write a default zod-gen.config.json to the working directory
  Init(InitCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path or URL of the OpenAPI specification (JSON or YAML)
  #[arg(short, long, value_name = "FILE|URL")]
  pub input: Option<String>,

  /// Directory where the generated TypeScript files are written
  #[arg(short, long, value_name = "DIR")]
  pub output: Option<PathBuf>,

  /// Skip the runtime validator artifact (schemas.ts)
  #[arg(long, default_value_t = false)]
  pub skip_schemas: bool,

  /// Skip the client binding artifact (api.ts)
  #[arg(long, default_value_t = false)]
  pub skip_paths: bool,

  /// Skip the structural declaration artifacts (types.ts, enums.ts, interfaces.ts)
  #[arg(long, default_value_t = false)]
  pub skip_components: bool,

  /// Read defaults from a JSON config file (zod-gen.config.json is picked up
  /// automatically when present)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct InitCommand {
  /// Default specification path or URL to record in the config
  #[arg(short, long, value_name = "FILE|URL")]
  pub input: Option<String>,

  /// Default output directory to record in the config
  #[arg(short, long, value_name = "DIR")]
  pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in the OpenAPI specification
  Operations {
    /// Path or URL of the OpenAPI specification
    #[arg(short, long, value_name = "FILE|URL")]
    input: String,
  },
  /// List all reusable schemas defined in the OpenAPI specification
  Schemas {
    /// Path or URL of the OpenAPI specification
    #[arg(short, long, value_name = "FILE|URL")]
    input: String,
  },
}
