//! zone-gen — IPMI zone info parser and code generator.
//!
//! # Usage
//!
//! ```text
//! zone-gen generate-cpp [-i <zoneinfo_yaml>] [-o <output-dir>] [--dry-run]
//! zone-gen diff-cpp     [-i <zoneinfo_yaml>] [-o <output-dir>]
//! ```
//!
//! The input YAML and `writezone.cpp.tera` are looked up in the base
//! directory: `--base-dir`, `$ZONEGEN_BASE_DIR`, or the directory holding
//! this executable.

mod commands;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, generate::GenerateArgs};
use zonegen_core::{
    config::{self, BASE_DIR_ENV, DEFAULT_OUTPUT_DIR, DEFAULT_ZONEINFO_YAML},
    GenerateConfig,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "zone-gen",
    version,
    about = "IPMI Zone info parser and code generator",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input zone yaml file to parse, relative to the base directory.
    #[arg(
        short = 'i',
        long = "zoneinfo_yaml",
        value_name = "PATH",
        default_value = DEFAULT_ZONEINFO_YAML,
        global = true
    )]
    zoneinfo_yaml: PathBuf,

    /// Output directory.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        global = true
    )]
    output_dir: PathBuf,

    /// Directory the input yaml and templates are resolved against.
    /// Defaults to the directory containing this executable.
    #[arg(long, value_name = "DIR", env = BASE_DIR_ENV, global = true)]
    base_dir: Option<PathBuf>,

    /// Directory holding the templates, relative to the base directory.
    /// Defaults to the base directory itself.
    #[arg(long, value_name = "DIR", global = true)]
    template_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render zoneinfo-gen.cpp from the zone yaml.
    GenerateCpp(GenerateArgs),

    /// Show a unified diff of what generate-cpp would write.
    DiffCpp(DiffArgs),
}

impl Cli {
    /// Fold the path flags into an explicit [`GenerateConfig`].
    fn generate_config(&self) -> Result<GenerateConfig> {
        let base_dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => config::default_base_dir()?,
        };
        let mut config = GenerateConfig::new(base_dir)
            .with_zoneinfo_yaml(&self.zoneinfo_yaml)
            .with_output_dir(&self.output_dir);
        if let Some(dir) = &self.template_dir {
            config = config.with_template_dir(dir);
        }
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.generate_config()?;

    if !config.input_path().is_file() {
        bail!(
            "Can not find input yaml file {} (looked for {})",
            config.zoneinfo_yaml.display(),
            config.input_path().display()
        );
    }

    match cli.command {
        Commands::GenerateCpp(args) => args.run(&config),
        Commands::DiffCpp(args) => args.run(&config),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
