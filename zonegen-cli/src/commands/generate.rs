//! `zone-gen generate-cpp` — render and write the zone table source.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use zonegen_core::GenerateConfig;
use zonegen_renderer::GeneratorKind;
use zonegen_writer::{generate, WriteResult};

/// Arguments for `zone-gen generate-cpp`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Show what would be written without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn run(self, config: &GenerateConfig) -> Result<()> {
        let kind = GeneratorKind::ZoneInfo;
        let result = generate(config, kind, self.dry_run).with_context(|| {
            format!(
                "failed to generate {} from '{}'",
                kind.output_file_name(),
                config.input_path().display()
            )
        })?;
        print_result(&result, self.dry_run);
        Ok(())
    }
}

fn print_result(result: &WriteResult, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let (marker, label) = match result {
        WriteResult::Written { .. } => ("✎".green(), "written"),
        WriteResult::WouldWrite { .. } => ("~".yellow(), "would write"),
        WriteResult::Unchanged { .. } => ("·".dimmed(), "unchanged"),
    };
    println!("{prefix}{marker}  {} ({label})", result.path().display());
}
