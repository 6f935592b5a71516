//! `zone-gen diff-cpp` — show the unified diff of what generate-cpp would write.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use zonegen_core::GenerateConfig;
use zonegen_renderer::GeneratorKind;
use zonegen_writer::diff_output;

/// Arguments for `zone-gen diff-cpp`.
#[derive(Args, Debug)]
pub struct DiffArgs {}

impl DiffArgs {
    pub fn run(self, config: &GenerateConfig) -> Result<()> {
        let kind = GeneratorKind::ZoneInfo;
        let diff = diff_output(config, kind)
            .with_context(|| format!("diff failed for {}", kind.output_file_name()))?;

        let Some(diff) = diff else {
            println!(
                "No differences for '{}'.",
                kind.output_path(&config.output_dir).display()
            );
            return Ok(());
        };

        for line in diff.unified_diff.lines() {
            if line.starts_with("+++") || line.starts_with("---") {
                println!("{}", line.bold());
            } else if line.starts_with('+') {
                println!("{}", line.green());
            } else if line.starts_with('-') {
                println!("{}", line.red());
            } else if line.starts_with("@@") {
                println!("{}", line.cyan());
            } else {
                println!("{line}");
            }
        }
        Ok(())
    }
}
