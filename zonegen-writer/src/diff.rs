//! Dry-run unified diff support for `zone-gen diff-cpp`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use zonegen_core::GenerateConfig;
use zonegen_renderer::GeneratorKind;

use crate::{error::io_err, pipeline::render_output, GenerateError};

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render what `generate` would write and compare it to the file on disk.
///
/// Returns `None` when the output is already up to date. No files are written.
pub fn diff_output(
    config: &GenerateConfig,
    kind: GeneratorKind,
) -> Result<Option<FileDiff>, GenerateError> {
    let (path, rendered) = render_output(config, kind)?;
    let existing = read_existing_or_empty(&path)?;
    if existing == rendered {
        return Ok(None);
    }

    let name = kind.output_file_name();
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path,
        unified_diff: unified,
    }))
}

fn read_existing_or_empty(path: &Path) -> Result<String, GenerateError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::generate;

    use super::*;

    fn setup() -> (TempDir, TempDir, GenerateConfig) {
        let base = TempDir::new().expect("base");
        let out = TempDir::new().expect("out");
        fs::write(
            base.path().join("example.yaml"),
            "1:\n  minthermalrpm: 3000\n2:\n  minthermalrpm: 4000\n",
        )
        .expect("yaml");
        fs::write(
            base.path().join("writezone.cpp.tera"),
            "{% for zone, conf in ZoneDict %}{{ zone }} = {{ conf.minthermalrpm }}\n{% endfor %}",
        )
        .expect("template");
        let config = GenerateConfig::new(base.path()).with_output_dir(out.path());
        (base, out, config)
    }

    #[test]
    fn no_diff_after_clean_generate() {
        let (_base, _out, config) = setup();
        generate(&config, GeneratorKind::ZoneInfo, false).expect("generate");

        let diff = diff_output(&config, GeneratorKind::ZoneInfo).expect("diff");
        assert!(diff.is_none(), "generated output should have no diff");
    }

    #[test]
    fn missing_output_diffs_against_empty() {
        let (_base, out, config) = setup();
        let diff = diff_output(&config, GeneratorKind::ZoneInfo)
            .expect("diff")
            .expect("some diff");
        assert!(diff.unified_diff.contains("+1 = 3000"));
        assert!(!out.path().join("zoneinfo-gen.cpp").exists(), "diff must not write");
    }

    #[test]
    fn local_edit_produces_unified_diff() {
        let (_base, out, config) = setup();
        generate(&config, GeneratorKind::ZoneInfo, false).expect("generate");

        let target = out.path().join("zoneinfo-gen.cpp");
        fs::write(&target, "1 = 3000\n2 = 9999\n").expect("edit");

        let diff = diff_output(&config, GeneratorKind::ZoneInfo)
            .expect("diff")
            .expect("some diff");
        assert_eq!(diff.path, target);
        assert!(diff.unified_diff.contains("--- a/zoneinfo-gen.cpp"));
        assert!(diff.unified_diff.contains("+++ b/zoneinfo-gen.cpp"));
        assert!(diff.unified_diff.contains("@@"));
        assert!(diff.unified_diff.contains("-2 = 9999"));
        assert!(diff.unified_diff.contains("+2 = 4000"));
    }
}
