//! Generator configuration.
//!
//! Every path the pipeline touches is derived from a [`GenerateConfig`]
//! handed in by the caller. The CLI builds one from its flags; tests build
//! one around a `TempDir`.

use std::path::{Path, PathBuf};

use crate::error::ZoneError;
use crate::loader;

/// Input file used when none is given on the command line.
pub const DEFAULT_ZONEINFO_YAML: &str = "example.yaml";

/// Output directory used when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Environment variable overriding the base directory.
pub const BASE_DIR_ENV: &str = "ZONEGEN_BASE_DIR";

/// Paths for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Directory the input file and templates are resolved against.
    pub base_dir: PathBuf,
    /// Input zone YAML, relative to `base_dir` unless absolute.
    pub zoneinfo_yaml: PathBuf,
    /// Template directory, relative to `base_dir` unless absolute.
    /// `None` means the templates live in `base_dir` itself.
    pub template_dir: Option<PathBuf>,
    /// Directory the generated source is written into. Must already exist.
    pub output_dir: PathBuf,
}

impl GenerateConfig {
    /// Configuration rooted at `base_dir` with default input and output paths.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        GenerateConfig {
            base_dir: base_dir.into(),
            zoneinfo_yaml: PathBuf::from(DEFAULT_ZONEINFO_YAML),
            template_dir: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_zoneinfo_yaml(mut self, zoneinfo_yaml: impl Into<PathBuf>) -> Self {
        self.zoneinfo_yaml = zoneinfo_yaml.into();
        self
    }

    pub fn with_template_dir(mut self, template_dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(template_dir.into());
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Resolved path of the input zone YAML.
    pub fn input_path(&self) -> PathBuf {
        loader::input_path_at(&self.base_dir, &self.zoneinfo_yaml)
    }

    /// Resolved template directory.
    pub fn template_dir(&self) -> PathBuf {
        match &self.template_dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.clone(),
        }
    }
}

/// Directory containing the running executable, with symlinks resolved.
pub fn default_base_dir() -> Result<PathBuf, ZoneError> {
    let exe = std::env::current_exe().map_err(ZoneError::BaseDirNotFound)?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ZoneError::BaseDirNotFound(std::io::Error::other("executable has no parent directory"))
    })
}
