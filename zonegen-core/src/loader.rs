//! Zone YAML loading.
//!
//! Input paths are resolved against an explicit base directory, never the
//! process working directory. Absolute input paths are used as given.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::{io_err, ZoneError};
use crate::types::ZoneDict;

/// `<base_dir>/<zoneinfo_yaml>` — pure, no I/O.
pub fn input_path_at(base_dir: &Path, zoneinfo_yaml: &Path) -> PathBuf {
    base_dir.join(zoneinfo_yaml)
}

/// Decode zone YAML text. `path` is only used to annotate errors.
///
/// Empty or whitespace-only documents decode to an empty dictionary, as do
/// documents whose top level is not a mapping. `<<` merge keys are resolved.
pub fn parse_zone_dict(contents: &str, path: &Path) -> Result<ZoneDict, ZoneError> {
    if contents.trim().is_empty() {
        tracing::debug!(path = %path.display(), "zone yaml is empty");
        return Ok(ZoneDict::new());
    }
    let parse_err = |source| ZoneError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let mut value: Value = serde_yaml::from_str(contents).map_err(parse_err)?;
    value.apply_merge().map_err(parse_err)?;
    Ok(ZoneDict::from_value(value))
}

/// Read and decode the zone YAML file at `path`.
///
/// Returns `ZoneError::InputNotFound` if `path` is not a file and
/// `ZoneError::Parse` (with path + line context) if the YAML is malformed.
pub fn load_zone_dict(path: &Path) -> Result<ZoneDict, ZoneError> {
    if !path.is_file() {
        return Err(ZoneError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let dict = parse_zone_dict(&contents, path)?;
    tracing::debug!(path = %path.display(), entries = dict.len(), "loaded zone yaml");
    Ok(dict)
}

/// `load_zone_dict` for `<base_dir>/<zoneinfo_yaml>`.
pub fn load_zone_dict_at(base_dir: &Path, zoneinfo_yaml: &Path) -> Result<ZoneDict, ZoneError> {
    load_zone_dict(&input_path_at(base_dir, zoneinfo_yaml))
}
