//! Runtime configuration loaded from `.riskmap.toml`.
//!
//! Configuration covers output preferences and collaborator locations
//! only. The risk bands, compliance bands, and question weights are
//! fixed business rules and deliberately not configurable.

use crate::errors::{RiskmapError, RiskmapResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".riskmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskmapConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub company: CompanyDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format when no --format flag is given
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the per-user data directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Custom question catalog; the built-in one is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Company metadata applied when the assess command omits the flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyDefaults {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub annual_revenue: Option<f64>,
}

impl RiskmapConfig {
    /// Load configuration with an explicit search order: the given path
    /// if any (missing file is an error there), else `.riskmap.toml` in
    /// the current directory, else defaults.
    pub fn load(explicit: Option<&Path>) -> RiskmapResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if local.exists() {
                    Self::from_file(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> RiskmapResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = parse_and_validate_config(&contents)
            .map_err(|e| RiskmapError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

fn parse_and_validate_config(contents: &str) -> Result<RiskmapConfig, String> {
    let config: RiskmapConfig =
        toml::from_str(contents).map_err(|e| format!("failed to parse: {e}"))?;
    match config.output.default_format.as_str() {
        "terminal" | "json" | "markdown" => Ok(config),
        other => Err(format!(
            "unknown default_format '{other}' (expected terminal, json, or markdown)"
        )),
    }
}
