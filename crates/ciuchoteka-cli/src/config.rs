//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--data-dir`, applied by [`AppConfig::with_overrides`])
//! 2. Environment variables: `CIUCHOTEKA__SECTION__KEY`
//! 3. Config file (`--config FILE` or the platform default)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use ciuchoteka_core::{application::ASSUMED_CAPACITY_BYTES, domain::statistics};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::global::GlobalArgs;

const ENV_PREFIX: &str = "CIUCHOTEKA";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where and how the wardrobe is persisted.
    pub storage: StorageConfig,
    /// Statistics settings.
    pub stats: StatsConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Backup settings.
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
    /// Reject writes past the assumed 5 MiB capacity.
    pub enforce_quota: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub ranking_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            enforce_quota: true,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            ranking_limit: statistics::DEFAULT_RANKING_LIMIT,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file, and the environment.
    ///
    /// An explicit `config_file` must exist when `must_exist` is set; the
    /// default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), must_exist),
            None => (Self::config_path(), false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Apply flags that outrank every other source.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(dir) = &args.data_dir {
            self.storage.data_dir = Some(dir.clone());
        }
        if args.no_color {
            self.output.no_color = true;
        }
        self
    }

    /// Directory backing the storage medium.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".ciuchoteka"))
        })
    }

    /// Byte limit for the storage medium, if enforced.
    pub fn quota(&self) -> Option<u64> {
        self.storage.enforce_quota.then_some(ASSUMED_CAPACITY_BYTES)
    }

    /// Directory backups are written to.
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ciuchoteka.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".ciuchoteka.toml"))
    }

    /// The file `load` reads: `--config` if given, else the default.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "ciuchoteka", "ciuchoteka")
}
