//! Global context for Folio operations.
//!
//! Provides centralized access to configuration, paths, and environment.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::util::config::{load_config, Config};

/// Project-local settings directory.
pub const PROJECT_DIR_NAME: &str = ".folio";

/// Project directories for Folio
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("org", "folio", "folio"));

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global Folio data
    home: PathBuf,

    /// Global config directory, if the platform has one
    config_dir: Option<PathBuf>,

    /// Merged configuration
    config: Config,
}

impl GlobalContext {
    /// Create a new GlobalContext for the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let (home, config_dir) = match PROJECT_DIRS.as_ref() {
            Some(dirs) => (
                dirs.data_dir().to_path_buf(),
                Some(dirs.config_dir().to_path_buf()),
            ),
            None => (cwd.join(PROJECT_DIR_NAME), None),
        };

        let global_path = config_dir.as_ref().map(|d| d.join("config.toml"));
        let project_path = cwd.join(PROJECT_DIR_NAME).join("config.toml");
        let config = load_config(global_path.as_deref(), &project_path);

        GlobalContext {
            cwd,
            home,
            config_dir,
            config,
        }
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the global config file path.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|d| d.join("config.toml"))
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the package repository root.
    ///
    /// An explicit override wins over `repository.root` from config, which
    /// wins over the per-user default. Relative paths are taken from the
    /// working directory.
    pub fn repository_root(&self, explicit: Option<&Path>) -> PathBuf {
        let root = explicit
            .map(Path::to_path_buf)
            .or_else(|| self.config.repository.root.clone())
            .unwrap_or_else(|| self.home.join("repository"));

        if root.is_absolute() {
            root
        } else {
            self.cwd.join(root)
        }
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
