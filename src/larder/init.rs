use crate::api::{LarderApi, LarderPaths};
use crate::config::LarderConfig;
use crate::error::{LarderError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "LARDER_HOME";

pub struct LarderContext {
    pub api: LarderApi<FileStore>,
}

/// `LARDER_HOME` when set and non-empty, else the platform data dir.
pub fn data_dir(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = home_override.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "larder", "larder")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LarderError::Api("Could not determine data directory".to_string()))
}

pub fn initialize() -> Result<LarderContext> {
    let data_dir = data_dir(std::env::var_os(HOME_ENV).map(PathBuf::from))?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = match LarderConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "unreadable config, using defaults");
            LarderConfig::default()
        }
    };

    let store = FileStore::new(data_dir.clone());
    let paths = LarderPaths { data_dir };
    let api = LarderApi::new(store, paths, config);

    Ok(LarderContext { api })
}
