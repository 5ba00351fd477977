use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use catalog::{AssetCatalog, CatalogError, CatalogFile, StaticCatalog};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, info};

use crate::schemas::AppState;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "workspace/frontend/dist";

/// Optional config file in the working directory (any format `config` understands)
const CONFIG_FILE: &str = "asset-viewer";
const ENV_PREFIX: &str = "ASSET_VIEWER";

/// Host configuration: defaults, then `asset-viewer.{toml,yaml,json}`,
/// then `ASSET_VIEWER_*` environment variables, then CLI flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostConfig {
    pub bind_address: String,
    pub static_dir: PathBuf,
    /// Catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            catalog_path: None,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

impl HostConfig {
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bind_address) = overrides.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.static_dir = static_dir;
        }
        if overrides.catalog_path.is_some() {
            self.catalog_path = overrides.catalog_path;
        }
        self
    }
}

/// Load layered configuration
pub fn load_config() -> Result<HostConfig> {
    load_config_from(CONFIG_FILE)
}

/// Layer defaults, the optional file `<config_file>.{toml,yaml,json}`, then the environment.
pub fn load_config_from(config_file: &str) -> Result<HostConfig> {
    let settings = Config::builder()
        .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
        .set_default("static_dir", DEFAULT_STATIC_DIR)?
        .add_source(File::with_name(config_file).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?;

    let config: HostConfig = settings.try_deserialize()?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Errors raised while reading a catalog file
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported catalog file extension for {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("failed to parse YAML catalog {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse JSON catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Read and validate a catalog file, picking the parser by extension.
pub fn load_catalog_file(path: &Path) -> Result<StaticCatalog, CatalogLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let file: CatalogFile = match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).map_err(|source| CatalogLoadError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        Some("json") => serde_json::from_str(&contents).map_err(|source| CatalogLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(CatalogLoadError::UnsupportedFormat(path.to_path_buf())),
    };

    StaticCatalog::new(file.assets).map_err(|source| CatalogLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// The configured catalog, or the built-in one
pub fn load_catalog(config: &HostConfig) -> Result<StaticCatalog, CatalogLoadError> {
    match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            load_catalog_file(path)
        }
        None => {
            debug!("Using built-in catalog");
            Ok(StaticCatalog::builtin())
        }
    }
}

/// Initialize application state from configuration
pub fn initialize_app_state(config: &HostConfig) -> Result<AppState> {
    let catalog = load_catalog(config)?;
    info!("Catalog ready with {} assets", catalog.len());

    Ok(AppState {
        catalog: Arc::new(catalog),
    })
}
