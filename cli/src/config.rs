use serde::Deserialize;
use std::{
    env::{self, VarError},
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Default, Deserialize)]
pub struct PlanarConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    pub numeric: Option<String>,
}

impl PlanarConfig {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        let config = Self::load_from(&path)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Some(config)
    }

    /// Read and parse `path`. A missing file is not an error; unreadable or
    /// malformed files are logged and ignored.
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".planar").join("config.toml"))
}

/// Which coordinate type the CLI parses its arguments into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericMode {
    /// `i64`, with overflow reported as an error.
    #[default]
    Int,
    /// `f64`.
    Float,
}

pub const NUMERIC_ENV: &str = "PLANAR_NUMERIC";

impl NumericMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "int" => Some(NumericMode::Int),
            "float" => Some(NumericMode::Float),
            _ => None,
        }
    }

    pub fn from_config(config: Option<&PlanarConfig>) -> Option<Self> {
        let raw = config
            .and_then(|cfg| cfg.app.as_ref())
            .and_then(|app| app.numeric.as_ref())?;
        let mode = Self::parse(raw);
        if mode.is_none() {
            tracing::warn!("Unknown numeric mode in config: {}", raw);
        }
        mode
    }

    pub fn from_env() -> Option<Self> {
        let value = match env::var(NUMERIC_ENV) {
            Ok(value) => value,
            Err(VarError::NotPresent) => return None,
            Err(VarError::NotUnicode(raw)) => {
                tracing::warn!("Ignoring non-UTF-8 {} value: {:?}", NUMERIC_ENV, raw);
                return None;
            }
        };
        let mode = Self::parse(&value);
        if mode.is_none() {
            tracing::warn!("Ignoring unknown {} value: {}", NUMERIC_ENV, value);
        }
        mode
    }

    /// Environment wins over the config file; both fall back to `Int`.
    pub fn resolve(config: Option<&PlanarConfig>) -> Self {
        Self::from_env()
            .or_else(|| Self::from_config(config))
            .unwrap_or_default()
    }
}
