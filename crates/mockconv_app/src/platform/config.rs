use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::engine_info;
use mockconv_core::{STEP_INTERVAL_MS, UPLOAD_DELAY_MS};
use mockconv_engine::{AtomicFileWriter, PersistError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILENAME: &str = "mockconv.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where downloads are saved.
    pub output_dir: PathBuf,
    pub upload_delay_ms: u64,
    pub step_interval_ms: u64,
    /// Optional log file in addition to the terminal.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("downloads"),
            upload_delay_ms: UPLOAD_DELAY_MS,
            step_interval_ms: STEP_INTERVAL_MS,
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write settings: {0}")]
    Write(#[from] PersistError),
}

/// Loads settings from `explicit`, or from `./mockconv.ron` when it exists.
///
/// An explicit path must exist; the implicit default may be absent.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config = parse(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    engine_info!("Loaded settings from {:?}", path);
    Ok(config)
}

pub fn parse(content: &str) -> Result<AppConfig, ron::error::SpannedError> {
    ron::from_str(content)
}

/// Writes `config` to `path` as pretty RON.
pub fn save(path: &Path, config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let content = ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::new())?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILENAME.to_string());
    let writer = AtomicFileWriter::new(dir);
    Ok(writer.write(&filename, content.as_bytes())?)
}
