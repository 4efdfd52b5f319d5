use std::path::PathBuf;

use engine_logging::engine_info;

use crate::{AtomicFileWriter, PersistError};

/// Destination for finished downloads.
pub trait DownloadSink: Send + Sync {
    /// Stores `content` under `filename` and returns where it ended up.
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError>;
}

/// Saves downloads as files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryDownloadSink {
    writer: AtomicFileWriter,
}

impl DirectoryDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir.into()),
        }
    }
}

impl DownloadSink for DirectoryDownloadSink {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        validate_download_name(filename)?;
        let path = self.writer.write(filename, content)?;
        engine_info!("saved {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}

/// Accepts plain file names only: no separators, control characters, or
/// names Windows reserves.
pub fn validate_download_name(name: &str) -> Result<(), PersistError> {
    let invalid = || PersistError::InvalidFilename(name.to_string());

    if name.trim().is_empty() || name == "." || name == ".." {
        return Err(invalid());
    }
    if name.chars().any(is_forbidden) {
        return Err(invalid());
    }
    let stem = name.split('.').next().unwrap_or(name);
    if is_reserved_windows_name(stem) {
        return Err(invalid());
    }
    Ok(())
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
