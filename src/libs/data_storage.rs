use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const VENDOR_NAME: &str = APP_METADATA_OWNER;
pub const APP_NAME: &str = APP_METADATA_NAME;

/// Platform data directory holding the task database and `config.json`.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Resolves `file_name` inside the data directory, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_path_creates_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("nested").join("dir");
        let storage = DataStorage::with_base_path(&base);

        let path = storage.get_path("tasks.db").unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join("tasks.db"));
    }
}
