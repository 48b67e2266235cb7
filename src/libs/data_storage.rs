//! Platform-specific location of crewsheet's files.
//!
//! - Linux: `$HOME/.local/share/crewsheet/crewsheet/`
//! - macOS: `$HOME/Library/Application Support/crewsheet/crewsheet/`
//! - Windows: `%LOCALAPPDATA%\crewsheet\crewsheet\`

use anyhow::Result;
use std::env::consts::OS;
use std::env::var_os;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "crewsheet";
pub const APP_NAME: &str = "crewsheet";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let home = || var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
        let root = match OS {
            "windows" => var_os("LOCALAPPDATA").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
            "macos" => home().join("Library").join("Application Support"),
            _ => home().join(".local").join("share"),
        };

        Self {
            base_path: root.join(VENDOR_NAME).join(APP_NAME),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
