use anyhow::{Context, Result};
use notekeep::infrastructure::LocalBackend;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture owning a temporary backend data directory
#[allow(dead_code)]
pub struct TestBackend {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub staging_dir: PathBuf,
}

#[allow(dead_code)]
impl TestBackend {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_dir = temp_dir.path().join("backend");
        let staging_dir = temp_dir.path().join("staging");
        std::fs::create_dir_all(&staging_dir).context("Failed to create staging directory")?;

        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
            staging_dir,
        })
    }

    /// Open the backend for this data directory (creates it on first use)
    pub fn open(&self) -> Result<LocalBackend> {
        LocalBackend::new(&self.data_dir)
    }

    /// Write a small local file standing in for an image selected in the form
    pub fn write_image(&self, file_name: &str) -> Result<PathBuf> {
        let path = self.staging_dir.join(file_name);
        std::fs::write(&path, b"\x89PNG test bytes").context("Failed to write test image")?;
        Ok(path)
    }
}
