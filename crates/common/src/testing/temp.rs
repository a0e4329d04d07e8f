//! Temporary directory helpers

#![allow(clippy::missing_panics_doc)]

use std::path::{Path, PathBuf};

/// Temporary directory removed on drop.
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

impl TempDir {
    pub fn new(prefix: &str) -> std::io::Result<Self> {
        let inner = tempfile::Builder::new().prefix(prefix).tempdir()?;
        Ok(Self { inner })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Path of `name` inside the directory. The file is not created.
    pub fn child(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }

    /// Write `contents` to `name` inside the directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.child(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
