//! UTF-8 temporary directories and capability-based file helpers.

use std::io::{Read, Write};

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use tempfile::TempDir;

/// A temporary directory with a UTF-8 path, removed on drop.
#[derive(Debug)]
pub struct Utf8TempDir {
    _guard: TempDir,
    path: Utf8PathBuf,
}

impl Utf8TempDir {
    /// Creates a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// UTF-8.
    pub fn new() -> Result<Self> {
        let guard = tempfile::tempdir().context("create temp dir")?;
        let path = Utf8PathBuf::from_path_buf(guard.path().to_path_buf())
            .map_err(|path| anyhow!("temp dir is not UTF-8: {}", path.display()))?;
        Ok(Self {
            _guard: guard,
            path,
        })
    }

    /// Absolute path of the directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory or the file cannot be written.
    pub fn write(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        let dir = self.open()?;
        if let Some(parent) = Utf8Path::new(relative).parent().filter(|p| !p.as_str().is_empty()) {
            dir.create_dir_all(parent)
                .with_context(|| format!("create {parent}"))?;
        }
        let mut file = dir
            .open_with(
                relative,
                OpenOptions::new().write(true).create(true).truncate(true),
            )
            .with_context(|| format!("open {relative}"))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("write {relative}"))?;
        Ok(self.path.join(relative))
    }

    /// Reads `relative` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn read(&self, relative: &str) -> Result<String> {
        let mut file = self
            .open()?
            .open(relative)
            .with_context(|| format!("open {relative}"))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("read {relative}"))?;
        Ok(contents)
    }

    /// Returns `true` when `relative` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn exists(&self, relative: &str) -> Result<bool> {
        Ok(self.open()?.exists(relative))
    }

    fn open(&self) -> Result<Dir> {
        Dir::open_ambient_dir(&self.path, ambient_authority())
            .with_context(|| format!("open {}", self.path))
    }
}
