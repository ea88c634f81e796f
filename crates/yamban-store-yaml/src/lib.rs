//! YAML-backed persistence for yamban boards.
//!
//! The whole board lives in one YAML document. Every write replaces the
//! document atomically — serialize, write to a sibling temporary file,
//! fsync, rename over the target — so a reader always observes either
//! the old or the new complete document, never a torn one.

mod error;

pub use error::YamlStoreError;
pub use tokio::sync::Notify;

use std::ffi::OsStr;
use std::fs;
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use yamban_core::BoardDocument;

/// Handle to the on-disk board document.
#[derive(Debug)]
pub struct BoardFile {
    path: PathBuf,
    changed: Arc<Notify>,
}

impl BoardFile {
    /// Attach to `path` without touching the filesystem.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            changed: Arc::new(Notify::new()),
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Edge-triggered, auto-resetting signal fired after each successful
    /// write. Carries no payload; observers re-read the file themselves.
    #[must_use]
    pub fn change_signal(&self) -> Arc<Notify> {
        Arc::clone(&self.changed)
    }

    /// Read the document from disk.
    ///
    /// An absent file and a document that is valid YAML but not a
    /// mapping (an empty file, a bare list, a scalar) both yield the
    /// empty board.
    ///
    /// # Errors
    /// Returns [`YamlStoreError::Io`] when the file exists but cannot be
    /// read, and [`YamlStoreError::Parse`] on YAML syntax errors or a
    /// mapping whose fields have the wrong shape.
    pub fn load(&self) -> Result<BoardDocument, YamlStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(BoardDocument::default());
            }
            Err(err) => return Err(YamlStoreError::Io(err)),
        };

        if raw.trim().is_empty() {
            return Ok(BoardDocument::default());
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(&raw).map_err(YamlStoreError::Parse)?;
        if !value.is_mapping() {
            tracing::warn!(
                path = %self.path.display(),
                "board document is not a mapping, starting empty"
            );
            return Ok(BoardDocument::default());
        }
        serde_yaml::from_value(value).map_err(YamlStoreError::Parse)
    }

    /// Replace the document on disk with `doc` and fire the change
    /// signal.
    ///
    /// # Errors
    /// Returns [`YamlStoreError::Serialize`] when the document cannot be
    /// rendered and [`YamlStoreError::Io`] when the temporary file or
    /// the final rename fails.
    pub fn write(&self, doc: &BoardDocument) -> Result<(), YamlStoreError> {
        let body = serde_yaml::to_string(doc).map_err(YamlStoreError::Serialize)?;

        let tmp = self.temp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(body.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        self.changed.notify_waiters();
        tracing::debug!(
            path = %self.path.display(),
            tasks = doc.tasks.len(),
            "board persisted"
        );
        Ok(())
    }

    // Sibling of the target so the final rename never crosses a
    // filesystem boundary.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .unwrap_or_else(|| OsStr::new("board"))
            .to_os_string();
        name.push(format!(".tmp.{}", process::id()));
        self.path.with_file_name(name)
    }
}
