//! Byte source and sink capabilities.
//!
//! The coordinator's file-oriented operations read and write through these
//! traits so that tests can swap the filesystem for memory.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::fs::write_atomic;

/// Byte source.
pub trait Reader: Send + Sync {
    /// Read the full contents at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Byte sink.
pub trait Persister: Send + Sync {
    /// Write raw bytes to `path`, replacing any existing contents.
    fn save_bytes(&self, bytes: &[u8], path: &Path) -> io::Result<()>;

    /// Write UTF-8 text to `path`, replacing any existing contents.
    fn save_text(&self, text: &str, path: &Path) -> io::Result<()> {
        self.save_bytes(text.as_bytes(), path)
    }
}

/// Filesystem-backed store. Writes are atomic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl Reader for FsStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");
        Ok(bytes)
    }
}

impl Persister for FsStore {
    fn save_bytes(&self, bytes: &[u8], path: &Path) -> io::Result<()> {
        write_atomic(path, bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
        Ok(())
    }
}

/// In-memory store keyed by path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a file.
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> io::Result<()> {
        self.lock()?.insert(path.into(), bytes.into());
        Ok(())
    }

    /// Current contents of a file, if present.
    pub fn get(&self, path: &Path) -> io::Result<Option<Vec<u8>>> {
        Ok(self.lock()?.get(path).cloned())
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>>> {
        self.files
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory store lock poisoned"))
    }
}

impl Reader for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.lock()?.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file: {}", path.display()),
            )
        })
    }
}

impl Persister for MemoryStore {
    fn save_bytes(&self, bytes: &[u8], path: &Path) -> io::Result<()> {
        self.insert(path, bytes)
    }
}

impl<T: Reader + ?Sized> Reader for std::sync::Arc<T> {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

impl<T: Persister + ?Sized> Persister for std::sync::Arc<T> {
    fn save_bytes(&self, bytes: &[u8], path: &Path) -> io::Result<()> {
        (**self).save_bytes(bytes, path)
    }

    fn save_text(&self, text: &str, path: &Path) -> io::Result<()> {
        (**self).save_text(text, path)
    }
}
