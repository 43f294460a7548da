//! Byte-store abstraction over named persistent targets.
//!
//! The section store only ever needs three operations against its backing
//! storage: existence check, read-all, write-all. Keeping those behind a
//! trait lets tests run against an in-memory map while production code
//! writes real files.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Read/write access to a named persistent target.
///
/// A target that does not exist reads as `io::ErrorKind::NotFound`.
/// `write_all` replaces the target's contents completely.
pub trait ByteStore {
    /// Whether the target currently exists.
    fn exists(&self, target: &str) -> bool;

    /// Read the target's full contents.
    fn read_all(&self, target: &str) -> io::Result<Vec<u8>>;

    /// Replace the target's contents with `bytes`.
    fn write_all(&mut self, target: &str, bytes: &[u8]) -> io::Result<()>;
}

/// File-system backed store. Targets are interpreted as file paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl ByteStore for FileStore {
    fn exists(&self, target: &str) -> bool {
        Path::new(target).exists()
    }

    fn read_all(&self, target: &str) -> io::Result<Vec<u8>> {
        fs::read(target)
    }

    /// Write content to the target file atomically.
    ///
    /// Writes to a temp file first, then renames. A failure mid-write
    /// leaves the previous contents intact.
    fn write_all(&mut self, target: &str, bytes: &[u8]) -> io::Result<()> {
        let path = Path::new(target);

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to temp file in same directory (for atomic rename)
        let temp_path = PathBuf::from(format!("{target}.tmp"));

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

/// In-memory store keyed by target name, for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    targets: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteStore for MemoryStore {
    fn exists(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    fn read_all(&self, target: &str) -> io::Result<Vec<u8>> {
        self.targets.get(target).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such target: {target}"))
        })
    }

    fn write_all(&mut self, target: &str, bytes: &[u8]) -> io::Result<()> {
        self.targets.insert(target.to_string(), bytes.to_vec());
        Ok(())
    }
}
