//! Section store: read-modify-write persistence of named sections.
//!
//! Every `add_section` call is a full cycle: load the current document from
//! the byte store (or start empty), upsert one section, write the whole
//! document back atomically. Nothing is cached between calls, so the store
//! always merges against what is actually on disk.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::byte_store::{ByteStore, FileStore};

/// In-memory form of the persisted document: section name -> node.
///
/// Keys keep insertion order (serde_json's `preserve_order` feature), so
/// repeated updates never shuffle unrelated sections.
pub type Document = serde_json::Map<String, Value>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The byte store could not be read or written.
    #[error("I/O error accessing store target '{target}': {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored bytes are not a well-formed document.
    #[error("failed to decode store target '{target}': {source}")]
    Decode {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// The stored document is well-formed but not an object at the root.
    #[error("store target '{target}' does not hold a top-level object")]
    RootNotObject { target: String },

    /// A section value could not be encoded.
    #[error("failed to encode section '{section}': {source}")]
    Encode {
        section: String,
        #[source]
        source: serde_json::Error,
    },

    /// A requested section is not present in the document.
    #[error("section '{0}' not found")]
    SectionNotFound(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent key-section store over one byte-store target.
///
/// Single-writer by design: concurrent callers against the same target are
/// not arbitrated, and the last writer wins. Callers needing multi-writer
/// safety must serialize externally.
pub struct SectionStore<S: ByteStore = FileStore> {
    store: S,
    target: String,
}

impl SectionStore<FileStore> {
    /// Store backed by a file at `path`.
    pub fn open(path: impl Into<String>) -> Self {
        Self {
            store: FileStore,
            target: path.into(),
        }
    }
}

impl<S: ByteStore> SectionStore<S> {
    /// Store backed by an arbitrary byte store.
    pub fn with_store(store: S, target: impl Into<String>) -> Self {
        Self {
            store,
            target: target.into(),
        }
    }

    /// The store target identifier.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Load the current document.
    ///
    /// An absent target, or one holding only whitespace, loads as an empty
    /// document. Undecodable contents surface as [`StoreError::Decode`] and
    /// are never silently overwritten.
    pub fn load_document(&self) -> StoreResult<Document> {
        if !self.store.exists(&self.target) {
            return Ok(Document::new());
        }

        let bytes = match self.store.read_all(&self.target) {
            Ok(bytes) => bytes,
            // Target vanished between exists() and read_all()
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    target: self.target.clone(),
                    source: e,
                })
            }
        };

        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Document::new());
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode {
            target: self.target.clone(),
            source: e,
        })?;

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::RootNotObject {
                target: self.target.clone(),
            }),
        }
    }

    /// Add or replace one named section and persist the whole document.
    ///
    /// Existing sections are re-read from the store, the named section is
    /// upserted in place (replacing its value if the name already exists,
    /// appending if new), and the updated document replaces the target's
    /// contents atomically. Last write wins for repeated names.
    pub fn add_section<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> StoreResult<()> {
        let mut doc = self.load_document()?;

        let node = serde_json::to_value(value).map_err(|e| StoreError::Encode {
            section: name.to_string(),
            source: e,
        })?;
        doc.insert(name.to_string(), node);
        let section_count = doc.len();

        let bytes = serde_json::to_vec_pretty(&doc).map_err(|e| StoreError::Encode {
            section: name.to_string(),
            source: e,
        })?;

        self.store
            .write_all(&self.target, &bytes)
            .map_err(|e| StoreError::Io {
                target: self.target.clone(),
                source: e,
            })?;

        tracing::debug!(
            "Saved section '{}' to {} ({} sections total)",
            name,
            self.target,
            section_count
        );
        Ok(())
    }

    /// Read one section back as a concrete type.
    pub fn read_section<T: DeserializeOwned>(&self, name: &str) -> StoreResult<T> {
        let mut doc = self.load_document()?;
        let node = doc
            .remove(name)
            .ok_or_else(|| StoreError::SectionNotFound(name.to_string()))?;

        serde_json::from_value(node).map_err(|e| StoreError::Decode {
            target: self.target.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct LogLevel {
        #[serde(rename = "Default")]
        default: String,
        #[serde(rename = "Hmm")]
        hmm: String,
    }

    fn mem_store() -> SectionStore<MemoryStore> {
        SectionStore::with_store(MemoryStore::new(), "settings.json")
    }

    #[test]
    fn add_section_creates_missing_target() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appsettings.json");

        let mut store = SectionStore::open(path.to_string_lossy().into_owned());
        store.add_section("AllowedHosts", &"*").unwrap();

        assert!(path.exists());
        let doc = store.load_document().unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc["AllowedHosts"], "*");
    }

    #[test]
    fn add_section_preserves_existing_sections() {
        let mut store = mem_store();
        store
            .add_section(
                "Logging",
                &LogLevel {
                    default: "Information".into(),
                    hmm: "Warning".into(),
                },
            )
            .unwrap();
        store.add_section("AllowedHosts", &"*").unwrap();

        let doc = store.load_document().unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["Logging"]["Default"], "Information");
        assert_eq!(doc["AllowedHosts"], "*");
    }

    #[test]
    fn add_section_twice_keeps_one_entry() {
        let mut store = mem_store();
        store.add_section("DuplicateSection", &"UniqueValue").unwrap();
        store.add_section("DuplicateSection", &"SecondValue").unwrap();

        let doc = store.load_document().unwrap();
        let count = doc.keys().filter(|k| *k == "DuplicateSection").count();
        assert_eq!(count, 1);
        assert_eq!(doc["DuplicateSection"], "SecondValue");
    }

    #[test]
    fn rewriting_a_section_keeps_key_order() {
        let mut store = mem_store();
        store.add_section("First", &1).unwrap();
        store.add_section("Second", &2).unwrap();
        store.add_section("First", &10).unwrap();

        let doc = store.load_document().unwrap();
        let keys: Vec<&String> = doc.keys().collect();
        assert_eq!(keys, ["First", "Second"]);
        assert_eq!(doc["First"], 10);
    }

    #[test]
    fn corrupt_target_surfaces_decode_error() {
        let mut mem = MemoryStore::new();
        mem.write_all("settings.json", b"not valid json {{{").unwrap();
        let mut store = SectionStore::with_store(mem, "settings.json");

        let err = store.add_section("Anything", &1).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));

        // The corrupt contents must survive the failed write
        let bytes = store.store.read_all("settings.json").unwrap();
        assert_eq!(bytes, b"not valid json {{{");
    }

    #[test]
    fn whitespace_only_target_loads_empty() {
        let mut mem = MemoryStore::new();
        mem.write_all("settings.json", b"  \n\t  ").unwrap();
        let store = SectionStore::with_store(mem, "settings.json");

        assert!(store.load_document().unwrap().is_empty());
    }

    #[test]
    fn non_object_root_is_rejected() {
        let mut mem = MemoryStore::new();
        mem.write_all("settings.json", b"[1, 2, 3]").unwrap();
        let store = SectionStore::with_store(mem, "settings.json");

        let err = store.load_document().unwrap_err();
        assert!(matches!(err, StoreError::RootNotObject { .. }));
    }

    #[test]
    fn read_section_roundtrips_typed_value() {
        let mut store = mem_store();
        let level = LogLevel {
            default: "Information".into(),
            hmm: "Warning".into(),
        };
        store.add_section("LogLevel", &level).unwrap();

        let read_back: LogLevel = store.read_section("LogLevel").unwrap();
        assert_eq!(read_back, level);
    }

    #[test]
    fn read_section_missing_name_errors() {
        let store = mem_store();
        let err = store.read_section::<LogLevel>("Absent").unwrap_err();
        assert!(matches!(err, StoreError::SectionNotFound(name) if name == "Absent"));
    }
}
