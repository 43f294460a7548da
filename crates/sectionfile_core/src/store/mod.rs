//! Section persistence over an abstract byte store.
//!
//! This module provides:
//! - A byte-store abstraction with file-backed and in-memory implementations
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates that never disturb other sections
//!
//! # Example
//!
//! ```no_run
//! use sectionfile_core::store::SectionStore;
//!
//! let mut store = SectionStore::open("appsettings.json");
//!
//! // Upsert one section; everything else in the file is preserved
//! store.add_section("AllowedHosts", &"*").unwrap();
//!
//! // Read the whole document back
//! let doc = store.load_document().unwrap();
//! assert!(doc.contains_key("AllowedHosts"));
//! ```

mod byte_store;
mod section_store;

pub use byte_store::{ByteStore, FileStore, MemoryStore};
pub use section_store::{Document, SectionStore, StoreError, StoreResult};
