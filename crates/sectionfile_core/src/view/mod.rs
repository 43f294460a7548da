//! Read-side view over a persisted document.
//!
//! This module provides:
//! - Dotted-path scalar lookups over one document snapshot
//! - Declarative binding of an object subtree into a typed value
//! - Coercion diagnostics that name the offending field
//!
//! # Example
//!
//! ```no_run
//! use sectionfile_core::store::SectionStore;
//! use sectionfile_core::view::ConfigView;
//!
//! let store = SectionStore::open("appsettings.json");
//! let view = ConfigView::from_document(store.load_document().unwrap());
//!
//! // Nested lookup, one dotted path per scalar
//! let level = view.get("Logging.LogLevel.Default");
//! ```

mod bind;
mod view;

pub use bind::{BindError, BindResult, Bindable, BoundScalar, FieldSpec, ScalarKind};
pub use view::ConfigView;
