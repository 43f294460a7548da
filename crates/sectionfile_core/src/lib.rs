//! Sectionfile Core - persistent key-section store over a single JSON document.
//!
//! Writers add named, strongly-typed sections to a shared file without
//! disturbing sections written earlier. Readers take one immutable snapshot
//! of the document and query it by dotted path, or bind a section back into
//! a typed value with declarative coercion rules.

pub mod logging;
pub mod store;
pub mod view;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
