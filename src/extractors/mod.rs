//! Go Outline Extractors Module
//!
//! Tree-sitter based extraction of a Go file's top-level declarations.
//!
//! # Architecture
//!
//! The module is organized into several sub-modules:
//! - `base` - outline data model, `BaseExtractor` and tree helpers
//! - `syntax_tree` - validated, immutable parse result (`SyntaxTree`)
//! - `manager` - `OutlineManager` public API (ingestion + extraction)
//! - `go` - the Go declaration walk

pub mod base;
pub mod go;
pub mod manager;
pub mod syntax_tree;

// Re-export the public API
pub use base::{to_json, Declaration, DeclarationKind, FileOutline, SourcePos, Span};
pub use go::GoExtractor;
pub use manager::{OutlineManager, SourceOrigin, SourceRequest};
pub use syntax_tree::{ParseOptions, SyntaxTree};
