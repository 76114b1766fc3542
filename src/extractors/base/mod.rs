// Base Extractor Types and Helpers for go-outline
//
// - types.rs: outline data model and JSON schema (FileOutline, Declaration, SourcePos)
// - extractor.rs: BaseExtractor (per-file state, warning channel)
// - creation_methods.rs: Declaration construction from syntax nodes
// - tree_methods.rs: tree navigation helpers

pub mod creation_methods;
pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{to_json, Declaration, DeclarationKind, FileOutline, SourcePos, Span};
