// Outline Types for go-outline
//
// The outline is intentionally two-tier: a `FileOutline` root holding a flat
// list of `Declaration`s. Declarations have no children field at all, so the
// "children only on the root" rule is carried by the types.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque, totally ordered source position.
///
/// Encoded as a 1-based byte offset (byte offset + 1), the convention Go
/// tooling clients consume. An end position is one past the construct's
/// last byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SourcePos(u32);

impl SourcePos {
    /// Position of a 0-based byte offset
    pub fn from_byte(byte: usize) -> Self {
        Self(u32::try_from(byte).unwrap_or(u32::MAX - 1) + 1)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open source extent of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: SourcePos,
    pub end: SourcePos,
}

impl Span {
    /// Span covering the 0-based byte range `start_byte..end_byte`
    pub fn from_bytes(start_byte: usize, end_byte: usize) -> Self {
        Self {
            start: SourcePos::from_byte(start_byte),
            end: SourcePos::from_byte(end_byte.max(start_byte)),
        }
    }

    pub fn from_node(node: &tree_sitter::Node) -> Self {
        Self::from_bytes(node.start_byte(), node.end_byte())
    }
}

/// Kinds of outline entries.
///
/// Constants are reported as `Variable`; clients do not distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// The file/package root
    #[serde(rename = "package")]
    File,
    Function,
    Type,
    Variable,
    Import,
}

/// A top-level declaration in the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: DeclarationKind,
    /// Literal receiver type text, methods only
    #[serde(rename = "receiverType", skip_serializing_if = "Option::is_none")]
    pub receiver_type: Option<String>,
    pub start: SourcePos,
    pub end: SourcePos,
}

impl Declaration {
    pub fn new(label: impl Into<String>, kind: DeclarationKind, span: Span) -> Self {
        Self {
            label: label.into(),
            kind,
            receiver_type: None,
            start: span.start,
            end: span.end,
        }
    }

    pub fn method(label: impl Into<String>, receiver_type: String, span: Span) -> Self {
        Self {
            receiver_type: Some(receiver_type),
            ..Self::new(label, DeclarationKind::Function, span)
        }
    }
}

/// The root node of one file's outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutline {
    /// Package name
    pub label: String,
    pub span: Span,
    pub children: Vec<Declaration>,
}

impl FileOutline {
    pub fn kind(&self) -> DeclarationKind {
        DeclarationKind::File
    }
}

impl Serialize for FileOutline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileOutline", 5)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("type", &self.kind())?;
        state.serialize_field("start", &self.span.start)?;
        state.serialize_field("end", &self.span.end)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

/// Render the outline as the single-element JSON array clients expect
pub fn to_json(outline: &FileOutline) -> serde_json::Result<String> {
    serde_json::to_string(&[outline])
}
