// Declaration creation methods
//
// Every outline entry is built here so spans and labels are always taken from
// the syntax tree the same way.

use tree_sitter::Node;

use super::extractor::BaseExtractor;
use super::types::{Declaration, DeclarationKind, Span};
use crate::extractors::syntax_tree::SyntaxTree;

impl BaseExtractor {
    /// Create a declaration labelled with `label_node`'s literal text and
    /// spanning `span_node`
    pub fn create_declaration(
        &self,
        tree: &SyntaxTree,
        label_node: &Node,
        span_node: &Node,
        kind: DeclarationKind,
    ) -> Declaration {
        Declaration::new(
            tree.node_text(label_node),
            kind,
            Span::from_node(span_node),
        )
    }

    /// Create a method entry (a `Function` carrying its receiver type)
    pub fn create_method(
        &self,
        tree: &SyntaxTree,
        name_node: &Node,
        node: &Node,
        receiver_type: String,
    ) -> Declaration {
        Declaration::method(tree.node_text(name_node), receiver_type, Span::from_node(node))
    }
}
