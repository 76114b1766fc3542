use crate::error::OutlineWarning;
use crate::extractors::base::{Declaration, DeclarationKind, SourcePos, Span};
use crate::extractors::syntax_tree::SyntaxTree;
use tree_sitter::Node;

/// Function and method extraction for Go
impl super::GoExtractor {
    pub(super) fn extract_function(&mut self, tree: &SyntaxTree, node: Node) -> Declaration {
        match node.child_by_field_name("name") {
            Some(name) => {
                self.base
                    .create_declaration(tree, &name, &node, DeclarationKind::Function)
            }
            None => Declaration::new("", DeclarationKind::Function, Span::from_node(&node)),
        }
    }

    /// Methods whose receiver type cannot be rendered are dropped rather than
    /// reported as plain functions.
    pub(super) fn extract_method(&mut self, tree: &SyntaxTree, node: Node) -> Option<Declaration> {
        let Some(name) = node.child_by_field_name("name") else {
            self.base.report(OutlineWarning::UnrecognizedDeclaration {
                kind: node.kind().to_string(),
                pos: SourcePos::from_byte(node.start_byte()),
            });
            return None;
        };

        match self.render_receiver_type(tree, node) {
            Ok(receiver_type) => Some(self.base.create_method(tree, &name, &node, receiver_type)),
            Err(reason) => {
                self.base.report(OutlineWarning::ReceiverRender {
                    method: tree.node_text(&name).to_string(),
                    reason,
                });
                None
            }
        }
    }

    /// Literal text of the first receiver parameter's type (`*T`, `T`, `*Stack[E]`)
    pub(super) fn render_receiver_type(
        &self,
        tree: &SyntaxTree,
        method: Node,
    ) -> Result<String, String> {
        let receiver = method
            .child_by_field_name("receiver")
            .ok_or_else(|| "method has no receiver list".to_string())?;

        let parameter = self
            .parameter_declarations(receiver)
            .into_iter()
            .next()
            .ok_or_else(|| "receiver list is empty".to_string())?;

        let type_node = self
            .parameter_type(parameter)
            .ok_or_else(|| "receiver has no type".to_string())?;

        let text = tree.node_text(&type_node).trim();
        if text.is_empty() {
            return Err("receiver type text is empty".to_string());
        }
        Ok(text.to_string())
    }
}
