use super::GroupKeyword;
use crate::error::OutlineWarning;
use crate::extractors::base::{Declaration, DeclarationKind, SourcePos};
use crate::extractors::syntax_tree::SyntaxTree;
use tree_sitter::Node;

/// Spec kinds found inside a declaration group
#[derive(Debug, Clone, Copy)]
pub(crate) enum Spec<'t> {
    Import(Node<'t>),
    Type(Node<'t>),
    Value(Node<'t>),
    Unrecognized(Node<'t>),
}

impl<'t> Spec<'t> {
    pub(crate) fn classify(node: Node<'t>) -> Self {
        match node.kind() {
            "import_spec" => Spec::Import(node),
            "type_spec" | "type_alias" => Spec::Type(node),
            "var_spec" | "const_spec" => Spec::Value(node),
            _ => Spec::Unrecognized(node),
        }
    }
}

/// Extraction of the specs inside import, type, var and const groups
impl super::GoExtractor {
    pub(super) fn extract_group(
        &mut self,
        tree: &SyntaxTree,
        keyword: GroupKeyword,
        group: Node,
        declarations: &mut Vec<Declaration>,
    ) {
        for spec in self.group_specs(group) {
            self.extract_spec(tree, keyword, spec, declarations);
        }
    }

    pub(super) fn extract_spec(
        &mut self,
        tree: &SyntaxTree,
        keyword: GroupKeyword,
        spec: Node,
        declarations: &mut Vec<Declaration>,
    ) {
        match Spec::classify(spec) {
            Spec::Import(node) => {
                if let Some(import) = self.extract_import_spec(tree, node) {
                    declarations.push(import);
                }
            }
            Spec::Type(node) => {
                if let Some(type_decl) = self.extract_type_spec(tree, node) {
                    declarations.push(type_decl);
                }
            }
            Spec::Value(node) => declarations.extend(self.extract_value_spec(tree, node)),
            Spec::Unrecognized(node) => {
                self.base.report(OutlineWarning::UnrecognizedSpec {
                    keyword: keyword.as_str().to_string(),
                    kind: node.kind().to_string(),
                    pos: SourcePos::from_byte(node.start_byte()),
                });
            }
        }
    }

    /// Label is the path literal exactly as written, quotes included
    pub(super) fn extract_import_spec(&self, tree: &SyntaxTree, node: Node) -> Option<Declaration> {
        let path = node.child_by_field_name("path").or_else(|| {
            let mut cursor = node.walk();
            let literal = node.named_children(&mut cursor).find(|child| {
                matches!(
                    child.kind(),
                    "interpreted_string_literal" | "raw_string_literal"
                )
            });
            literal
        })?;

        Some(
            self.base
                .create_declaration(tree, &path, &node, DeclarationKind::Import),
        )
    }

    /// One `Variable` per name; constants are reported the same way
    pub(super) fn extract_value_spec(&self, tree: &SyntaxTree, node: Node) -> Vec<Declaration> {
        self.value_spec_names(node)
            .iter()
            .map(|name| {
                self.base
                    .create_declaration(tree, name, name, DeclarationKind::Variable)
            })
            .collect()
    }
}
