//! Thin, typed view over a tree-sitter Go syntax tree.
//!
//! Only the parts of a compilation unit the scanner needs are exposed:
//! the package clause, import specs, and top-level interface declarations.

use arborium_tree_sitter as tree_sitter;
use tree_sitter::{Node, Tree};

/// A parsed Go source file without syntax errors.
pub struct SourceUnit {
    text: String,
    tree: Tree,
}

/// One `import` spec. `path` is unquoted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSpec {
    pub alias: Option<String>,
    pub path: String,
}

impl ImportSpec {
    /// Whether the final `/` component of the path is `name`.
    pub fn path_ends_with(&self, name: &str) -> bool {
        self.path.rsplit('/').next() == Some(name)
    }
}

/// Identifier in type position with its visibility resolved at parse time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident<'a> {
    pub name: &'a str,
    pub exported: bool,
}

impl<'a> Ident<'a> {
    /// Go's visibility rule: exported names start with an upper-case letter.
    pub fn new(name: &'a str) -> Self {
        let exported = name.chars().next().is_some_and(char::is_uppercase);
        Self { name, exported }
    }
}

pub struct InterfaceDecl<'a> {
    pub name: &'a str,
    /// Type parameter list, when the interface is generic.
    pub type_parameters: Option<Node<'a>>,
    pub methods: Vec<MethodDecl<'a>>,
}

pub struct MethodDecl<'a> {
    pub name: &'a str,
    pub parameters: Node<'a>,
    pub result: Option<Node<'a>>,
}

impl SourceUnit {
    /// Parse Go source. Returns `None` when the source has syntax errors.
    pub fn parse(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let tree = nrdeco_langs::go().parse(&text)?;
        if tree.root_node().has_error() {
            return None;
        }
        Some(Self { text, tree })
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text<'a>(&'a self, node: Node<'_>) -> &'a str {
        &self.text[node.byte_range()]
    }

    /// Name from the `package` clause.
    pub fn package_name(&self) -> Option<&str> {
        let clause = named_children(self.root()).find(|n| n.kind() == "package_clause")?;
        let ident = named_children(clause).find(|n| n.kind() == "package_identifier")?;
        Some(self.text(ident))
    }

    pub fn imports(&self) -> Vec<ImportSpec> {
        let mut specs = Vec::new();
        for decl in named_children(self.root()).filter(|n| n.kind() == "import_declaration") {
            for child in named_children(decl) {
                match child.kind() {
                    "import_spec" => specs.extend(self.import_spec(child)),
                    "import_spec_list" => specs.extend(
                        named_children(child)
                            .filter(|n| n.kind() == "import_spec")
                            .filter_map(|n| self.import_spec(n)),
                    ),
                    _ => {}
                }
            }
        }
        specs
    }

    fn import_spec(&self, node: Node<'_>) -> Option<ImportSpec> {
        let path = node.child_by_field_name("path")?;
        let path = self.text(path).trim_matches(|c: char| c == '"' || c == '`');
        if path.is_empty() {
            return None;
        }
        Some(ImportSpec {
            alias: node
                .child_by_field_name("name")
                .map(|n| self.text(n).to_string()),
            path: path.to_string(),
        })
    }

    /// Top-level interface declarations in source order.
    pub fn interfaces(&self) -> Vec<InterfaceDecl<'_>> {
        named_children(self.root())
            .filter(|n| n.kind() == "type_declaration")
            .flat_map(named_children)
            .filter(|n| matches!(n.kind(), "type_spec" | "type_alias"))
            .filter_map(|spec| self.interface_decl(spec))
            .collect()
    }

    fn interface_decl<'a>(&'a self, spec: Node<'a>) -> Option<InterfaceDecl<'a>> {
        let ty = spec.child_by_field_name("type")?;
        if ty.kind() != "interface_type" {
            return None;
        }
        let name = self.text(spec.child_by_field_name("name")?);
        // Embedded interfaces and type-set elements are not methods.
        let methods = named_children(ty)
            .filter(|n| matches!(n.kind(), "method_elem" | "method_spec"))
            .filter_map(|n| {
                Some(MethodDecl {
                    name: self.text(n.child_by_field_name("name")?),
                    parameters: n.child_by_field_name("parameters")?,
                    result: n.child_by_field_name("result"),
                })
            })
            .collect();
        Some(InterfaceDecl {
            name,
            type_parameters: spec.child_by_field_name("type_parameters"),
            methods,
        })
    }
}

/// Named children of `node`, comments excluded.
pub fn named_children(node: Node<'_>) -> impl Iterator<Item = Node<'_>> {
    let mut cursor = node.walk();
    let children: Vec<_> = node
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect();
    children.into_iter()
}

/// Type nodes of a `parameter_list`, one per declared parameter.
///
/// `a, b string` yields the `string` node twice. A variadic declaration
/// yields the declaration node itself so the resolver can see the `...`.
pub fn parameter_types(list: Node<'_>) -> Vec<Node<'_>> {
    let mut types = Vec::new();
    for decl in named_children(list) {
        match decl.kind() {
            "parameter_declaration" => {
                let Some(ty) = decl.child_by_field_name("type") else {
                    continue;
                };
                let mut cursor = decl.walk();
                let names = decl.children_by_field_name("name", &mut cursor).count();
                types.extend(std::iter::repeat_n(ty, names.max(1)));
            }
            // Variadic declarations keep their `...` for the resolver.
            _ => types.push(decl),
        }
    }
    types
}
