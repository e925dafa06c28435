//! Type expression resolver: syntax node -> `Value`.

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Node;

use crate::error::ResolveError;
use crate::imports::ImportLookup;
use crate::model::{ChanDir, Params, Returns, Value};
use crate::qualify::CrossModule;
use crate::syntax::{Ident, SourceUnit, named_children, parameter_types};

type Result<T> = std::result::Result<T, ResolveError>;

pub struct Resolver<'a> {
    unit: &'a SourceUnit,
    imports: ImportLookup<'a>,
    cross_module: Option<&'a CrossModule>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        unit: &'a SourceUnit,
        imports: ImportLookup<'a>,
        cross_module: Option<&'a CrossModule>,
    ) -> Self {
        Self {
            unit,
            imports,
            cross_module,
        }
    }

    /// Resolve one type node. The accepted node kinds form a closed set;
    /// anything else is rejected by name.
    pub fn resolve(&mut self, node: Node<'_>) -> Result<Value> {
        match node.kind() {
            // The length of an array is not kept.
            "slice_type" | "array_type" => {
                Ok(Value::slice(self.resolve_field(node, "element")?))
            }
            "map_type" => {
                let key = self.resolve_field(node, "key")?;
                let element = self.resolve_field(node, "value")?;
                Ok(Value::Map {
                    key: key.to_string(),
                    element: Box::new(element),
                })
            }
            "pointer_type" => {
                let inner = named_children(node)
                    .next()
                    .ok_or_else(|| unsupported(node))?;
                Ok(Value::pointer(self.resolve(inner)?))
            }
            "channel_type" => {
                let element = self.resolve_field(node, "value")?;
                Ok(Value::Chan {
                    dir: channel_dir(node),
                    element: Box::new(element),
                })
            }
            "function_type" => {
                let params = match node.child_by_field_name("parameters") {
                    Some(list) => self.resolve_list(list)?,
                    None => Vec::new(),
                };
                let returns = self.resolve_result(node.child_by_field_name("result"))?;
                Ok(Value::Func {
                    params: Params(params),
                    returns: Returns(returns),
                })
            }
            "type_identifier" => {
                let ident = Ident::new(self.unit.text(node));
                if let Some(cross_module) = self.cross_module
                    && let Some(value) = cross_module.qualify(&ident, &mut self.imports)?
                {
                    return Ok(value);
                }
                Ok(Value::named(ident.name))
            }
            "qualified_type" => {
                let prefix = node
                    .child_by_field_name("package")
                    .ok_or_else(|| unsupported(node))?;
                let name = node
                    .child_by_field_name("name")
                    .ok_or_else(|| unsupported(node))?;
                let prefix = self.unit.text(prefix);
                let pkg =
                    self.imports
                        .lookup(prefix)
                        .ok_or_else(|| ResolveError::ImportNotFound {
                            name: prefix.to_string(),
                        })?;
                Ok(Value::qualified(self.unit.text(name), pkg))
            }
            "variadic_parameter_declaration" => {
                Ok(Value::variadic(self.resolve_field(node, "type")?))
            }
            _ => Err(unsupported(node)),
        }
    }

    /// Resolve every parameter of a `parameter_list`.
    pub fn resolve_list(&mut self, list: Node<'_>) -> Result<Vec<Value>> {
        parameter_types(list)
            .into_iter()
            .map(|ty| self.resolve(ty))
            .collect()
    }

    /// Resolve a method or function result: absent, a single type, or a
    /// parenthesized list.
    pub fn resolve_result(&mut self, result: Option<Node<'_>>) -> Result<Vec<Value>> {
        match result {
            None => Ok(Vec::new()),
            Some(list) if list.kind() == "parameter_list" => self.resolve_list(list),
            Some(ty) => Ok(vec![self.resolve(ty)?]),
        }
    }

    fn resolve_field(&mut self, node: Node<'_>, field: &str) -> Result<Value> {
        let child = node
            .child_by_field_name(field)
            .ok_or_else(|| unsupported(node))?;
        self.resolve(child)
    }
}

fn unsupported(node: Node<'_>) -> ResolveError {
    ResolveError::UnsupportedType {
        kind: node.kind().to_string(),
    }
}

/// `<-chan T` starts with the arrow, `chan<- T` has it after `chan`.
fn channel_dir(node: Node<'_>) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|n| !n.is_named())
        .map(|n| n.kind())
        .collect();
    match tokens.as_slice() {
        ["<-", ..] => ChanDir::Recv,
        [_, "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
