//! Generation model: one `File` per invocation, owning its interfaces,
//! methods, and recursive `Value` type expressions.

use std::collections::BTreeMap;
use std::fmt;

/// Import path of the package that declares the capability type.
pub const CONTEXT_PACKAGE: &str = "context";
/// Name of the capability type inside [`CONTEXT_PACKAGE`].
pub const CONTEXT_TYPE: &str = "Context";

/// A Go package, used both as an import target and a qualification prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Package {
    pub path: String,
}

impl Package {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Identifier generated code uses to refer to this package: the last
    /// `/`-delimited segment of the path, or the whole path.
    pub fn qualifier(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// The generated file as handed to emission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
    pub version: String,
    pub package_name: String,
    /// Set only when the destination lives in another directory than the source.
    pub original_package_name: Option<String>,
    pub differs_in_dest: bool,
    /// Short import name -> package. Lookups cache into this map.
    pub imports: BTreeMap<String, Package>,
    pub interfaces: Vec<Interface>,
}

impl File {
    pub fn new(version: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    /// Import paths sorted and deduplicated, so two names resolving to the
    /// same path produce a single import line.
    pub fn import_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.imports.values().map(|p| p.path.as_str()).collect();
        paths.sort_unstable();
        paths.dedup();
        paths
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub methods: Vec<Method>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub params: Params,
    pub returns: Returns,
    /// Whether calls through the wrapper open a segment.
    pub traced: bool,
}

/// Parameters in call-signature order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(pub Vec<Value>);

/// Results in call-signature order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Returns(pub Vec<Value>);

impl Params {
    /// A method is decorated only when it carries a `context.Context`.
    pub fn has_context(&self) -> bool {
        self.0.iter().any(Value::is_context)
    }
}

/// Direction of a channel type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// A named type, optionally qualified by the package declaring it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Named {
    pub name: String,
    pub package: Option<Package>,
}

/// Recursive type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Named(Named),
    Pointer(Box<Value>),
    Slice(Box<Value>),
    Map { key: String, element: Box<Value> },
    Chan { dir: ChanDir, element: Box<Value> },
    Func { params: Params, returns: Returns },
    Variadic(Box<Value>),
}

impl Value {
    pub fn named(name: impl Into<String>) -> Self {
        Value::Named(Named {
            name: name.into(),
            package: None,
        })
    }

    pub fn qualified(name: impl Into<String>, package: Package) -> Self {
        Value::Named(Named {
            name: name.into(),
            package: Some(package),
        })
    }

    pub fn pointer(element: Value) -> Self {
        Value::Pointer(Box::new(element))
    }

    pub fn slice(element: Value) -> Self {
        Value::Slice(Box::new(element))
    }

    pub fn variadic(element: Value) -> Self {
        Value::Variadic(Box::new(element))
    }

    pub fn is_context(&self) -> bool {
        matches!(
            self,
            Value::Named(Named { name, package: Some(pkg) })
                if pkg.path == CONTEXT_PACKAGE && name == CONTEXT_TYPE
        )
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, Value::Variadic(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Named(Named {
                name,
                package: Some(pkg),
            }) => write!(f, "{}.{}", pkg.qualifier(), name),
            Value::Named(Named {
                name,
                package: None,
            }) => f.write_str(name),
            Value::Pointer(el) => write!(f, "*{el}"),
            Value::Slice(el) => write!(f, "[]{el}"),
            Value::Variadic(el) => write!(f, "...{el}"),
            Value::Map { key, element } => write!(f, "map[{key}]{element}"),
            Value::Chan { dir, element } => match dir {
                ChanDir::Both => write!(f, "chan {element}"),
                ChanDir::Send => write!(f, "chan<- {element}"),
                ChanDir::Recv => write!(f, "<-chan {element}"),
            },
            Value::Func { params, returns } => {
                write!(f, "func({}){}", join(&params.0), results(returns))
            }
        }
    }
}

/// Result clause: nothing, ` T`, or ` (T1, T2)`.
pub(crate) fn results(returns: &Returns) -> String {
    match returns.0.as_slice() {
        [] => String::new(),
        [single] => format!(" {single}"),
        many => format!(" ({})", join(many)),
    }
}

fn join(values: &[Value]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
