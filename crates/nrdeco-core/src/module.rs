//! Module discovery: directory -> Go import path.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::trace;

const GO_MOD: &str = "go.mod";

/// Module identity governing a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    /// Full import path of the directory's package.
    pub path: String,
}

impl Module {
    /// Package name derived from the import path (its last segment).
    pub fn package_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Maps a directory to the module identity governing it.
///
/// Implementations must be free of shared mutable state: generation calls
/// them from independent invocations.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, dir: &Path) -> Option<Module>;
}

/// Resolves directories through the nearest enclosing `go.mod`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoModResolver;

impl ModuleResolver for GoModResolver {
    fn resolve(&self, dir: &Path) -> Option<Module> {
        let dir = std::path::absolute(dir).ok().map(|d| clean(&d))?;
        let root = dir.ancestors().find(|d| d.join(GO_MOD).is_file())?;
        let content = fs::read_to_string(root.join(GO_MOD)).ok()?;
        let module = module_directive(&content)?;

        let rel: Vec<_> = dir
            .strip_prefix(root)
            .ok()?
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();
        let path = if rel.is_empty() {
            module.to_string()
        } else {
            format!("{}/{}", module, rel.join("/"))
        };
        trace!(dir = %dir.display(), go_mod = %root.display(), path = %path, "resolved module");
        Some(Module { path })
    }
}

/// Module path from the `module` directive of a `go.mod` file.
pub fn module_directive(go_mod: &str) -> Option<&str> {
    go_mod.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or_default().trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim().trim_matches(|c: char| c == '"' || c == '`');
        (!path.is_empty()).then_some(path)
    })
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod module_tests;
