//! Import origin lookup: short package name -> import path.

use std::collections::BTreeMap;

use tracing::trace;

use crate::model::Package;
use crate::syntax::ImportSpec;

/// Resolves package names used in the source against the file's import
/// map and the raw import specs, caching every hit into the map.
pub struct ImportLookup<'a> {
    known: &'a mut BTreeMap<String, Package>,
    specs: &'a [ImportSpec],
}

impl<'a> ImportLookup<'a> {
    pub fn new(known: &'a mut BTreeMap<String, Package>, specs: &'a [ImportSpec]) -> Self {
        Self { known, specs }
    }

    /// Resolution order: registered import, explicit alias, final path
    /// component. First match wins.
    pub fn lookup(&mut self, name: &str) -> Option<Package> {
        if let Some(pkg) = self.known.get(name) {
            return Some(pkg.clone());
        }

        let spec = self
            .specs
            .iter()
            .find(|spec| spec.alias.as_deref() == Some(name))
            .or_else(|| self.specs.iter().find(|spec| spec.path_ends_with(name)))?;

        trace!(name, path = %spec.path, "resolved import");
        let pkg = Package::new(&spec.path);
        self.known.insert(name.to_string(), pkg.clone());
        Some(pkg)
    }
}

#[cfg(test)]
#[path = "imports_tests.rs"]
mod imports_tests;
