//! Declaration scanner: interface declarations -> model interfaces.

use tracing::{debug, trace};

use crate::config::UntracedMethods;
use crate::error::ResolveError;
use crate::imports::ImportLookup;
use crate::model::{File, Interface, Method, Params, Returns};
use crate::qualify::CrossModule;
use crate::resolve::Resolver;
use crate::syntax::{InterfaceDecl, MethodDecl, SourceUnit};

/// Populate `file.interfaces` from the interface declarations in `unit`.
///
/// Every method is resolved, including those that end up dropped, so import
/// discovery does not depend on the policy. The first resolution error stops
/// the scan and nothing is added to `file`.
pub fn scan(
    unit: &SourceUnit,
    file: &mut File,
    untraced: UntracedMethods,
) -> Result<(), ResolveError> {
    let cross_module = match (&file.original_package_name, file.differs_in_dest) {
        (Some(name), true) => Some(CrossModule::new(name.clone())),
        _ => None,
    };
    let specs = unit.imports();
    let mut resolver = Resolver::new(
        unit,
        ImportLookup::new(&mut file.imports, &specs),
        cross_module.as_ref(),
    );

    let interfaces = unit
        .interfaces()
        .iter()
        .map(|decl| scan_interface(&mut resolver, decl, untraced))
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>, _>>()?;

    file.interfaces.extend(interfaces);
    Ok(())
}

fn scan_interface(
    resolver: &mut Resolver<'_>,
    decl: &InterfaceDecl<'_>,
    untraced: UntracedMethods,
) -> Result<Option<Interface>, ResolveError> {
    if let Some(params) = decl.type_parameters {
        return Err(ResolveError::UnsupportedType {
            kind: params.kind().to_string(),
        });
    }

    let mut methods = decl
        .methods
        .iter()
        .map(|m| scan_method(resolver, m))
        .collect::<Result<Vec<_>, _>>()?;

    if !methods.iter().any(|m| m.traced) {
        debug!(interface = decl.name, "no context-aware methods, skipping");
        return Ok(None);
    }

    if untraced == UntracedMethods::Omit {
        methods.retain(|m| {
            if !m.traced {
                trace!(interface = decl.name, method = %m.name, "omitting method without context");
            }
            m.traced
        });
    }

    Ok(Some(Interface {
        name: decl.name.to_string(),
        methods,
    }))
}

fn scan_method(resolver: &mut Resolver<'_>, decl: &MethodDecl<'_>) -> Result<Method, ResolveError> {
    let params = Params(resolver.resolve_list(decl.parameters)?);
    let returns = Returns(resolver.resolve_result(decl.result)?);
    Ok(Method {
        name: decl.name.to_string(),
        traced: params.has_context(),
        params,
        returns,
    })
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod scan_tests;
