//! Cross-module qualification of exported identifiers.

use crate::error::ResolveError;
use crate::imports::ImportLookup;
use crate::model::Value;
use crate::syntax::Ident;

/// Active when the generated file lives in another directory than the
/// declaring source: exported identifiers then refer to the original package.
#[derive(Clone, Debug)]
pub struct CrossModule {
    original_package: String,
}

impl CrossModule {
    pub fn new(original_package: impl Into<String>) -> Self {
        Self {
            original_package: original_package.into(),
        }
    }

    pub fn original_package(&self) -> &str {
        &self.original_package
    }

    /// Qualified value for an exported identifier, `None` for local ones.
    pub fn qualify(
        &self,
        ident: &Ident<'_>,
        imports: &mut ImportLookup<'_>,
    ) -> Result<Option<Value>, ResolveError> {
        if !ident.exported {
            return Ok(None);
        }
        let pkg = imports
            .lookup(&self.original_package)
            .ok_or_else(|| ResolveError::ImportNotFound {
                name: ident.name.to_string(),
            })?;
        Ok(Some(Value::qualified(ident.name, pkg)))
    }
}
