//! Generation pipeline: source file -> decorator bytes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, debug_span};

use crate::config::Config;
use crate::emit::emit;
use crate::error::{Error, Result};
use crate::model::{File, Package};
use crate::module::{ModuleResolver, clean};
use crate::scan::scan;
use crate::syntax::SourceUnit;

/// Import seeded into every generated file.
pub const NEWRELIC_PACKAGE: &str = "github.com/newrelic/go-agent/v3/newrelic";

const DEST_SUFFIX: &str = "nrdeco.go";

/// Destination used when none is given: `repo.go` -> `repo.nrdeco.go`.
pub fn default_dest(source: &Path) -> PathBuf {
    if source.extension().is_some_and(|ext| ext == "go") {
        return source.with_extension(DEST_SUFFIX);
    }
    let mut dest = source.as_os_str().to_os_string();
    dest.push(".");
    dest.push(DEST_SUFFIX);
    PathBuf::from(dest)
}

/// Read `source` and generate the decorator file destined for `dest`.
///
/// Nothing is written; the caller owns the bytes.
pub fn generate(
    source: &Path,
    dest: &Path,
    config: &Config,
    resolver: &dyn ModuleResolver,
) -> Result<Vec<u8>> {
    let text = fs::read_to_string(source).map_err(|source_err| Error::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    generate_from_str(&text, source, dest, config, resolver)
}

/// Generate from already loaded source text. `source` only locates the
/// file for module discovery and error reporting.
pub fn generate_from_str(
    text: &str,
    source: &Path,
    dest: &Path,
    config: &Config,
    resolver: &dyn ModuleResolver,
) -> Result<Vec<u8>> {
    let _span = debug_span!("generate", source = %source.display()).entered();

    let unit = SourceUnit::parse(text).ok_or_else(|| Error::Parse {
        path: source.to_path_buf(),
    })?;

    let source_dir = parent_dir(source)?;
    let dest_dir = parent_dir(dest)?;
    let module = resolver
        .resolve(&source_dir)
        .ok_or_else(|| Error::ModuleNotFound {
            dir: source_dir.clone(),
        })?;

    let mut file = if source_dir == dest_dir {
        let package_name = unit.package_name().unwrap_or(module.package_name());
        File::new(&config.version, package_name)
    } else {
        let original = module.package_name().to_string();
        let package_name = resolver
            .resolve(&dest_dir)
            .map(|m| m.package_name().to_string())
            .or_else(|| {
                dest_dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| original.clone());
        debug!(original = %original, package = %package_name, "destination in another directory");

        let mut file = File::new(&config.version, package_name);
        file.imports
            .insert(original.clone(), Package::new(&module.path));
        file.original_package_name = Some(original);
        file.differs_in_dest = true;
        file
    };
    file.imports
        .insert("newrelic".to_string(), Package::new(NEWRELIC_PACKAGE));

    scan(&unit, &mut file, config.untraced).map_err(|source_err| Error::Scan {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    debug!(interfaces = file.interfaces.len(), "scan complete");

    Ok(emit(&file))
}

/// Absolute, lexically cleaned directory containing `path`.
fn parent_dir(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path).map_err(|source| Error::AbsolutePath {
        path: path.to_path_buf(),
        source,
    })?;
    let abs = clean(&abs);
    Ok(abs.parent().map(Path::to_path_buf).unwrap_or(abs))
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod generate_tests;
