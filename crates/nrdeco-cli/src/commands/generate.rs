use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nrdeco_core::{Config, GoModResolver, UntracedMethods, default_dest, generate};
use tracing::debug;

pub struct GenerateArgs {
    pub source: PathBuf,
    pub dest: Option<PathBuf>,
    pub untraced: UntracedMethods,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("{} is not a Go source file", .path.display())]
    NotGoFile { path: PathBuf },

    #[error(transparent)]
    Generate(#[from] nrdeco_core::Error),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = execute(&args.source, args.dest.as_deref(), args.untraced) {
        eprintln!(
            "error: [nrdeco] failed to generate code from {}: {}",
            args.source.display(),
            e
        );
        std::process::exit(1);
    }
}

/// Generate the decorator for `source` and write it. Returns the path written.
pub fn execute(
    source: &Path,
    dest: Option<&Path>,
    untraced: UntracedMethods,
) -> Result<PathBuf, GenerateError> {
    ensure_go_file(source)?;
    let dest = match dest {
        Some(dest) => {
            ensure_go_file(dest)?;
            dest.to_path_buf()
        }
        None => default_dest(source),
    };

    println!("[nrdeco] input: {}", source.display());

    let config = Config::new()
        .version(env!("CARGO_PKG_VERSION"))
        .untraced(untraced);
    let bytes = generate(source, &dest, &config, &GoModResolver)?;

    if let Some(dir) = dest.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dest_dir(dir).map_err(|e| GenerateError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(&dest, bytes).map_err(|e| GenerateError::Write {
        path: dest.clone(),
        source: e,
    })?;

    println!("[nrdeco] wrote: {}", dest.display());
    Ok(dest)
}

fn ensure_go_file(path: &Path) -> Result<(), GenerateError> {
    let is_go = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(nrdeco_langs::from_ext)
        .is_some();
    if !is_go {
        return Err(GenerateError::NotGoFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Create `dir` and its parents. An existing directory keeps its permission
/// bits; new ones get `0o777` before umask.
fn create_dest_dir(dir: &Path) -> io::Result<()> {
    debug!(dir = %dir.display(), "creating destination directory");
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{DirBuilderExt, PermissionsExt};

        let mode = fs::metadata(dir)
            .map(|m| m.permissions().mode() & 0o777)
            .unwrap_or(0o777);
        builder.mode(mode);
    }

    builder.create(dir)
}
