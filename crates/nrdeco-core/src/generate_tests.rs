use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;

use super::{default_dest, generate, generate_from_str};
use crate::config::{Config, UntracedMethods};
use crate::error::{Error, ResolveError};
use crate::module::{GoModResolver, Module, ModuleResolver};

const REPO: &str = indoc! {r#"
    package repository

    import (
        "context"

        "example.com/shop/domain/model"
    )

    type UserRepository interface {
        GetUserByID(string) (*model.User, error)
        GetUserByIDWithContext(ctx context.Context, id string) (*model.User, error)
    }
"#};

/// Resolver that never finds a module.
struct NoModule;

impl ModuleResolver for NoModule {
    fn resolve(&self, _dir: &Path) -> Option<Module> {
        None
    }
}

fn config() -> Config {
    Config::new().version("test")
}

/// A module rooted at a temp dir with `domain/repository/repo.go`.
fn workspace() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("go.mod"), "module example.com/shop\n\ngo 1.22\n").unwrap();
    let pkg = dir.path().join("domain").join("repository");
    fs::create_dir_all(&pkg).unwrap();
    let source = pkg.join("repo.go");
    fs::write(&source, REPO).unwrap();
    (dir, source)
}

fn generate_to(source: &Path, dest: &Path) -> String {
    let out = generate(source, dest, &config(), &GoModResolver).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn default_dest_replaces_go_suffix() {
    assert_eq!(
        default_dest(Path::new("domain/repo.go")),
        PathBuf::from("domain/repo.nrdeco.go")
    );
    assert_eq!(
        default_dest(Path::new("domain/repo")),
        PathBuf::from("domain/repo.nrdeco.go")
    );
}

#[test]
fn same_directory_keeps_package() {
    let (_dir, source) = workspace();

    let res = generate_to(&source, &default_dest(&source));

    assert!(res.starts_with("// Code generated by nrdeco test. DO NOT EDIT.\n\npackage repository\n"));
    assert!(res.contains("type NRUserRepository struct {\n\tUserRepository\n}\n"));
    assert!(res.contains("\t\"github.com/newrelic/go-agent/v3/newrelic\"\n"));
    assert!(!res.contains("example.com/shop/domain/repository"));
    assert!(!res.contains("func (d *NRUserRepository) GetUserByID("));
}

#[test]
fn other_directory_qualifies_original_package() {
    let (dir, source) = workspace();
    let dest = dir.path().join("internal").join("decorated").join("repo.go");

    let res = generate_to(&source, &dest);

    assert!(res.contains("\npackage decorated\n"));
    assert!(res.contains("\t\"example.com/shop/domain/repository\"\n"));
    assert!(res.contains("type NRUserRepository struct {\n\trepository.UserRepository\n}\n"));
    assert!(res.contains(
        "func (d *NRUserRepository) GetUserByIDWithContext(ctx context.Context, arg1 string) (*model.User, error) {\n"
    ));
}

#[test]
fn dot_segments_do_not_count_as_other_directory() {
    let (dir, source) = workspace();
    let dest = dir
        .path()
        .join("domain")
        .join("..")
        .join("domain")
        .join("repository")
        .join(".")
        .join("repo.nrdeco.go");

    let res = generate_to(&source, &dest);

    assert!(res.contains("\tUserRepository\n"));
    assert!(!res.contains("repository.UserRepository"));
}

#[test]
fn output_is_byte_identical_across_runs() {
    let (_dir, source) = workspace();
    let dest = default_dest(&source);

    let first = generate(&source, &dest, &config(), &GoModResolver).unwrap();
    let second = generate(&source, &dest, &config(), &GoModResolver).unwrap();

    assert_eq!(first, second);
}

#[test]
fn forward_policy_reaches_output() {
    let (_dir, source) = workspace();
    let config = config().untraced(UntracedMethods::Forward);

    let out = generate(&source, &default_dest(&source), &config, &GoModResolver).unwrap();
    let res = String::from_utf8(out).unwrap();

    assert!(res.contains(
        "func (d *NRUserRepository) GetUserByID(arg0 string) (*model.User, error) {\n\treturn d.UserRepository.GetUserByID(arg0)\n}\n"
    ));
}

#[test]
fn missing_source_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("missing.go");

    let err = generate(&source, &default_dest(&source), &config(), &GoModResolver).unwrap_err();

    assert!(matches!(err, Error::Read { path, .. } if path == source));
}

#[test]
fn syntax_error_names_source() {
    let source = Path::new("/src/repo.go");

    let err = generate_from_str(
        "package repository\n\ntype Broken interface {\n",
        source,
        Path::new("/src/repo.nrdeco.go"),
        &config(),
        &NoModule,
    )
    .unwrap_err();

    assert!(matches!(&err, Error::Parse { path } if path == source));
    assert_eq!(err.to_string(), "failed to parse file /src/repo.go");
}

#[test]
fn module_not_found() {
    let err = generate_from_str(
        REPO,
        Path::new("/src/repo.go"),
        Path::new("/src/repo.nrdeco.go"),
        &config(),
        &NoModule,
    )
    .unwrap_err();

    assert!(matches!(&err, Error::ModuleNotFound { dir } if dir == Path::new("/src")));
}

#[test]
fn scan_error_carries_source_path() {
    let (dir, _) = workspace();
    let source = dir.path().join("domain").join("repository").join("bad.go");
    fs::write(
        &source,
        indoc! {r#"
            package repository

            import "context"

            type Store interface {
                Get(ctx context.Context) (*model.User, error)
            }
        "#},
    )
    .unwrap();

    let err = generate(&source, &default_dest(&source), &config(), &GoModResolver).unwrap_err();

    match &err {
        Error::Scan { path, source: inner } => {
            assert_eq!(path, &source);
            assert_eq!(inner, &ResolveError::ImportNotFound { name: "model".into() });
        }
        other => panic!("expected scan error, got {other:?}"),
    }
    assert!(err.to_string().ends_with(": import 'model' not found"));
}
