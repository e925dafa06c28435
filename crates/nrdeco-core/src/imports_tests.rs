use std::collections::BTreeMap;

use super::ImportLookup;
use crate::model::Package;
use crate::syntax::ImportSpec;

fn spec(alias: Option<&str>, path: &str) -> ImportSpec {
    ImportSpec {
        alias: alias.map(str::to_string),
        path: path.to_string(),
    }
}

#[test]
fn known_import_wins() {
    let mut known = BTreeMap::new();
    known.insert("model".to_string(), Package::new("example.com/registered/model"));
    let specs = [spec(None, "example.com/declared/model")];

    let mut lookup = ImportLookup::new(&mut known, &specs);

    assert_eq!(
        lookup.lookup("model"),
        Some(Package::new("example.com/registered/model"))
    );
}

#[test]
fn alias_before_suffix() {
    let mut known = BTreeMap::new();
    let specs = [
        spec(None, "example.com/a/store"),
        spec(Some("store"), "example.com/b/persistence"),
    ];

    let mut lookup = ImportLookup::new(&mut known, &specs);

    assert_eq!(
        lookup.lookup("store"),
        Some(Package::new("example.com/b/persistence"))
    );
}

#[test]
fn suffix_matches_final_component_only() {
    let mut known = BTreeMap::new();
    let specs = [
        spec(None, "example.com/xmodel"),
        spec(None, "example.com/domain/model"),
        spec(None, "context"),
    ];

    let mut lookup = ImportLookup::new(&mut known, &specs);

    assert_eq!(
        lookup.lookup("model"),
        Some(Package::new("example.com/domain/model"))
    );
    assert_eq!(lookup.lookup("context"), Some(Package::new("context")));
}

#[test]
fn hit_is_cached() {
    let mut known = BTreeMap::new();
    let specs = [spec(Some("m"), "example.com/domain/model")];

    {
        let mut lookup = ImportLookup::new(&mut known, &specs);
        assert!(lookup.lookup("m").is_some());
        assert!(lookup.lookup("m").is_some());
    }

    assert_eq!(known.len(), 1);
    assert_eq!(known["m"], Package::new("example.com/domain/model"));
}

#[test]
fn miss_returns_none_and_caches_nothing() {
    let mut known = BTreeMap::new();
    let specs = [spec(None, "example.com/domain/model")];

    {
        let mut lookup = ImportLookup::new(&mut known, &specs);
        assert_eq!(lookup.lookup("http"), None);
    }

    assert!(known.is_empty());
}
