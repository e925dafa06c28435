use super::*;

#[test]
#[cfg(feature = "lang-go")]
fn lang_from_extension() {
    assert!(from_ext("go").is_some());
    assert!(from_ext("GO").is_some());
    assert!(from_ext("rs").is_none());
    assert!(from_ext("").is_none());
}

#[test]
#[cfg(feature = "lang-go")]
fn go_is_shared() {
    assert!(Arc::ptr_eq(&go(), &go()));
}

#[test]
#[cfg(feature = "lang-go")]
fn parse_go_source() {
    let lang = go();
    let tree = lang.parse("package repo\n\ntype Repo interface {}\n").unwrap();
    let root = tree.root_node();

    assert_eq!(root.kind(), "source_file");
    assert!(!root.has_error());
}

#[test]
#[cfg(feature = "lang-go")]
fn parse_reports_syntax_errors_in_tree() {
    let lang = go();
    let tree = lang.parse("package repo\n\ntype Repo interface {\n").unwrap();

    assert!(tree.root_node().has_error());
}
